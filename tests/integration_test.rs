#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn spacer_cmd(config: &Path) -> assert_cmd::Command {
	let mut cmd = assert_cmd::Command::cargo_bin("safe-spacer").unwrap();
	cmd.arg("--config").arg(config).env_remove("RUST_LOG");
	cmd
}

fn read_json(path: &Path) -> serde_json::Value {
	serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	assert_cmd::Command::cargo_bin("safe-spacer")
		.unwrap()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("literal search/replace rules"));
}

#[test]
fn test_version_flag() {
	assert_cmd::Command::cargo_bin("safe-spacer")
		.unwrap()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("safe-spacer"));
}

#[test]
fn test_no_args_shows_help() {
	assert_cmd::Command::cargo_bin("safe-spacer")
		.unwrap()
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// render tests
// ============================================================================

#[test]
fn test_render_uses_default_rule_without_settings() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");

	spacer_cmd(&config_path)
		.arg("render")
		.write_stdin("a//b//c")
		.assert()
		.success()
		.stdout("a\u{3000}b\u{3000}c");

	// Rendering never writes settings.
	assert!(!config_path.exists());
}

#[test]
fn test_render_file_with_stored_rules() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");
	let input_path = temp_dir.path().join("note.html");

	fs::write(
		&config_path,
		r#"{
  "transformRules": [
    { "searchString": "(c)", "replaceString": "©" },
    { "searchString": "©", "replaceString": "[copyright]" }
  ]
}"#,
	)
	.unwrap();
	fs::write(&input_path, "<p>(c) 2024 a.b</p>\n").unwrap();

	spacer_cmd(&config_path)
		.arg("render")
		.arg(&input_path)
		.assert()
		.success()
		.stdout("<p>[copyright] 2024 a.b</p>\n");
}

#[test]
fn test_render_with_empty_rule_list_is_identity() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");
	fs::write(&config_path, r#"{ "transformRules": [] }"#).unwrap();

	spacer_cmd(&config_path)
		.arg("render")
		.write_stdin("a//b")
		.assert()
		.success()
		.stdout("a//b");
}

#[test]
fn test_render_falls_back_on_malformed_settings() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");
	fs::write(&config_path, "{ not json").unwrap();

	spacer_cmd(&config_path)
		.arg("render")
		.write_stdin("x//y")
		.assert()
		.success()
		.stdout("x\u{3000}y")
		.stderr(predicate::str::contains("treating as absent"));
}

#[test]
fn test_render_missing_input_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");

	spacer_cmd(&config_path)
		.args(["render", "/nonexistent/note.md"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to read"));
}

// ============================================================================
// rules subcommand tests
// ============================================================================

#[test]
fn test_rules_list_shows_default() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");

	spacer_cmd(&config_path)
		.args(["rules", "list"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Safe Spacer settings"))
		.stdout(predicate::str::contains("Rule 1: \"//\""))
		.stdout(predicate::str::contains("Add rule"));
}

#[test]
fn test_rules_add_persists_empty_rule() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");

	spacer_cmd(&config_path)
		.args(["rules", "add"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Rule 2: <Enter search string>"));

	let stored = read_json(&config_path);
	assert_eq!(
		stored,
		serde_json::json!({
			"transformRules": [
				{ "searchString": "//", "replaceString": "\u{3000}" },
				{ "searchString": "", "replaceString": "" }
			]
		})
	);
}

#[test]
fn test_rules_set_then_render() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");

	spacer_cmd(&config_path).args(["rules", "add"]).assert().success();
	spacer_cmd(&config_path)
		.args(["rules", "set", "1", "search", "=>"])
		.assert()
		.success();
	spacer_cmd(&config_path)
		.args(["rules", "set", "1", "replace", "⇒"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Rule 2: \"=>\" -> \"⇒\""));

	spacer_cmd(&config_path)
		.arg("render")
		.write_stdin("a => b // c")
		.assert()
		.success()
		.stdout("a ⇒ b \u{3000} c");
}

#[test]
fn test_rules_set_out_of_bounds_fails_without_writing() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");

	spacer_cmd(&config_path)
		.args(["rules", "set", "3", "search", "x"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("out of bounds"));

	assert!(!config_path.exists());
}

#[test]
fn test_rules_set_rejects_unknown_field() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");

	spacer_cmd(&config_path)
		.args(["rules", "set", "0", "pattern", "x"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("unknown rule field"));
}

#[test]
fn test_rules_delete() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");

	spacer_cmd(&config_path)
		.args(["rules", "delete", "0"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Rule 1").not());

	assert_eq!(
		read_json(&config_path),
		serde_json::json!({ "transformRules": [] })
	);

	spacer_cmd(&config_path)
		.args(["rules", "delete", "0"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("out of bounds"));
}

#[test]
fn test_rules_mutation_keeps_unknown_keys() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");
	fs::write(
		&config_path,
		r#"{ "transformRules": [], "pinned": true }"#,
	)
	.unwrap();

	spacer_cmd(&config_path).args(["rules", "add"]).assert().success();

	let stored = read_json(&config_path);
	assert_eq!(stored["pinned"], serde_json::json!(true));
	assert_eq!(stored["transformRules"].as_array().unwrap().len(), 1);
}

#[test]
fn test_unreadable_settings_fail_without_writing() {
	let temp_dir = tempfile::tempdir().unwrap();
	// A directory in place of the settings file cannot be read.
	let config_path = temp_dir.path().join("data.json");
	fs::create_dir(&config_path).unwrap();

	spacer_cmd(&config_path)
		.args(["rules", "add"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to read settings"));

	assert!(config_path.is_dir());
	assert_eq!(fs::read_dir(&config_path).unwrap().count(), 0);
}

#[test]
fn test_render_long_search_keeps_default_rule() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");
	let settings = serde_json::json!({
		"transformRules": [
			{ "searchString": "//", "replaceString": "\u{3000}" },
			{ "searchString": "é".repeat(200_000), "replaceString": "x" }
		]
	});
	fs::write(&config_path, settings.to_string()).unwrap();

	spacer_cmd(&config_path)
		.arg("render")
		.write_stdin("a//b")
		.assert()
		.success()
		.stdout("a\u{3000}b");
}

// ============================================================================
// config subcommand tests
// ============================================================================

#[test]
fn test_config_path() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");

	spacer_cmd(&config_path)
		.args(["config", "path"])
		.assert()
		.success()
		.stdout(predicate::str::contains(config_path.to_string_lossy().into_owned()));
}

#[test]
fn test_config_show_default() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("data.json");

	spacer_cmd(&config_path)
		.args(["config", "show"])
		.assert()
		.success()
		.stdout(predicate::str::contains("\"transformRules\""))
		.stdout(predicate::str::contains("\"searchString\": \"//\""))
		.stdout(predicate::str::contains("\"replaceString\": \"\u{3000}\""));
}
