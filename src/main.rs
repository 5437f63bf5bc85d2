use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use safe_spacer::config::{ConfigStore, JsonFileStore};
use safe_spacer::hooks::{RenderHook, SafeSpacer};
use safe_spacer::rules::RuleField;

#[derive(Parser)]
#[command(name = "safe-spacer")]
#[command(
	author,
	version,
	about = "Apply literal search/replace rules to rendered note content"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Settings file to use instead of the default location
	#[arg(long, global = true, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Log level when RUST_LOG is not set (trace, debug, info, warn, error)
	#[arg(long, global = true, default_value = "warn")]
	log_level: String,
}

#[derive(Subcommand)]
enum Commands {
	/// Transform a content block (file or stdin) and print the result
	Render {
		/// File to read; reads stdin when omitted
		#[arg(value_name = "FILE")]
		input: Option<PathBuf>,
	},
	/// Edit the rule list
	Rules {
		#[command(subcommand)]
		action: RulesAction,
	},
	/// Settings file inspection
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum RulesAction {
	/// Show the settings panel
	List,
	/// Append an empty rule
	Add,
	/// Set the search or replacement string of a rule
	Set {
		/// Rule index (0-based)
		index: usize,
		/// Field to change: search or replace
		field: RuleField,
		/// New value
		#[arg(allow_hyphen_values = true)]
		value: String,
	},
	/// Remove a rule
	Delete {
		/// Rule index (0-based)
		index: usize,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Print the effective settings document
	Show,
	/// Print the settings file location
	Path,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(&cli.log_level);

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(level: &str) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn run(cli: Cli) -> Result<ExitCode> {
	let store = match cli.config {
		Some(path) => JsonFileStore::new(path),
		None => JsonFileStore::at_default_path().context("Failed to locate settings file")?,
	};

	match cli.command {
		Commands::Render { input } => handle_render(&load_plugin(store)?, input),
		Commands::Rules { action } => handle_rules(load_plugin(store)?, action),
		Commands::Config { action } => match action {
			ConfigAction::Show => handle_config_show(&load_plugin(store)?),
			ConfigAction::Path => {
				// Does not read the settings file.
				println!("{}", store.path().display());
				Ok(ExitCode::SUCCESS)
			}
		},
	}
}

fn load_plugin(store: JsonFileStore) -> Result<SafeSpacer<JsonFileStore>> {
	let location = store.location();
	SafeSpacer::load(store).with_context(|| format!("Failed to load settings from {location}"))
}

fn handle_rules(mut plugin: SafeSpacer<JsonFileStore>, action: RulesAction) -> Result<ExitCode> {
	let settings = plugin.settings_mut();
	let view = match action {
		RulesAction::List => settings.display(),
		RulesAction::Add => settings.add_rule().context("Failed to add rule")?,
		RulesAction::Set {
			index,
			field,
			value,
		} => {
			settings
				.update_rule(index, field, &value)
				.with_context(|| format!("Failed to set {field} of rule {index}"))?;
			settings.display()
		}
		RulesAction::Delete { index } => settings
			.delete_rule(index)
			.with_context(|| format!("Failed to delete rule {index}"))?,
	};
	println!("{view}");
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(plugin: &SafeSpacer<JsonFileStore>) -> Result<ExitCode> {
	let value = plugin.settings().to_value()?;
	println!("{}", serde_json::to_string_pretty(&value)?);
	Ok(ExitCode::SUCCESS)
}

fn handle_render(plugin: &SafeSpacer<JsonFileStore>, input: Option<PathBuf>) -> Result<ExitCode> {
	let text = match input {
		Some(path) => std::fs::read_to_string(&path)
			.with_context(|| format!("Failed to read {}", path.display()))?,
		None => {
			let mut buf = String::new();
			std::io::stdin()
				.read_to_string(&mut buf)
				.context("Failed to read stdin")?;
			buf
		}
	};

	let output = plugin.on_render_block(&text);
	let mut stdout = std::io::stdout().lock();
	stdout
		.write_all(output.as_bytes())
		.context("Failed to write output")?;
	Ok(ExitCode::SUCCESS)
}
