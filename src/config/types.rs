use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key under which the rule list is stored.
pub const TRANSFORM_RULES_KEY: &str = "transformRules";

/// On-disk settings document.
///
/// Field names are fixed by existing saved configurations. Keys this crate
/// does not know about are carried through untouched.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSettings {
	/// Rules in application order.
	pub transform_rules: Vec<PersistedRule>,

	/// Any other top-level keys found in the stored document.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// A single stored rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedRule {
	pub search_string: String,
	pub replace_string: String,
}
