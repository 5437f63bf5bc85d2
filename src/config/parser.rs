use crate::config::types::{PersistedRule, PersistedSettings, TRANSFORM_RULES_KEY};
use crate::error::{Result, SpacerError};
use crate::rules::{Rule, RuleSet};
use serde_json::{Map, Value};
use tracing::warn;

/// Settings decoded from a stored document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedSettings {
	/// The rule list, or the default rule when none was usable.
	pub rules: RuleSet,

	/// Unknown top-level keys, written back on every save.
	pub extra: Map<String, Value>,
}

/// Decode a stored document, layering it over the defaults.
///
/// Absent or malformed state never fails: the default rule set is used
/// instead. An explicitly empty rule list is kept as-is.
pub fn decode_settings(stored: Option<Value>) -> DecodedSettings {
	let mut object = match stored {
		None | Some(Value::Null) => return defaults(),
		Some(Value::Object(object)) => object,
		Some(other) => {
			warn!(kind = value_kind(&other), "stored settings are not an object, using defaults");
			return defaults();
		}
	};

	let rules = match object.remove(TRANSFORM_RULES_KEY) {
		None => RuleSet::with_default_rule(),
		Some(value) => match serde_json::from_value::<Vec<PersistedRule>>(value) {
			Ok(stored_rules) => stored_rules.into_iter().map(Rule::from).collect(),
			Err(e) => {
				warn!(error = %e, "stored rule list is malformed, using defaults");
				RuleSet::with_default_rule()
			}
		},
	};

	DecodedSettings {
		rules,
		extra: object,
	}
}

/// Encode a rule set (plus carried-through keys) into the stored document.
pub fn encode_settings(rules: &RuleSet, extra: &Map<String, Value>) -> Result<Value> {
	let settings = PersistedSettings {
		transform_rules: rules.into_iter().map(PersistedRule::from).collect(),
		extra: extra.clone(),
	};
	serde_json::to_value(settings).map_err(|source| SpacerError::Serialize { source })
}

fn defaults() -> DecodedSettings {
	DecodedSettings {
		rules: RuleSet::with_default_rule(),
		extra: Map::new(),
	}
}

fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

impl From<PersistedRule> for Rule {
	fn from(stored: PersistedRule) -> Self {
		Rule::new(stored.search_string, stored.replace_string)
	}
}

impl From<&Rule> for PersistedRule {
	fn from(rule: &Rule) -> Self {
		PersistedRule {
			search_string: rule.search.clone(),
			replace_string: rule.replace.clone(),
		}
	}
}
