use std::fmt;
use std::str::FromStr;

/// Search string of the rule every fresh installation starts with.
pub const DEFAULT_SEARCH: &str = "//";

/// Full-width space (U+3000) that replaces [`DEFAULT_SEARCH`].
pub const DEFAULT_REPLACE: &str = "\u{3000}";

/// A literal search string paired with a literal replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
	/// Text to find. Matched literally; an empty search never matches.
	pub search: String,

	/// Text inserted in place of every match.
	pub replace: String,
}

impl Rule {
	pub fn new(search: impl Into<String>, replace: impl Into<String>) -> Self {
		Rule {
			search: search.into(),
			replace: replace.into(),
		}
	}

	/// Borrow the named field.
	pub fn field(&self, field: RuleField) -> &str {
		match field {
			RuleField::Search => &self.search,
			RuleField::Replace => &self.replace,
		}
	}

	/// Overwrite the named field, leaving the other untouched.
	pub fn set_field(&mut self, field: RuleField, value: impl Into<String>) {
		match field {
			RuleField::Search => self.search = value.into(),
			RuleField::Replace => self.replace = value.into(),
		}
	}
}

/// Which half of a rule an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleField {
	Search,
	Replace,
}

impl RuleField {
	pub fn as_str(&self) -> &'static str {
		match self {
			RuleField::Search => "search",
			RuleField::Replace => "replace",
		}
	}
}

impl fmt::Display for RuleField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for RuleField {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"search" => Ok(RuleField::Search),
			"replace" => Ok(RuleField::Replace),
			other => Err(format!(
				"unknown rule field '{other}' (expected 'search' or 'replace')"
			)),
		}
	}
}

/// The user's ordered rule list. Order is application order.
///
/// Duplicates are allowed and applied in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
	rules: Vec<Rule>,
}

impl RuleSet {
	/// An empty rule set (transforms nothing).
	pub fn new() -> Self {
		RuleSet::default()
	}

	/// The rule set used when nothing has been persisted yet.
	pub fn with_default_rule() -> Self {
		RuleSet {
			rules: vec![Rule::new(DEFAULT_SEARCH, DEFAULT_REPLACE)],
		}
	}

	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&Rule> {
		self.rules.get(index)
	}

	pub(crate) fn push(&mut self, rule: Rule) {
		self.rules.push(rule);
	}

	pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Rule> {
		self.rules.get_mut(index)
	}

	pub(crate) fn remove(&mut self, index: usize) -> Option<Rule> {
		if index < self.rules.len() {
			Some(self.rules.remove(index))
		} else {
			None
		}
	}
}

impl From<Vec<Rule>> for RuleSet {
	fn from(rules: Vec<Rule>) -> Self {
		RuleSet { rules }
	}
}

impl FromIterator<Rule> for RuleSet {
	fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
		RuleSet {
			rules: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a RuleSet {
	type Item = &'a Rule;
	type IntoIter = std::slice::Iter<'a, Rule>;

	fn into_iter(self) -> Self::IntoIter {
		self.rules.iter()
	}
}
