use crate::rules::RuleSet;
use std::fmt;

pub const PANEL_HEADING: &str = "Safe Spacer settings";
pub const SEARCH_PLACEHOLDER: &str = "Enter search string";
pub const REPLACE_PLACEHOLDER: &str = "Enter replacement string";
pub const DELETE_TOOLTIP: &str = "Delete rule";
pub const ADD_BUTTON_LABEL: &str = "Add rule";

/// A labelled text input bound to one rule field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
	pub placeholder: &'static str,
	pub value: String,
}

/// One settings row: search input, replacement input, delete affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRow {
	pub index: usize,
	pub name: String,
	pub search: TextInput,
	pub replace: TextInput,
	pub delete_tooltip: &'static str,
}

/// Everything the settings surface needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
	pub heading: &'static str,
	pub rows: Vec<RuleRow>,
	pub add_button: &'static str,
}

impl PanelView {
	pub fn render(rules: &RuleSet) -> Self {
		let rows = rules
			.into_iter()
			.enumerate()
			.map(|(index, rule)| RuleRow {
				index,
				name: format!("Rule {}", index + 1),
				search: TextInput {
					placeholder: SEARCH_PLACEHOLDER,
					value: rule.search.clone(),
				},
				replace: TextInput {
					placeholder: REPLACE_PLACEHOLDER,
					value: rule.replace.clone(),
				},
				delete_tooltip: DELETE_TOOLTIP,
			})
			.collect();

		PanelView {
			heading: PANEL_HEADING,
			rows,
			add_button: ADD_BUTTON_LABEL,
		}
	}
}

impl fmt::Display for TextInput {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.value.is_empty() {
			write!(f, "<{}>", self.placeholder)
		} else {
			write!(f, "{:?}", self.value)
		}
	}
}

impl fmt::Display for PanelView {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{}", self.heading)?;
		writeln!(f)?;
		for row in &self.rows {
			writeln!(
				f,
				"  [{}] {}: {} -> {}  (✕ {})",
				row.index, row.name, row.search, row.replace, row.delete_tooltip
			)?;
		}
		write!(f, "  [+] {}", self.add_button)
	}
}
