use crate::config::{ConfigStore, decode_settings, encode_settings};
use crate::error::{Result, SpacerError};
use crate::rules::{Rule, RuleField, RuleSet};
use crate::settings::view::PanelView;
use serde_json::{Map, Value};
use tracing::debug;

/// Owns the in-memory rule set and persists it after every mutation.
///
/// This is the only holder of mutable access to the rules. Readers get a
/// shared snapshot through [`SettingsManager::rules`].
///
/// When a save fails the mutation stays applied in memory and the error is
/// returned, so the caller can retry with [`SettingsManager::save`].
#[derive(Debug)]
pub struct SettingsManager<S: ConfigStore> {
	store: S,
	rules: RuleSet,
	extra: Map<String, Value>,
}

impl<S: ConfigStore> SettingsManager<S> {
	/// Load the rule set from `store`, falling back to the default rule.
	pub fn load(store: S) -> Result<Self> {
		let stored = store.load()?;
		let decoded = decode_settings(stored);
		debug!(
			location = %store.location(),
			rules = decoded.rules.len(),
			"settings loaded"
		);

		Ok(SettingsManager {
			store,
			rules: decoded.rules,
			extra: decoded.extra,
		})
	}

	pub fn rules(&self) -> &RuleSet {
		&self.rules
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	/// The document that [`SettingsManager::save`] would write.
	pub fn to_value(&self) -> Result<Value> {
		encode_settings(&self.rules, &self.extra)
	}

	/// Persist the current rule set.
	pub fn save(&mut self) -> Result<()> {
		let value = self.to_value()?;
		self.store.save(&value)?;
		debug!(rules = self.rules.len(), "settings persisted");
		Ok(())
	}

	/// Append an empty rule, persist, and return the re-rendered panel.
	pub fn add_rule(&mut self) -> Result<PanelView> {
		self.rules.push(Rule::default());
		self.save()?;
		Ok(self.display())
	}

	/// Set one field of the rule at `index`, then persist.
	///
	/// An out-of-bounds index changes nothing and saves nothing.
	pub fn update_rule(&mut self, index: usize, field: RuleField, value: &str) -> Result<()> {
		let len = self.rules.len();
		let rule = self
			.rules
			.get_mut(index)
			.ok_or(SpacerError::IndexOutOfBounds { index, len })?;
		rule.set_field(field, value);
		self.save()
	}

	/// Remove the rule at `index`, persist, and return the re-rendered panel.
	pub fn delete_rule(&mut self, index: usize) -> Result<PanelView> {
		let len = self.rules.len();
		self.rules
			.remove(index)
			.ok_or(SpacerError::IndexOutOfBounds { index, len })?;
		self.save()?;
		Ok(self.display())
	}

	pub fn display(&self) -> PanelView {
		PanelView::render(&self.rules)
	}
}
