use crate::config::ConfigStore;
use crate::error::Result;
use crate::rules::TextTransformer;
use crate::settings::SettingsManager;
use tracing::debug;

/// Called by the host once per rendered content block.
///
/// Implementations return the block to display. Markup outside the matched
/// text must come back verbatim.
pub trait RenderHook {
	fn on_render_block(&self, text: &str) -> String;
}

/// The plugin object: a settings manager plus the render hook built on it.
#[derive(Debug)]
pub struct SafeSpacer<S: ConfigStore> {
	settings: SettingsManager<S>,
}

impl<S: ConfigStore> SafeSpacer<S> {
	/// Load settings from `store` and make the hook ready to render.
	pub fn load(store: S) -> Result<Self> {
		let settings = SettingsManager::load(store)?;
		debug!(rules = settings.rules().len(), "safe-spacer loaded");
		Ok(SafeSpacer { settings })
	}

	pub fn settings(&self) -> &SettingsManager<S> {
		&self.settings
	}

	pub fn settings_mut(&mut self) -> &mut SettingsManager<S> {
		&mut self.settings
	}

	/// Compile the current rule snapshot.
	pub fn transformer(&self) -> TextTransformer {
		TextTransformer::new(self.settings.rules().rules())
	}
}

impl<S: ConfigStore> RenderHook for SafeSpacer<S> {
	fn on_render_block(&self, text: &str) -> String {
		self.transformer().transform(text)
	}
}
