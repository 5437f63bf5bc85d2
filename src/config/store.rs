use crate::error::{Result, SpacerError};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the settings document inside its directory.
pub const DATA_FILE_NAME: &str = "data.json";

/// Key-value persistence for the settings document.
///
/// `load` returns `None` when nothing has been stored yet. A `save` must
/// complete before the next `load` observes it.
pub trait ConfigStore {
	fn load(&self) -> Result<Option<Value>>;

	fn save(&mut self, data: &Value) -> Result<()>;

	/// Human-readable location for diagnostics.
	fn location(&self) -> String;
}

/// Stores the settings document as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
}

impl JsonFileStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		JsonFileStore { path: path.into() }
	}

	/// Store at the default location in the platform config directory.
	pub fn at_default_path() -> Result<Self> {
		Ok(JsonFileStore::new(default_data_path()?))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl ConfigStore for JsonFileStore {
	fn load(&self) -> Result<Option<Value>> {
		let content = match std::fs::read_to_string(&self.path) {
			Ok(content) => content,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %self.path.display(), "no stored settings");
				return Ok(None);
			}
			Err(source) => {
				return Err(SpacerError::StoreRead {
					location: self.location(),
					source,
				});
			}
		};

		match serde_json::from_str(&content) {
			Ok(value) => Ok(Some(value)),
			Err(e) => {
				warn!(path = %self.path.display(), error = %e, "stored settings are not valid JSON, treating as absent");
				Ok(None)
			}
		}
	}

	fn save(&mut self, data: &Value) -> Result<()> {
		let write_error = |source: std::io::Error| SpacerError::StoreWrite {
			location: self.location(),
			source,
		};

		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			std::fs::create_dir_all(parent).map_err(write_error)?;
		}

		let mut content =
			serde_json::to_string_pretty(data).map_err(|source| SpacerError::Serialize { source })?;
		content.push('\n');
		std::fs::write(&self.path, content).map_err(write_error)?;

		debug!(path = %self.path.display(), "settings saved");
		Ok(())
	}

	fn location(&self) -> String {
		self.path.display().to_string()
	}
}

/// Keeps the settings document in memory. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	data: Option<Value>,
	saves: usize,
}

impl MemoryStore {
	pub fn new() -> Self {
		MemoryStore::default()
	}

	/// A store that already holds `data`, as if saved by an earlier session.
	pub fn with_data(data: Value) -> Self {
		MemoryStore {
			data: Some(data),
			saves: 0,
		}
	}

	pub fn data(&self) -> Option<&Value> {
		self.data.as_ref()
	}

	/// Number of successful saves.
	pub fn saves(&self) -> usize {
		self.saves
	}
}

impl ConfigStore for MemoryStore {
	fn load(&self) -> Result<Option<Value>> {
		Ok(self.data.clone())
	}

	fn save(&mut self, data: &Value) -> Result<()> {
		self.data = Some(data.clone());
		self.saves += 1;
		Ok(())
	}

	fn location(&self) -> String {
		"memory".to_string()
	}
}

/// Path of the settings document in the platform config directory.
pub fn default_data_path() -> Result<PathBuf> {
	let config_dir = dirs::config_dir().ok_or(SpacerError::ConfigDirNotFound)?;
	Ok(config_dir.join("safe-spacer").join(DATA_FILE_NAME))
}
