/// Library-level structured errors for safe-spacer.
///
/// The binary wraps these with `anyhow` for context chains.
#[derive(Debug, thiserror::Error)]
pub enum SpacerError {
	#[error("Rule index {index} is out of bounds (rule count: {len})")]
	IndexOutOfBounds { index: usize, len: usize },

	#[error("Failed to read settings from {location}")]
	StoreRead {
		location: String,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to persist settings to {location}")]
	StoreWrite {
		location: String,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to encode settings")]
	Serialize {
		#[source]
		source: serde_json::Error,
	},

	#[error("Search string of rule {index} cannot be compiled ({len} bytes)")]
	InvalidPattern {
		index: usize,
		len: usize,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to resolve the configuration directory")]
	ConfigDirNotFound,
}

impl SpacerError {
	/// Whether this error means a mutation was not persisted.
	///
	/// The in-memory rule set still holds the change, so the caller may retry.
	pub fn is_persistence(&self) -> bool {
		matches!(
			self,
			SpacerError::StoreWrite { .. } | SpacerError::Serialize { .. }
		)
	}
}

/// Result type alias using SpacerError.
pub type Result<T> = std::result::Result<T, SpacerError>;
