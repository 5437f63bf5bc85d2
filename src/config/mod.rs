//! Settings persistence for safe-spacer.
//!
//! This module handles:
//! - The stored JSON document format
//! - Decoding with fallback to the default rule
//! - File-backed and in-memory stores

pub mod parser;
pub mod store;
pub mod types;

pub use parser::{DecodedSettings, decode_settings, encode_settings};
pub use store::{ConfigStore, DATA_FILE_NAME, JsonFileStore, MemoryStore, default_data_path};
pub use types::{PersistedRule, PersistedSettings, TRANSFORM_RULES_KEY};
