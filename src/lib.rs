//! Safe Spacer - literal search/replace rules for rendered note content.
//!
//! This library provides:
//! - An ordered rule list and a literal, sequential text transformer
//! - JSON settings persistence with fallback to a default rule
//! - A settings manager with add/update/delete operations
//! - A render hook that applies the current rules to each content block
//!
//! # Example
//!
//! ```
//! use safe_spacer::config::MemoryStore;
//! use safe_spacer::hooks::{RenderHook, SafeSpacer};
//! use safe_spacer::rules::RuleField;
//!
//! let mut plugin = SafeSpacer::load(MemoryStore::new()).unwrap();
//! assert_eq!(plugin.on_render_block("a//b"), "a\u{3000}b");
//!
//! plugin.settings_mut().add_rule().unwrap();
//! plugin.settings_mut().update_rule(1, RuleField::Search, "->").unwrap();
//! plugin.settings_mut().update_rule(1, RuleField::Replace, "→").unwrap();
//! assert_eq!(plugin.on_render_block("x -> y"), "x → y");
//! ```

pub mod config;
pub mod error;
pub mod hooks;
pub mod rules;
pub mod settings;

pub use error::{Result, SpacerError};
