//! Rule editing for safe-spacer.
//!
//! This module handles:
//! - Add, update and delete operations over the rule list
//! - Persisting after each mutation
//! - The settings panel view model

pub mod manager;
pub mod view;

pub use manager::SettingsManager;
pub use view::{PanelView, RuleRow, TextInput};
