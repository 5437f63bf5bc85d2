//! Rule types and the text transformation engine.
//!
//! This module handles:
//! - The ordered rule list and its default contents
//! - Literal escaping and sequential global replacement

pub mod transformer;
pub mod types;

pub use transformer::{TextTransformer, apply, escape_literal};
pub use types::{DEFAULT_REPLACE, DEFAULT_SEARCH, Rule, RuleField, RuleSet};
