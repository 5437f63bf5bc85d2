//! Host integration for safe-spacer.
//!
//! This module handles:
//! - The render hook the host calls per content block
//! - The plugin object tying settings to rendering

pub mod render;

pub use render::{RenderHook, SafeSpacer};
