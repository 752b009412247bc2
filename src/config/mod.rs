//! Configuration module
//!
//! This module contains components for loading and validating the diagram theme.

mod loader;
mod model;

pub use loader::{default_config_path, load_config, resolve_theme};
pub use model::{Palette, Theme};
