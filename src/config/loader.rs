//! Configuration loading functionality
//!
//! This module contains functions for locating, loading and validating the theme.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;
use log::{debug, info};
use serde_yaml::from_str;

use crate::constants::{APPLICATION, DEFAULT_CONFIG_FILE, ORGANIZATION, QUALIFIER};

use super::model::Theme;

/// Loads a theme from a YAML file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<Theme>` - The loaded theme or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the theme is invalid
pub fn load_config(file: &Path) -> Result<Theme> {
    let content = fs::read_to_string(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    // An empty file means "all defaults"
    let theme: Theme = if content.trim().is_empty() {
        Theme::default()
    } else {
        from_str(&content).map_err(|e| {
            anyhow!(
                "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
                file.display(),
                e
            )
        })?
    };

    theme
        .validate()
        .map_err(|e| anyhow!("Invalid configuration file {}: {}", file.display(), e))?;

    debug!(
        "Loaded theme from {} with {} custom roles",
        file.display(),
        theme.roles.len()
    );

    Ok(theme)
}

/// Path of the configuration file in the platform configuration directory
///
/// Returns `None` when the platform has no notion of a home directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().join(DEFAULT_CONFIG_FILE))
}

/// Resolves the theme to use for this run
///
/// An explicitly given file must exist. Otherwise the file in the platform
/// configuration directory is used when present, and the built-in theme when
/// it is not.
///
/// # Arguments
/// * `explicit` - Path given on the command line, if any
///
/// # Errors
/// Returns an error if the selected file cannot be loaded
pub fn resolve_theme(explicit: Option<&Path>) -> Result<Theme> {
    if let Some(path) = explicit {
        info!("Using configuration file {}", path.display());
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            info!("Using configuration file {}", path.display());
            load_config(&path)
        }
        _ => {
            debug!("No configuration file found, using the built-in theme");
            Ok(Theme::default())
        }
    }
}
