//! Path helpers for the settings store location.
//!
//! Responsibilities:
//! - Determine the standard settings file path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_NAME, SETTINGS_FILE_NAME};

/// Returns the default path to the settings file.
///
/// - Linux: `~/.config/envopt/options.json`
/// - macOS: `~/Library/Application Support/envopt/options.json`
/// - Windows: `%AppData%\envopt\config\options.json`
pub fn default_settings_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(SETTINGS_FILE_NAME))
}
