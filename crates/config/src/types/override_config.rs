//! Resolved configuration for the override pipeline.

use std::path::PathBuf;

use crate::constants::DEFAULT_KEY_PREFIX;
use crate::types::AppPaths;

/// Typed replacement for the location, candidate-list, and prefix hooks.
///
/// Build one with [`crate::OverrideLoader`] to honor process-environment
/// overrides, or with [`OverrideConfig::for_paths`] for plain defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideConfig {
    /// Location used as-is, bypassing discovery. Default: `None`.
    pub file_location_override: Option<PathBuf>,
    /// Directories probed in order for a `.env` file.
    /// Default: [`AppPaths::default_candidates`].
    pub candidate_directories: Vec<PathBuf>,
    /// Case-insensitive key prefix. Default: `WPENV`.
    pub key_prefix: String,
    /// Skip the whole pipeline. Default: `false`.
    pub disabled: bool,
}

impl OverrideConfig {
    /// Default configuration for the given application layout.
    pub fn for_paths(paths: &AppPaths) -> Self {
        Self {
            file_location_override: None,
            candidate_directories: paths.default_candidates(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            disabled: false,
        }
    }
}
