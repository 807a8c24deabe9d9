//! Override configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `OverrideLoader` for hierarchical configuration merging.
//! - Support loading from environment variables and direct builder methods.
//! - Build and validate the final `OverrideConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Running the override pipeline (see `pipeline.rs`).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Unset values fall back to the defaults derived from `AppPaths`.
//! - A blank key prefix is rejected rather than matching every key.

use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::DEFAULT_KEY_PREFIX;
use crate::types::{AppPaths, OverrideConfig};

/// Configuration loader that builds an `OverrideConfig` from builder values,
/// environment variables, and defaults.
#[derive(Debug, Clone)]
pub struct OverrideLoader {
    paths: AppPaths,
    location: Option<PathBuf>,
    candidate_directories: Option<Vec<PathBuf>>,
    key_prefix: Option<String>,
    disabled: bool,
}

impl OverrideLoader {
    /// Create a new loader for the given application layout.
    pub fn new(paths: AppPaths) -> Self {
        Self {
            paths,
            location: None,
            candidate_directories: None,
            key_prefix: None,
            disabled: false,
        }
    }

    /// Read configuration from `DOTENV_*` environment variables.
    ///
    /// Values already set through builder methods are kept.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Use this location directly instead of searching candidate directories.
    pub fn with_location(mut self, location: PathBuf) -> Self {
        self.location = Some(location);
        self
    }

    /// Replace the whole candidate directory list.
    pub fn with_candidate_directories(mut self, directories: Vec<PathBuf>) -> Self {
        self.candidate_directories = Some(directories);
        self
    }

    /// Set the key prefix used for filtering.
    pub fn with_key_prefix(mut self, prefix: String) -> Self {
        self.key_prefix = Some(prefix);
        self
    }

    /// Disable the override pipeline entirely.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<OverrideConfig, ConfigError> {
        let key_prefix = match self.key_prefix {
            Some(prefix) => validate_key_prefix(&prefix)?,
            None => DEFAULT_KEY_PREFIX.to_string(),
        };

        let file_location_override = self.location.filter(|path| !path.as_os_str().is_empty());

        let candidate_directories = self
            .candidate_directories
            .unwrap_or_else(|| self.paths.default_candidates());

        Ok(OverrideConfig {
            file_location_override,
            candidate_directories,
            key_prefix,
            disabled: self.disabled,
        })
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn location(&self) -> Option<&PathBuf> {
        self.location.as_ref()
    }

    pub(crate) fn candidate_directories(&self) -> Option<&Vec<PathBuf>> {
        self.candidate_directories.as_ref()
    }

    pub(crate) fn key_prefix(&self) -> Option<&String> {
        self.key_prefix.as_ref()
    }

    pub(crate) fn set_location(&mut self, location: Option<PathBuf>) {
        self.location = location;
    }

    pub(crate) fn set_candidate_directories(&mut self, directories: Option<Vec<PathBuf>>) {
        self.candidate_directories = directories;
    }

    pub(crate) fn set_key_prefix(&mut self, prefix: Option<String>) {
        self.key_prefix = prefix;
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

/// Validates a key prefix.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Reject blank prefixes
/// - Reject prefixes ending in the separator (it is appended during matching)
fn validate_key_prefix(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "key_prefix".into(),
            message: "must not be empty".into(),
        });
    }

    if trimmed.ends_with(crate::constants::KEY_SEPARATOR) {
        return Err(ConfigError::InvalidValue {
            var: "key_prefix".into(),
            message: format!(
                "must not end with '{}' (e.g. WPENV, not WPENV_)",
                crate::constants::KEY_SEPARATOR
            ),
        });
    }

    Ok(trimmed.to_string())
}
