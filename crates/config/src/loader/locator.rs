//! `.env` file discovery.
//!
//! Responsibilities:
//! - Resolve the directory holding the `.env` file from an `OverrideConfig`.
//!
//! Invariants:
//! - An explicit location override short-circuits discovery; it is not checked for existence.
//! - Candidates are probed in list order and the first match wins.
//! - No side effects beyond filesystem metadata lookups.

use std::path::PathBuf;

use tracing::debug;

use crate::constants::ENV_FILE_NAME;
use crate::types::OverrideConfig;

/// Resolve the location of the `.env` file, or `None` if nothing was found.
pub fn resolve_location(config: &OverrideConfig) -> Option<PathBuf> {
    if let Some(location) = &config.file_location_override {
        debug!(location = %location.display(), "Using explicit .env location");
        return Some(location.clone());
    }

    find_env_file(&config.candidate_directories)
}

/// Return the first directory that directly contains a `.env` file.
pub fn find_env_file(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|dir| {
            let found = dir.join(ENV_FILE_NAME).is_file();
            debug!(candidate = %dir.display(), found, "Checked .env candidate");
            found
        })
        .cloned()
}
