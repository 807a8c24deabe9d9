//! `.env` file reading.
//!
//! Responsibilities:
//! - Parse a located `.env` file into ordered `EnvEntries` using `dotenvy`.
//!
//! Does NOT handle:
//! - Exporting values into the process environment.
//! - Deciding what a load failure means for startup (see `pipeline.rs`).
//!
//! Invariants:
//! - A location is a directory holding `.env`; a location that is itself a file is read directly.
//! - A parse error anywhere in the file yields no entries at all.
//! - Errors never include raw .env line contents.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::constants::ENV_FILE_NAME;
use crate::types::EnvEntries;

/// Path of the `.env` file for a resolved location.
pub fn env_file_path(location: &Path) -> PathBuf {
    if location.is_file() {
        location.to_path_buf()
    } else {
        location.join(ENV_FILE_NAME)
    }
}

/// Load all key/value pairs from the `.env` file at `location`.
///
/// # Errors
///
/// - `ConfigError::EnvFileNotFound` if there is no `.env` file at the location.
/// - `ConfigError::DotenvParse` if the file has invalid syntax.
/// - `ConfigError::DotenvIo` if the file cannot be read.
pub fn load_env_file(location: &Path) -> Result<EnvEntries, ConfigError> {
    let path = env_file_path(location);

    let iter = match dotenvy::from_path_iter(&path) {
        Ok(iter) => iter,
        Err(dotenvy::Error::Io(io_err)) if io_err.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::EnvFileNotFound { path });
        }
        Err(e) => return Err(e.into()),
    };

    let mut entries = EnvEntries::new();
    for item in iter {
        let (key, value) = item?;
        entries.insert(key, value);
    }

    Ok(entries)
}
