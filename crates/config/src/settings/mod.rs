//! Host settings storage and the override-aware read path.
//!
//! Responsibilities:
//! - Load stored setting values from a JSON object file (`SettingsStore`).
//! - Resolve reads through the override registry first (`Settings::get`).
//! - Report every effective setting with its origin.
//!
//! Does NOT handle:
//! - Registering overrides (see `pipeline.rs`).
//! - Writing overrides back to the store; overrides live only in memory.
//!
//! Invariants:
//! - An override always wins over a stored value, including an empty stored value.
//! - A missing settings file is an empty store, not an error.

mod path;

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loader::ConfigError;
use crate::registry::OverrideRegistry;

pub use path::default_settings_path;

/// Stored setting values keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsStore {
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from a JSON object of string values.
    ///
    /// # Errors
    ///
    /// - `ConfigError::SettingsFileRead` if the file exists but cannot be read.
    /// - `ConfigError::SettingsFileParse` if the content is not a JSON object of strings.
    pub fn load_json(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Settings file not found; using empty store");
                return Ok(Self::default());
            }
            Err(_) => {
                return Err(ConfigError::SettingsFileRead {
                    path: path.to_path_buf(),
                });
            }
        };

        serde_json::from_str(&content).map_err(|_| ConfigError::SettingsFileParse {
            path: path.to_path_buf(),
        })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for SettingsStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Where an effective setting value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingOrigin {
    Stored,
    Override,
}

/// A setting name with its resolved value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveSetting {
    pub name: String,
    pub value: String,
    pub origin: SettingOrigin,
}

/// The host's setting read path: overrides first, then stored values.
#[derive(Debug, Default)]
pub struct Settings {
    store: SettingsStore,
    overrides: OverrideRegistry,
}

impl Settings {
    pub fn new(store: SettingsStore, overrides: OverrideRegistry) -> Self {
        Self { store, overrides }
    }

    /// Read a setting.
    pub fn get(&self, name: &str) -> Option<String> {
        self.resolve(name).map(|setting| setting.value)
    }

    /// Read a setting along with its origin.
    pub fn resolve(&self, name: &str) -> Option<EffectiveSetting> {
        if let Some(value) = self.overrides.resolve(name) {
            return Some(EffectiveSetting {
                name: name.to_string(),
                value,
                origin: SettingOrigin::Override,
            });
        }

        self.store.get(name).map(|value| EffectiveSetting {
            name: name.to_string(),
            value: value.to_string(),
            origin: SettingOrigin::Stored,
        })
    }

    /// Every setting known to the store or the registry, sorted by name.
    pub fn effective(&self) -> Vec<EffectiveSetting> {
        let names: BTreeSet<&str> = self.store.names().chain(self.overrides.names()).collect();
        names
            .into_iter()
            .filter_map(|name| self.resolve(name))
            .collect()
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn overrides(&self) -> &OverrideRegistry {
        &self.overrides
    }

    pub fn overrides_mut(&mut self) -> &mut OverrideRegistry {
        &mut self.overrides
    }
}
