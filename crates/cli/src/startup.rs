//! Startup sequence: build the override configuration and apply `.env` overrides.
//!
//! Responsibilities:
//! - Merge CLI flags, `DOTENV_*` variables, and defaults into an `OverrideConfig`.
//! - Load the settings store and run the override pipeline once.
//!
//! Invariants:
//! - CLI flags take precedence over environment variables.
//! - `.env` problems never abort startup; configuration and settings-file errors do.

use anyhow::Context;
use envopt_config::{
    AppPaths, OverrideConfig, OverrideLoader, OverrideRegistry, Settings, SettingsStore,
    apply_env_overrides, default_settings_path,
};
use tracing::warn;

use crate::args::Cli;

/// Build the override configuration from CLI flags and the environment.
pub fn override_config(cli: &Cli) -> anyhow::Result<OverrideConfig> {
    let mut paths = match &cli.root {
        Some(root) => AppPaths::new(root),
        None => AppPaths::current().context("Failed to determine application root")?,
    };
    if let Some(content_dir) = &cli.content_dir {
        paths = paths.with_content_dir(content_dir);
    }

    let mut loader = OverrideLoader::new(paths);
    if let Some(location) = &cli.env_location {
        loader = loader.with_location(location.clone());
    }
    if !cli.locations.is_empty() {
        loader = loader.with_candidate_directories(cli.locations.clone());
    }
    if let Some(prefix) = &cli.key_prefix {
        loader = loader.with_key_prefix(prefix.clone());
    }

    loader
        .from_env()
        .build()
        .context("Invalid override configuration")
}

/// Load stored settings and register `.env` overrides on top of them.
pub fn load_settings(cli: &Cli, config: &OverrideConfig) -> anyhow::Result<Settings> {
    let path = match &cli.settings {
        Some(path) => Ok(path.clone()),
        None => default_settings_path(),
    };

    let store = match path {
        Ok(path) => SettingsStore::load_json(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        Err(e) => {
            warn!(error = %e, "No settings file location available; using empty store");
            SettingsStore::new()
        }
    };

    let mut registry = OverrideRegistry::new();
    apply_env_overrides(config, &mut registry);

    Ok(Settings::new(store, registry))
}
