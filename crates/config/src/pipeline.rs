//! Startup pipeline turning `.env` entries into setting overrides.
//!
//! Responsibilities:
//! - Filter entries by the configured key prefix (ASCII case-insensitive).
//! - Derive the target setting name(s) and register overrides.
//! - Run Locator -> Loader -> Filter -> Registrar once, failing open.
//!
//! Does NOT handle:
//! - Reading settings (see `settings.rs`).
//!
//! Invariants:
//! - A matching key is `<prefix>_<name>` with a non-empty `<name>`; the
//!   original case of `<name>` is preserved.
//! - Keys that are not entirely lowercase also register the lowercased name.
//! - No failure in this pipeline is propagated to the caller.

use tracing::{debug, info, warn};

use crate::constants::KEY_SEPARATOR;
use crate::loader::{ConfigError, load_env_file, resolve_location};
use crate::registry::OverrideRegistry;
use crate::types::{EnvEntries, OverrideConfig};

/// Strip `<prefix>_` from `key`, matching the prefix ASCII case-insensitively.
///
/// Returns `None` when the key does not carry the prefix, lacks the
/// separator, or names nothing after it.
pub fn target_setting_name<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    let head = key.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }

    let name = key[prefix.len()..].strip_prefix(KEY_SEPARATOR)?;
    (!name.is_empty()).then_some(name)
}

/// Register an override for every entry whose key carries `key_prefix`.
///
/// Returns the number of registrations made.
pub fn apply_overrides(
    entries: &EnvEntries,
    key_prefix: &str,
    registry: &mut OverrideRegistry,
) -> usize {
    let mut registered = 0;

    for entry in entries {
        let Some(name) = target_setting_name(&entry.key, key_prefix) else {
            debug!(key = %entry.key, "Skipping env entry without key prefix");
            continue;
        };

        registry.register_value(name, entry.value.clone());
        registered += 1;

        let lowered = entry.key.to_lowercase();
        if lowered == entry.key {
            continue;
        }

        if let Some(lower_name) = target_setting_name(&lowered, key_prefix) {
            registry.register_value(lower_name, entry.value.clone());
            registered += 1;
        }
    }

    registered
}

/// Locate and load the `.env` file, then register its overrides.
///
/// Every failure degrades to "no overrides applied" and is only logged.
pub fn apply_env_overrides(config: &OverrideConfig, registry: &mut OverrideRegistry) -> usize {
    if config.disabled {
        debug!("Dotenv overrides disabled");
        return 0;
    }

    let Some(location) = resolve_location(config) else {
        debug!(
            candidates = config.candidate_directories.len(),
            "No .env file found; no overrides applied"
        );
        return 0;
    };

    let entries = match load_env_file(&location) {
        Ok(entries) => entries,
        Err(ConfigError::EnvFileNotFound { path }) => {
            warn!(path = %path.display(), "Configured .env file does not exist; no overrides applied");
            return 0;
        }
        Err(e) => {
            warn!(error = %e, "Failed to load .env file; no overrides applied");
            return 0;
        }
    };

    let registered = apply_overrides(&entries, &config.key_prefix, registry);
    info!(
        location = %location.display(),
        entries = entries.len(),
        registered,
        "Applied .env setting overrides"
    );
    registered
}
