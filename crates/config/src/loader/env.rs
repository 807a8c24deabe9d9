//! Environment variable parsing for override configuration.
//!
//! Responsibilities:
//! - Read the `DOTENV_*` process environment variables.
//! - Apply their values to an `OverrideLoader` instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Validating the final configuration (see builder.rs).
//! - Reading the `.env` file itself (see dotenv.rs).
//!
//! Invariants:
//! - Values already set through builder methods are never replaced.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use std::path::PathBuf;

use super::builder::OverrideLoader;
use crate::constants::{
    DOTENV_DISABLED_VAR, ENV_KEY_PREFIX_VAR, ENV_LOCATION_VAR, ENV_LOCATIONS_TO_CHECK_VAR,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Check if the override pipeline is disabled via environment variable.
pub(crate) fn dotenv_disabled() -> bool {
    matches!(
        env_var_or_none(DOTENV_DISABLED_VAR).as_deref(),
        Some("true") | Some("1")
    )
}

/// Split a platform path-list, dropping empty components.
fn parse_path_list(raw: &str) -> Vec<PathBuf> {
    std::env::split_paths(raw)
        .filter(|path| !path.as_os_str().is_empty())
        .collect()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut OverrideLoader) {
    if loader.location().is_none() {
        if let Some(location) = env_var_or_none(ENV_LOCATION_VAR) {
            loader.set_location(Some(PathBuf::from(location)));
        }
    }
    if loader.candidate_directories().is_none() {
        if let Some(raw) = env_var_or_none(ENV_LOCATIONS_TO_CHECK_VAR) {
            loader.set_candidate_directories(Some(parse_path_list(&raw)));
        }
    }
    if loader.key_prefix().is_none() {
        if let Some(prefix) = env_var_or_none(ENV_KEY_PREFIX_VAR) {
            loader.set_key_prefix(Some(prefix));
        }
    }
    if dotenv_disabled() {
        loader.set_disabled(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key1 = "_ENVOPT_TEST_UNSET_VAR";
        assert!(env_var_or_none(key1).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key1, Some(""))], || {
            assert!(env_var_or_none(key1).is_none(), "Empty string env var should return None");
        });

        temp_env::with_vars([(key1, Some("   "))], || {
            assert!(
                env_var_or_none(key1).is_none(),
                "Whitespace-only env var should return None"
            );
        });

        let key2 = "_ENVOPT_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            assert_eq!(
                env_var_or_none(key2),
                Some("test-value".to_string()),
                "Non-empty env var should return Some(trimmed value)"
            );
        });
    }

    #[test]
    #[serial]
    fn test_dotenv_disabled_values() {
        temp_env::with_var(DOTENV_DISABLED_VAR, Some("1"), || assert!(dotenv_disabled()));
        temp_env::with_var(DOTENV_DISABLED_VAR, Some("true"), || assert!(dotenv_disabled()));
        temp_env::with_var(DOTENV_DISABLED_VAR, Some("false"), || assert!(!dotenv_disabled()));
        temp_env::with_var(DOTENV_DISABLED_VAR, Some("yes"), || assert!(!dotenv_disabled()));
        temp_env::with_var_unset(DOTENV_DISABLED_VAR, || assert!(!dotenv_disabled()));
    }

    #[test]
    fn test_parse_path_list_drops_empty_components() {
        let raw = std::env::join_paths(["/srv/a", "", "/srv/b"]).unwrap();
        let parsed = parse_path_list(raw.to_str().unwrap());

        assert_eq!(parsed, vec![PathBuf::from("/srv/a"), PathBuf::from("/srv/b")]);
    }
}
