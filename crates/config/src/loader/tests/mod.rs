//! Tests for the override configuration loader.
//!
//! Responsibilities:
//! - Test builder methods and their precedence over environment variables.
//! - Test `.env` file reading through `dotenvy`.
//!
//! Invariants:
//! - Tests touching `DOTENV_*` variables use `serial_test` and `temp-env`
//!   to prevent environment variable pollution.
//! - Temporary directories are cleaned up automatically via `tempfile`.

pub mod builder_tests;

/// All `DOTENV_*` variables read by the loader, cleared for isolation.
pub const LOADER_VARS: [&str; 4] = [
    "DOTENV_LOCATION",
    "DOTENV_LOCATIONS_TO_CHECK",
    "DOTENV_KEY_PREFIX",
    "DOTENV_DISABLED",
];

/// Run `f` with every loader variable unset, then with `vars` applied.
pub fn with_loader_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let mut all: Vec<(&str, Option<&str>)> = LOADER_VARS.iter().map(|k| (*k, None)).collect();
    for (key, value) in vars {
        all.retain(|(k, _)| k != key);
        all.push((*key, Some(*value)));
    }
    temp_env::with_vars(all, f)
}
