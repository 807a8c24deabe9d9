//! Centralized constants for the envopt workspace.
//!
//! This module contains default values used across crates to avoid
//! literal duplication between the library, the CLI, and tests.

// =============================================================================
// Environment File Discovery
// =============================================================================

/// Name of the environment-definition file probed in each candidate directory.
pub const ENV_FILE_NAME: &str = ".env";

/// Directory name (relative to the application root) used as the default content directory.
pub const DEFAULT_CONTENT_DIR_NAME: &str = "content";

// =============================================================================
// Key Filtering
// =============================================================================

/// Default prefix an environment key must carry to become a setting override.
pub const DEFAULT_KEY_PREFIX: &str = "WPENV";

/// Separator expected between the key prefix and the setting name.
pub const KEY_SEPARATOR: char = '_';

// =============================================================================
// Process Environment Variables
// =============================================================================

/// Directory (or file) to load instead of searching the candidate list.
pub const ENV_LOCATION_VAR: &str = "DOTENV_LOCATION";

/// Platform path-list replacing the whole candidate directory list.
pub const ENV_LOCATIONS_TO_CHECK_VAR: &str = "DOTENV_LOCATIONS_TO_CHECK";

/// Replacement for [`DEFAULT_KEY_PREFIX`].
pub const ENV_KEY_PREFIX_VAR: &str = "DOTENV_KEY_PREFIX";

/// When set to `1` or `true`, the override pipeline does nothing.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Settings Store
// =============================================================================

/// Application name used for platform config directories.
pub const APP_NAME: &str = "envopt";

/// File name of the persisted settings store.
pub const SETTINGS_FILE_NAME: &str = "options.json";
