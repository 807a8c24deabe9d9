//! Apply `.env` file entries as overrides of named application settings.
//!
//! At startup the pipeline locates a `.env` file, keeps the entries whose key
//! carries the configured prefix, and registers each as an override that the
//! settings read path consults before stored values.
//!
//! ```no_run
//! use envopt_config::{
//!     AppPaths, OverrideLoader, OverrideRegistry, Settings, SettingsStore, apply_env_overrides,
//! };
//!
//! # fn main() -> Result<(), envopt_config::ConfigError> {
//! let config = OverrideLoader::new(AppPaths::current()?).from_env().build()?;
//! let mut registry = OverrideRegistry::new();
//! apply_env_overrides(&config, &mut registry);
//!
//! let settings = Settings::new(SettingsStore::new(), registry);
//! let _blogname = settings.get("blogname");
//! # Ok(())
//! # }
//! ```

pub mod constants;
mod loader;
mod pipeline;
mod registry;
mod settings;
pub mod types;

pub use loader::{
    ConfigError, OverrideLoader, env_file_path, env_var_or_none, find_env_file, load_env_file,
    resolve_location,
};
pub use pipeline::{apply_env_overrides, apply_overrides, target_setting_name};
pub use registry::{OverrideProvider, OverrideRegistry};
pub use settings::{
    EffectiveSetting, SettingOrigin, Settings, SettingsStore, default_settings_path,
};
pub use types::{AppPaths, EnvEntries, EnvEntry, OverrideConfig};
