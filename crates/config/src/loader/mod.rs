//! Configuration and loading for `.env` setting overrides.
//!
//! Responsibilities:
//! - Provide a builder-pattern `OverrideLoader` that merges builder values,
//!   process environment variables, and built-in defaults into an `OverrideConfig`.
//! - Locate the `.env` file among candidate directories (`locator.rs`).
//! - Read the `.env` file into ordered entries via `dotenvy` (`dotenv.rs`).
//!
//! Does NOT handle:
//! - Prefix filtering or override registration (see `pipeline.rs`).
//! - Mutating the process environment; `.env` values are never exported.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Environment variables take precedence over built-in defaults.
//! - The `DOTENV_DISABLED` variable is read by `from_env()` only.

mod builder;
mod dotenv;
mod env;
mod error;
mod locator;

#[cfg(test)]
mod tests;

pub use builder::OverrideLoader;
pub use dotenv::{env_file_path, load_env_file};
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use locator::{find_env_file, resolve_location};
