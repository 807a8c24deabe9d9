//! Configuration types for the dotenv override pipeline.
//!
//! Responsibilities:
//! - Describe the host application's directory layout (`AppPaths`).
//! - Hold the resolved pipeline configuration (`OverrideConfig`).
//! - Represent parsed `.env` contents (`EnvEntry`, `EnvEntries`).
//!
//! Does NOT handle:
//! - Reading configuration from the process environment (see `loader/env.rs`).
//! - Parsing `.env` files (see `loader/dotenv.rs`).

mod entry;
mod override_config;
mod paths;

pub use entry::{EnvEntries, EnvEntry};
pub use override_config::OverrideConfig;
pub use paths::AppPaths;
