//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Expose the override hooks (location, search list, key prefix) as flags.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read `DOTENV_*` variables; `OverrideLoader::from_env` does (see `startup` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "envopt")]
#[command(about = "Inspect application settings with .env overrides applied", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envopt locate\n  envopt --root /srv/site get blogname\n  envopt --key-prefix MYAPP list --output json\n  envopt --location ./config --location /etc/site list\n"
)]
pub struct Cli {
    /// Application root directory (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Application content directory (defaults to <root>/content)
    #[arg(long, global = true, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Load .env from this location instead of searching.
    ///
    /// Can also be set via DOTENV_LOCATION environment variable.
    #[arg(long, global = true, value_name = "PATH")]
    pub env_location: Option<PathBuf>,

    /// Directory to search for .env; repeat to build the whole search list.
    ///
    /// Can also be set via DOTENV_LOCATIONS_TO_CHECK environment variable.
    #[arg(long = "location", global = true, value_name = "DIR")]
    pub locations: Vec<PathBuf>,

    /// Key prefix selecting .env entries (default: WPENV).
    ///
    /// Can also be set via DOTENV_KEY_PREFIX environment variable.
    #[arg(long, global = true)]
    pub key_prefix: Option<String>,

    /// Path to the settings store (a JSON object of string values)
    #[arg(long, global = true, env = "ENVOPT_SETTINGS_PATH", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the location of the .env file that would be loaded
    Locate,

    /// Print the effective value of a setting
    Get {
        /// Setting name (case-sensitive)
        name: String,
    },

    /// List every effective setting and where its value comes from
    List,
}
