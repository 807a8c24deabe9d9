//! envopt - inspect application settings with `.env` overrides applied.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Run the one-time override startup sequence and print settings.
//!
//! Does NOT handle:
//! - Override logic itself (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr (filter with `RUST_LOG`); stdout carries command output only.

mod args;
mod commands;
mod dispatch;
mod error;
mod startup;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let code = match run_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::GeneralError
        }
    };

    std::process::exit(code.as_i32());
}
