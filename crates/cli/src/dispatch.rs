//! Command dispatch logic.
//!
//! Responsibilities:
//! - Run the startup sequence and route to the matching command handler.

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;
use crate::startup::{load_settings, override_config};

pub fn run_command(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = override_config(cli)?;

    match &cli.command {
        Commands::Locate => commands::locate::run(&config, cli.output),
        Commands::Get { name } => {
            let settings = load_settings(cli, &config)?;
            commands::get::run(&settings, name, cli.output)
        }
        Commands::List => {
            let settings = load_settings(cli, &config)?;
            commands::list::run(&settings, cli.output)
        }
    }
}
