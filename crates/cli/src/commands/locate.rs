//! `envopt locate`: show which `.env` file the startup sequence would load.

use envopt_config::{OverrideConfig, env_file_path, resolve_location};
use serde::Serialize;

use crate::args::OutputFormat;
use crate::commands::print_json;
use crate::error::ExitCode;

#[derive(Serialize)]
struct LocateOutput {
    location: String,
    file: String,
    explicit: bool,
}

pub fn run(config: &OverrideConfig, output: OutputFormat) -> anyhow::Result<ExitCode> {
    let Some(location) = resolve_location(config) else {
        eprintln!(
            "No .env file found in {} candidate director{}",
            config.candidate_directories.len(),
            if config.candidate_directories.len() == 1 { "y" } else { "ies" }
        );
        return Ok(ExitCode::NotFound);
    };

    let file = env_file_path(&location);
    match output {
        OutputFormat::Text => println!("{}", file.display()),
        OutputFormat::Json => print_json(&LocateOutput {
            location: location.display().to_string(),
            file: file.display().to_string(),
            explicit: config.file_location_override.is_some(),
        })?,
    }

    Ok(ExitCode::Success)
}
