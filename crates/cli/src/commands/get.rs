//! `envopt get`: print one effective setting.

use envopt_config::Settings;

use crate::args::OutputFormat;
use crate::commands::print_json;
use crate::error::ExitCode;

pub fn run(settings: &Settings, name: &str, output: OutputFormat) -> anyhow::Result<ExitCode> {
    let Some(setting) = settings.resolve(name) else {
        eprintln!("Setting '{}' is not defined", name);
        return Ok(ExitCode::NotFound);
    };

    match output {
        OutputFormat::Text => println!("{}", setting.value),
        OutputFormat::Json => print_json(&setting)?,
    }

    Ok(ExitCode::Success)
}
