//! `envopt list`: print every effective setting with its origin.

use envopt_config::{SettingOrigin, Settings};

use crate::args::OutputFormat;
use crate::commands::print_json;
use crate::error::ExitCode;

pub fn run(settings: &Settings, output: OutputFormat) -> anyhow::Result<ExitCode> {
    let effective = settings.effective();

    match output {
        OutputFormat::Json => print_json(&effective)?,
        OutputFormat::Text => {
            for setting in &effective {
                let origin = match setting.origin {
                    SettingOrigin::Stored => "stored",
                    SettingOrigin::Override => "override",
                };
                println!("{}={} ({})", setting.name, setting.value, origin);
            }
        }
    }

    Ok(ExitCode::Success)
}
