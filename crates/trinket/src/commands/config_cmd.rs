//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            let out = match global.output {
                Some(OutputFormat::Json) => output::render_json(&cfg, false)?,
                Some(OutputFormat::JsonCompact) => output::render_json(&cfg, true)?,
                Some(OutputFormat::Yaml) => output::render_yaml(&cfg)?,
                _ => toml::to_string_pretty(&cfg)?,
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            let path = config::resolve_path(global);
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let path = config::resolve_path(global);
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            config::save(global, &Config::default())?;
            if !global.quiet {
                eprintln!("Wrote default configuration to {}", path.display());
            }
            Ok(())
        }
    }
}
