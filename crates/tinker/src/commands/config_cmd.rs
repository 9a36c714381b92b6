//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::config_file(global);

    match args.command {
        ConfigCommand::Path => output::print_output(&path.display().to_string(), global.quiet),

        ConfigCommand::Show => {
            let cfg = config::effective_config(global)?;
            let out = output::render_value(global.output, &cfg)?;
            output::print_output(&out, global.quiet)
        }

        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let cfg = config::effective_config(global)?;
            tinker_config::save_config_to(&cfg, &path)?;
            if !global.quiet {
                eprintln!("Config written to {}", path.display());
            }
            Ok(())
        }
    }
}
