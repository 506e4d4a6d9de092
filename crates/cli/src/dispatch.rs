//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Hand each command the resolved output settings and defaults.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use bitcalc_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
///
/// The output format and conversion defaults come from `config`, which
/// already reflects the global flags and the `convert` option flags.
pub(crate) fn run_command(cli: Cli, config: Config) -> Result<()> {
    let output_format = config.output.format.as_str();

    match cli.command {
        Commands::Convert { amount, .. } => {
            commands::convert::run(amount, &config.defaults, output_format, cli.output_file)?;
        }
        Commands::Query { query_string } => {
            commands::query::run(&query_string, output_format, cli.output_file)?;
        }
        Commands::Options => {
            commands::options::run(output_format, cli.output_file)?;
        }
    }

    Ok(())
}
