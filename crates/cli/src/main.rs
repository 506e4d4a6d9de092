//! bitcalc - Command-line bit and byte unit calculator.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Layer configuration and install the tracing subscriber.
//! - Run the selected command and translate failures into exit codes.
//!
//! Does NOT handle:
//! - Validation or conversion logic (see `crates/core`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr only; stdout carries command output alone.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::{Cli, Commands, non_blank, resolve_config_path};
use bitcalc_config::{Config, ConfigError, ConfigLoader, LogFormat};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    init_tracing(config.output.log_format);
    tracing::debug!(output = %config.output.format, "Configuration loaded");

    let exit_code = match run_command(cli, config) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Layer configuration: environment, then settings file, then CLI flags.
///
/// `convert` option flags become the conversion defaults, so they win over
/// every other source.
fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new();

    // Blank/whitespace-only values are ignored to allow fallback to env var
    if let Some(path) = resolve_config_path(cli.config_path.clone()) {
        loader = loader.with_config_path(path);
    }

    loader = loader.from_env()?.from_file()?;

    if let Some(output) = non_blank(cli.output.as_deref()) {
        loader = loader.with_output(output);
    }
    if let Some(log_format) = non_blank(cli.log_format.as_deref()) {
        loader = loader.with_log_format(log_format);
    }

    if let Commands::Convert {
        prefix,
        unit_type,
        base,
        ..
    } = &cli.command
    {
        if let Some(prefix) = prefix {
            loader = loader.with_prefix(prefix.clone());
        }
        if let Some(unit_type) = unit_type {
            loader = loader.with_unit_type(unit_type.clone());
        }
        if let Some(base) = base {
            loader = loader.with_base(base.clone());
        }
    }

    loader.build()
}

/// Install the stderr subscriber. `RUST_LOG` controls the level (default `warn`).
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
