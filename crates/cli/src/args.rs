//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//! - Provide config path resolution helpers.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not merge configuration sources (see `bitcalc_config::ConfigLoader`).

use bitcalc_config::constants::ENV_CONFIG_PATH;
use bitcalc_config::env_var_or_none;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bitcalc")]
#[command(about = "Bit and byte unit calculator", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  bitcalc convert 1 --prefix kilo --type byte --base base-2\n  bitcalc -o json convert 1.5 -p mega -t bit -b base-10\n  bitcalc query 'amount=1&prefix=giga&type=byte&base=base-10'\n  bitcalc options\n"
)]
pub struct Cli {
    /// Output format (table, json, csv, markdown)
    #[arg(short, long, global = true, env = "BITCALC_OUTPUT")]
    pub output: Option<String>,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Path to a custom settings file (overrides default location).
    ///
    /// Can also be set via BITCALC_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "BITCALC_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Diagnostic log format on stderr (text, json)
    #[arg(long, global = true, env = "BITCALC_LOG_FORMAT")]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an amount into every unit of a base.
    ///
    /// Options left out fall back to configured defaults. If any value is
    /// still missing, the input form is shown instead.
    Convert {
        /// Amount to convert (e.g. 1, 2.5, 1e3)
        #[arg(allow_negative_numbers = true)]
        amount: Option<String>,

        /// Prefix of the amount (none, kilo, mega, giga, tera, peta)
        #[arg(short, long)]
        prefix: Option<String>,

        /// Unit type of the amount (bit, byte)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        unit_type: Option<String>,

        /// Base of the prefix (base-2, base-10)
        #[arg(short, long)]
        base: Option<String>,
    },

    /// Handle a raw calculator query string.
    ///
    /// Example: 'amount=1&prefix=kilo&type=byte&base=base-2'
    Query {
        /// URL-encoded query string; a leading '?' is ignored
        #[arg(allow_hyphen_values = true)]
        query_string: String,
    },

    /// Show the allowed input options and their labels
    Options,
}

/// Returns true if the path is empty or contains only whitespace.
pub(crate) fn path_is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}

/// Drops empty or whitespace-only values so the next source applies.
///
/// clap reads `BITCALC_OUTPUT` and `BITCALC_LOG_FORMAT` itself, so a blank
/// environment value arrives here as if it were a flag.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Normalizes the config path, ignoring empty or whitespace-only values.
///
/// A blank flag falls back to the environment variable, which is normalized
/// the same way.
pub fn resolve_config_path(path: Option<PathBuf>) -> Option<PathBuf> {
    let path = path.filter(|p| !path_is_blank(p));
    if path.is_none() {
        env_var_or_none(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .filter(|p| !path_is_blank(p))
    } else {
        path
    }
}
