//! Query command implementation.
//!
//! Runs a raw calculator query string through the full argument checks,
//! validation, and conversion.

use anyhow::Result;
use bitcalc_core::{AllowedOptions, handle_query_string};
use std::path::PathBuf;
use tracing::info;

use crate::commands::options::render_form;
use crate::formatters::{OutputFormat, get_formatter, output_result};

pub fn run(query_string: &str, output_format: &str, output_file: Option<PathBuf>) -> Result<()> {
    let options = AllowedOptions::default();
    let format = OutputFormat::from_str(output_format)?;

    match handle_query_string(query_string, &options).into_result()? {
        Some(report) => {
            let output = get_formatter(format).format_report(&report)?;
            output_result(&output, format, output_file.as_ref())
        }
        None => {
            info!("Query incomplete; showing the form");
            render_form(&options, output_format, output_file.as_ref())
        }
    }
}
