//! Convert command implementation.
//!
//! Responsibilities:
//! - Complete the input from the resolved conversion defaults.
//! - Validate and convert a complete input, then print the report.
//! - Fall back to the input form when any value is still missing.
//!
//! Does NOT handle:
//! - Loading configuration (see `main`).

use anyhow::Result;
use bitcalc_config::ConversionDefaults;
use bitcalc_core::{AllowedOptions, InputRecord, convert, validate};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::commands::options::render_form;
use crate::formatters::{OutputFormat, get_formatter, output_result};

/// Complete an input record from the amount and the resolved defaults.
///
/// The `--prefix`, `--type` and `--base` flags are already layered into
/// `defaults` by the config loader. Returns `None` if any value is missing.
pub fn resolve_input(amount: Option<String>, defaults: &ConversionDefaults) -> Option<InputRecord> {
    Some(InputRecord {
        amount: amount?,
        prefix: defaults.prefix.clone()?,
        unit_type: defaults.unit_type.clone()?,
        base: defaults.base.clone()?,
    })
}

pub fn run(
    amount: Option<String>,
    defaults: &ConversionDefaults,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let options = AllowedOptions::default();

    let Some(input) = resolve_input(amount, defaults) else {
        info!("Input incomplete; showing the form");
        return render_form(&options, output_format, output_file.as_ref());
    };

    // Check the format before doing any work.
    let format = OutputFormat::from_str(output_format)?;

    let request = validate(&input, &options).try_into_request()?;
    let report = convert(&request);
    debug!(bits = report.bits, rows = report.rows.len(), "Converted input");

    let output = get_formatter(format).format_report(&report)?;
    output_result(&output, format, output_file.as_ref())
}
