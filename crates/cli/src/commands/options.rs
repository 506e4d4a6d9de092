//! Options command implementation.
//!
//! Shows the input form: every allowed key and label for each field.

use anyhow::Result;
use bitcalc_core::AllowedOptions;
use std::path::PathBuf;

use crate::formatters::{OutputFormat, get_formatter, output_result};

pub fn run(output_format: &str, output_file: Option<PathBuf>) -> Result<()> {
    render_form(&AllowedOptions::default(), output_format, output_file.as_ref())
}

/// Print the input form in the selected format.
///
/// Shared by the commands that fall back to the form on incomplete input.
pub fn render_form(
    options: &AllowedOptions,
    output_format: &str,
    output_file: Option<&PathBuf>,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let output = get_formatter(format).format_options(options)?;
    output_result(&output, format, output_file)
}
