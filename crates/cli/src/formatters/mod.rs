//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide multiple output formats: Table, JSON, CSV, and Markdown.
//! - Render conversion reports and the input form through the `Formatter` trait.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings; see `common::output_result`).
//! - Conversion or validation (see `bitcalc_core`).
//!
//! Invariants:
//! - Human-facing formats (Table, Markdown) show amounts through `format_decimal`.
//! - Machine-readable formats (JSON, CSV) carry the raw `f64` amounts.
//!
//! ## Form Output
//!
//! When input is incomplete the CLI shows the input form: every allowed key
//! and its label, grouped by field in `prefix`, `type`, `base` order.

use anyhow::Result;
use bitcalc_core::{AllowedOptions, ConversionReport, OptionChoice};

mod common;
mod csv;
mod json;
mod markdown;
mod table;

pub use common::output_result;
pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" => Ok(OutputFormat::Markdown),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: table, json, csv, markdown",
                s
            ),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format a completed conversion.
    fn format_report(&self, report: &ConversionReport) -> Result<String>;

    /// Format the input form: the allowed choices for every field.
    fn format_options(&self, options: &AllowedOptions) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}

/// The form fields in display order, paired with their wire names.
pub(crate) fn form_fields(options: &AllowedOptions) -> [(&'static str, &[OptionChoice]); 3] {
    [
        ("prefix", options.prefix.as_slice()),
        ("type", options.unit_type.as_slice()),
        ("base", options.base.as_slice()),
    ]
}

/// One-line description of a report's input, e.g. `1 kilo byte (base-2)`.
pub(crate) fn describe_input(report: &ConversionReport) -> String {
    let input = &report.input;
    format!(
        "{} {} {} ({})",
        bitcalc_core::format::format_input_amount(input.amount),
        input.prefix,
        input.unit_type,
        input.base
    )
}

#[cfg(test)]
mod tests;
