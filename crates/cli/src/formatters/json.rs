//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format reports and the input form as indented JSON with sorted keys.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use bitcalc_core::format::format_pretty_json;
use bitcalc_core::{AllowedOptions, ConversionReport};

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_report(&self, report: &ConversionReport) -> Result<String> {
        Ok(format!("{}\n", format_pretty_json(report)?))
    }

    fn format_options(&self, options: &AllowedOptions) -> Result<String> {
        Ok(format!("{}\n", format_pretty_json(options)?))
    }
}
