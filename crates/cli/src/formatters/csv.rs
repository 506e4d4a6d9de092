//! CSV formatter implementation.
//!
//! Responsibilities:
//! - Format reports and the input form as RFC 4180 compliant CSV.
//!
//! Does NOT handle:
//! - Other output formats.
//! - Display rounding; amounts are written at full precision.

use anyhow::Result;
use bitcalc_core::{AllowedOptions, ConversionReport};

use crate::formatters::common::{build_csv_header, build_csv_row};
use crate::formatters::{Formatter, form_fields};

/// CSV formatter.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format_report(&self, report: &ConversionReport) -> Result<String> {
        let mut output = build_csv_header(&["abbr", "label", "amount"]);
        for row in &report.rows {
            output.push_str(&build_csv_row(&[
                row.abbr.clone(),
                row.label.clone(),
                row.amount.to_string(),
            ]));
        }
        Ok(output)
    }

    fn format_options(&self, options: &AllowedOptions) -> Result<String> {
        let mut output = build_csv_header(&["field", "key", "label"]);
        for (field, choices) in form_fields(options) {
            for choice in choices {
                output.push_str(&build_csv_row(&[
                    field.to_string(),
                    choice.key.clone(),
                    choice.label.clone(),
                ]));
            }
        }
        Ok(output)
    }
}
