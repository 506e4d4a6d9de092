//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format conversion reports and the input form as aligned text tables.
//!
//! Does NOT handle:
//! - Other output formats.
//! - File I/O.

use anyhow::Result;
use bitcalc_core::format::format_decimal;
use bitcalc_core::{AllowedOptions, ConversionReport};

use crate::formatters::{Formatter, describe_input, form_fields};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_report(&self, report: &ConversionReport) -> Result<String> {
        let mut output = format!("{} =\n\n", describe_input(report));

        let label_width = report
            .rows
            .iter()
            .map(|row| row.label.len())
            .max()
            .unwrap_or(0)
            .max("UNIT".len());

        // Header
        output.push_str(&format!(
            "{:<6} {:<label_width$} {}\n",
            "ABBR", "UNIT", "AMOUNT"
        ));
        output.push_str(&format!(
            "{:<6} {:<label_width$} {}\n",
            "====", "====", "======"
        ));

        // Rows
        for row in &report.rows {
            output.push_str(&format!(
                "{:<6} {:<label_width$} {}\n",
                row.abbr,
                row.label,
                format_decimal(row.amount)
            ));
        }

        Ok(output)
    }

    fn format_options(&self, options: &AllowedOptions) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("{:<8} {:<10} {}\n", "FIELD", "KEY", "LABEL"));
        output.push_str(&format!("{:<8} {:<10} {}\n", "=====", "===", "====="));

        for (field, choices) in form_fields(options) {
            for choice in choices {
                output.push_str(&format!(
                    "{:<8} {:<10} {}\n",
                    field, choice.key, choice.label
                ));
            }
        }

        Ok(output)
    }
}
