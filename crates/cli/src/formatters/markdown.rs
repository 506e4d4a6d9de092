//! Markdown formatter implementation.
//!
//! Responsibilities:
//! - Format reports and the input form as Markdown pipe tables.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use bitcalc_core::format::format_decimal;
use bitcalc_core::{AllowedOptions, ConversionReport};

use crate::formatters::common::escape_markdown;
use crate::formatters::{Formatter, describe_input, form_fields};

/// Markdown formatter.
pub struct MarkdownFormatter;

/// Build a markdown table from headers and rows
fn build_markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "_No data available._\n".to_string();
    }

    let mut output = String::new();

    output.push('|');
    for header in headers {
        output.push(' ');
        output.push_str(header);
        output.push_str(" |");
    }
    output.push('\n');

    output.push('|');
    for _ in headers {
        output.push_str(" --- |");
    }
    output.push('\n');

    for row in rows {
        output.push('|');
        for cell in row {
            output.push(' ');
            output.push_str(&escape_markdown(cell));
            output.push_str(" |");
        }
        output.push('\n');
    }

    output
}

impl Formatter for MarkdownFormatter {
    fn format_report(&self, report: &ConversionReport) -> Result<String> {
        let rows: Vec<Vec<String>> = report
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.abbr.clone(),
                    row.label.clone(),
                    format_decimal(row.amount),
                ]
            })
            .collect();

        Ok(format!(
            "# {}\n\n{}",
            describe_input(report),
            build_markdown_table(&["Abbr", "Unit", "Amount"], &rows)
        ))
    }

    fn format_options(&self, options: &AllowedOptions) -> Result<String> {
        let mut output = String::from("# Options\n");
        for (field, choices) in form_fields(options) {
            let rows: Vec<Vec<String>> = choices
                .iter()
                .map(|choice| vec![choice.key.clone(), choice.label.clone()])
                .collect();
            output.push_str(&format!(
                "\n## {}\n\n{}",
                field,
                build_markdown_table(&["Key", "Label"], &rows)
            ));
        }
        Ok(output)
    }
}
