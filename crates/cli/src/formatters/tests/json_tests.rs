//! JSON formatter tests.

use super::kibibyte_report;
use crate::formatters::{Formatter, JsonFormatter};
use bitcalc_core::AllowedOptions;

#[test]
fn test_json_report_is_valid_and_complete() {
    let output = JsonFormatter.format_report(&kibibyte_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["bits"], 8192.0);
    assert_eq!(value["input"]["prefix"], "kilo");
    assert_eq!(value["input"]["type"], "byte");
    assert_eq!(value["input"]["base"], "base-2");
    assert_eq!(value["rows"].as_array().unwrap().len(), 12);
    assert_eq!(value["rows"][3]["label"], "kibibyte");
    assert_eq!(value["rows"][3]["amount"], 1.0);
}

#[test]
fn test_json_uses_four_space_indent_and_sorted_keys() {
    let output = JsonFormatter.format_report(&kibibyte_report()).unwrap();
    assert!(output.contains("\n    \"bits\""));

    let bits = output.find("\"bits\"").unwrap();
    let input = output.find("\"input\"").unwrap();
    let rows = output.find("\"rows\"").unwrap();
    assert!(bits < input && input < rows);
}

#[test]
fn test_json_options() {
    let output = JsonFormatter
        .format_options(&AllowedOptions::default())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["prefix"][1]["key"], "kilo");
    assert_eq!(value["prefix"][1]["label"], "Kilo (K)");
    assert_eq!(value["type"][1]["key"], "byte");
    assert_eq!(value["base"][0]["label"], "base-2 (1024)");
}
