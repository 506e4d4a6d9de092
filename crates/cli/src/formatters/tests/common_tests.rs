//! Common helper tests: escaping, atomic writes, and format parsing.

use crate::formatters::OutputFormat;
use crate::formatters::common::{
    build_csv_header, build_csv_row, escape_csv, escape_markdown, write_to_file,
};
use tempfile::TempDir;

#[test]
fn test_escape_csv() {
    assert_eq!(escape_csv("kilobit"), "kilobit");
    assert_eq!(escape_csv("a,b"), "\"a,b\"");
    assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(escape_csv("line\nbreak"), "\"line\nbreak\"");
}

#[test]
fn test_build_csv_rows() {
    assert_eq!(build_csv_header(&["abbr", "label"]), "abbr,label\n");
    assert_eq!(
        build_csv_row(&["Kilo (K)".to_string(), "x,y".to_string()]),
        "Kilo (K),\"x,y\"\n"
    );
}

#[test]
fn test_escape_markdown() {
    assert_eq!(escape_markdown("a|b"), "a\\|b");
    assert_eq!(escape_markdown("plain"), "plain");
}

#[test]
fn test_output_format_parsing() {
    assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
    assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
    assert!(OutputFormat::from_str("md").is_err());
    assert_eq!(
        OutputFormat::from_str(" markdown ").unwrap(),
        OutputFormat::Markdown
    );

    let err = OutputFormat::from_str("xml").unwrap_err();
    assert!(err.to_string().contains("Valid options"));
}

#[test]
fn test_write_to_file_creates_parent_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("out.csv");

    write_to_file("abbr,label,amount\n", &path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "abbr,label,amount\n"
    );
}

#[test]
fn test_write_to_file_replaces_existing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.txt");

    write_to_file("first", &path).unwrap();
    write_to_file("second", &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");

    // Only the target file remains; no temp files are left behind.
    let entries = std::fs::read_dir(temp_dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}
