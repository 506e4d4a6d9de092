//! Formatter tests split by format.
//!
//! Test organization:
//! - `common_tests.rs`: Escaping, atomic writes, output format parsing
//! - `table_tests.rs`: Table formatter tests
//! - `json_tests.rs`: JSON formatter tests
//! - `csv_tests.rs`: CSV formatter tests
//! - `markdown_tests.rs`: Markdown formatter tests

mod common_tests;
mod json_tests;

use bitcalc_core::{ConversionReport, ConversionRequest, Prefix, UnitSystem, UnitType, convert};

/// One kibibyte: 8192 bits over the base-2 table.
pub fn kibibyte_report() -> ConversionReport {
    convert(&ConversionRequest {
        amount: 1.0,
        prefix: Prefix::Kilo,
        unit_type: UnitType::Byte,
        base: UnitSystem::Base2,
    })
}
