//! Bit and byte unit conversion.
//!
//! This crate validates raw calculator input, reduces a prefixed bit or byte
//! amount to its canonical bit value, and expands that value into a table of
//! every supported unit for a binary (1024) or decimal (1000) base.
//!
//! Everything here is a pure function over its inputs; the unit tables are
//! immutable statics shared by all callers.

pub mod convert;
pub mod error;
pub mod format;
pub mod options;
pub mod query;
pub mod units;
pub mod validate;

pub use convert::{ConversionReport, ConversionRow, convert, generate_table, to_bits};
pub use error::{ArgumentError, CalcError, Field, ParseOptionError, Result, ValidationError};
pub use options::{AllowedOptions, OptionChoice};
pub use query::{ARGUMENT_NAMES, QueryOutcome, handle_query, handle_query_string};
pub use units::{Prefix, UnitEntry, UnitSystem, UnitType};
pub use validate::{ConversionRequest, InputRecord, ValidatedRecord, validate};
