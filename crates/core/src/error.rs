//! Error types for the conversion core.
//!
//! Responsibilities:
//! - Define the user-facing validation and argument errors.
//! - Provide the crate-level `CalcError` used by fallible operations.
//!
//! Does NOT handle:
//! - Exit code mapping (see the CLI crate).
//!
//! Invariants:
//! - `Display` output of every variant is the exact message shown to users.

use std::fmt;
use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CalcError>;

/// The enumerated input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Prefix,
    Type,
    Base,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Prefix => "prefix",
            Field::Type => "type",
            Field::Base => "base",
        })
    }
}

/// A single problem found while validating an input record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The amount could not be parsed as a finite number.
    #[error("'{raw}' is not a valid value for amount, use numbers only.")]
    InvalidAmount { raw: String },

    /// The amount parsed, but its bit value does not fit in an `f64`.
    #[error("'{raw}' is too large to convert.")]
    AmountOutOfRange { raw: String },

    /// A prefix, type, or base key outside its allowed set.
    #[error("'{value}' is not a valid {field}: ({})", .allowed.join(", "))]
    InvalidOption {
        field: Field,
        value: String,
        allowed: Vec<String>,
    },
}

/// A problem with the set of query arguments themselves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Too many arguments: {count}")]
    TooMany { count: usize },

    #[error("'{key}' is not a valid argument: {}", crate::query::argument_names_display())]
    Unknown { key: String },
}

/// A key that names no known unit option.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not a supported {field}")]
pub struct ParseOptionError {
    pub field: Field,
    pub value: String,
}

/// Errors returned by fallible core operations.
#[derive(Error, Debug)]
pub enum CalcError {
    /// Input failed validation; carries every collected error.
    #[error("{}", join_lines(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The query carried too many or unrecognized arguments.
    #[error("{}", join_lines(.0))]
    InvalidArguments(Vec<ArgumentError>),
}

impl CalcError {
    /// User-facing messages, one per underlying problem.
    pub fn messages(&self) -> Vec<String> {
        match self {
            CalcError::InvalidInput(errors) => errors.iter().map(ToString::to_string).collect(),
            CalcError::InvalidArguments(errors) => {
                errors.iter().map(ToString::to_string).collect()
            }
        }
    }
}

fn join_lines<E: fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
