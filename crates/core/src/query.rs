//! Query-string boundary for the calculator form.
//!
//! Responsibilities:
//! - Check that a request carries only the recognized arguments.
//! - Decide between the blank form, an error listing, and a conversion.
//!
//! Does NOT handle:
//! - Serving HTTP or rendering templates.
//! - Formatting amounts for display (see `format`).
//!
//! Invariants:
//! - Argument checks run before validation; validation only runs when all
//!   four arguments are present.
//! - A `Converted` outcome never carries errors, and error outcomes never
//!   carry a partial table.

use url::form_urlencoded;

use crate::convert::{ConversionReport, convert};
use crate::error::{ArgumentError, CalcError, ValidationError};
use crate::options::AllowedOptions;
use crate::validate::{InputRecord, validate};

/// Recognized query argument names, in form order.
pub const ARGUMENT_NAMES: [&str; 4] = ["amount", "prefix", "type", "base"];

/// What the caller should render for a request.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Not all arguments were supplied; show the empty input form.
    Form,
    /// The argument set itself was unacceptable.
    Rejected(Vec<ArgumentError>),
    /// All arguments were present but at least one value was invalid.
    Invalid(Vec<ValidationError>),
    /// A successful conversion.
    Converted(ConversionReport),
}

impl QueryOutcome {
    /// Convert to a `Result`, treating the blank form as `Ok(None)`.
    pub fn into_result(self) -> Result<Option<ConversionReport>, CalcError> {
        match self {
            QueryOutcome::Form => Ok(None),
            QueryOutcome::Converted(report) => Ok(Some(report)),
            QueryOutcome::Rejected(errors) => Err(CalcError::InvalidArguments(errors)),
            QueryOutcome::Invalid(errors) => Err(CalcError::InvalidInput(errors)),
        }
    }
}

/// The argument tuple as shown in error messages: `('amount', 'prefix', 'type', 'base')`.
pub(crate) fn argument_names_display() -> String {
    let quoted: Vec<String> = ARGUMENT_NAMES.iter().map(|n| format!("'{n}'")).collect();
    format!("({})", quoted.join(", "))
}

/// Handle an already-decoded list of query pairs.
///
/// Repeated keys count once; the first value wins.
pub fn handle_query<I, K, V>(pairs: I, options: &AllowedOptions) -> QueryOutcome
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut args: Vec<(String, String)> = Vec::new();
    for (key, value) in pairs {
        let key = key.into();
        if !args.iter().any(|(k, _)| *k == key) {
            args.push((key, value.into()));
        }
    }

    if args.len() > ARGUMENT_NAMES.len() {
        return QueryOutcome::Rejected(vec![ArgumentError::TooMany { count: args.len() }]);
    }

    let unknown: Vec<ArgumentError> = args
        .iter()
        .filter(|(key, _)| !ARGUMENT_NAMES.contains(&key.as_str()))
        .map(|(key, _)| ArgumentError::Unknown { key: key.clone() })
        .collect();
    if !unknown.is_empty() {
        return QueryOutcome::Rejected(unknown);
    }

    let lookup = |name: &str| {
        args.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    };
    let (Some(amount), Some(prefix), Some(unit_type), Some(base)) = (
        lookup("amount"),
        lookup("prefix"),
        lookup("type"),
        lookup("base"),
    ) else {
        return QueryOutcome::Form;
    };

    let record = validate(&InputRecord::new(amount, prefix, unit_type, base), options);
    match record.into_request() {
        Ok(request) => QueryOutcome::Converted(convert(&request)),
        Err(errors) => QueryOutcome::Invalid(errors),
    }
}

/// Parse and handle a raw `application/x-www-form-urlencoded` query string.
///
/// A leading `?` is ignored.
pub fn handle_query_string(query: &str, options: &AllowedOptions) -> QueryOutcome {
    let query = query.strip_prefix('?').unwrap_or(query);
    handle_query(
        form_urlencoded::parse(query.as_bytes()).into_owned(),
        options,
    )
}
