//! Input validation against the allowed option sets.
//!
//! Responsibilities:
//! - Parse the raw amount and normalize option keys to lower case.
//! - Collect every validation error instead of stopping at the first.
//! - Turn a clean record into a fully typed `ConversionRequest`.
//!
//! Does NOT handle:
//! - Query argument checks (see `query`).
//! - Unit arithmetic (see `convert`).
//!
//! Invariants:
//! - `ValidatedRecord::amount` is `None` whenever the amount failed to parse.
//! - A `ConversionRequest` only exists for a record with no errors, and its
//!   bit value is finite.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convert::to_bits;
use crate::error::{CalcError, Field, ParseOptionError, Result, ValidationError};
use crate::options::AllowedOptions;
use crate::units::{Prefix, UnitSystem, UnitType};

/// Raw user input, exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub amount: String,
    pub prefix: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub base: String,
}

impl InputRecord {
    pub fn new(
        amount: impl Into<String>,
        prefix: impl Into<String>,
        unit_type: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            prefix: prefix.into(),
            unit_type: unit_type.into(),
            base: base.into(),
        }
    }
}

/// Normalized input plus every error found while validating it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    pub raw_amount: String,
    pub amount: Option<f64>,
    pub prefix: String,
    pub unit_type: String,
    pub base: String,
    pub errors: Vec<ValidationError>,
}

/// Typed conversion input; only obtainable from a valid record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: f64,
    pub prefix: Prefix,
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    pub base: UnitSystem,
}

/// Validate a raw input record against the allowed option sets.
pub fn validate(input: &InputRecord, options: &AllowedOptions) -> ValidatedRecord {
    let mut errors = Vec::new();

    let amount = parse_amount(&input.amount);
    if amount.is_none() {
        errors.push(ValidationError::InvalidAmount {
            raw: input.amount.clone(),
        });
    }

    let prefix = input.prefix.to_lowercase();
    let unit_type = input.unit_type.to_lowercase();
    let base = input.base.to_lowercase();

    check_option(&mut errors, Field::Prefix, &prefix, options.prefix_keys());
    check_option(&mut errors, Field::Type, &unit_type, options.type_keys());
    check_option(&mut errors, Field::Base, &base, options.base_keys());

    debug!(
        prefix = %prefix,
        unit_type = %unit_type,
        base = %base,
        errors = errors.len(),
        "Validated input record"
    );

    ValidatedRecord {
        raw_amount: input.amount.clone(),
        amount,
        prefix,
        unit_type,
        base,
        errors,
    }
}

/// Parse an amount the way a lenient float parser would: surrounding
/// whitespace is ignored, single underscores between digits are accepted as
/// separators, and only finite values are accepted.
fn parse_amount(raw: &str) -> Option<f64> {
    strip_digit_separators(raw.trim())?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Remove `_` separators. Each must sit between two ASCII digits.
fn strip_digit_separators(raw: &str) -> Option<String> {
    let mut stripped = String::with_capacity(raw.len());
    for (i, c) in raw.char_indices() {
        if c != '_' {
            stripped.push(c);
            continue;
        }
        let before = raw[..i].chars().next_back();
        let after = raw[i + 1..].chars().next();
        if !(before.is_some_and(|b| b.is_ascii_digit()) && after.is_some_and(|a| a.is_ascii_digit())) {
            return None;
        }
    }
    Some(stripped)
}

fn check_option(errors: &mut Vec<ValidationError>, field: Field, value: &str, allowed: Vec<String>) {
    if !allowed.iter().any(|key| key == value) {
        errors.push(ValidationError::InvalidOption {
            field,
            value: value.to_string(),
            allowed,
        });
    }
}

impl ValidatedRecord {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a typed request.
    ///
    /// Returns every collected error if validation failed, or
    /// `AmountOutOfRange` if the amount overflows once scaled to bits. A key admitted by
    /// a custom option set that names no known unit option is reported as an
    /// invalid option against the supported keys.
    pub fn into_request(self) -> std::result::Result<ConversionRequest, Vec<ValidationError>> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        let Some(amount) = self.amount else {
            return Err(vec![ValidationError::InvalidAmount {
                raw: self.raw_amount,
            }]);
        };

        let supported = AllowedOptions::default();
        let unsupported = |err: ParseOptionError| {
            vec![ValidationError::InvalidOption {
                allowed: supported.keys_for(err.field),
                field: err.field,
                value: err.value,
            }]
        };

        let request = ConversionRequest {
            amount,
            prefix: self.prefix.parse().map_err(unsupported)?,
            unit_type: self.unit_type.parse().map_err(unsupported)?,
            base: self.base.parse().map_err(unsupported)?,
        };

        if !to_bits(request.amount, request.prefix, request.unit_type, request.base).is_finite() {
            return Err(vec![ValidationError::AmountOutOfRange {
                raw: self.raw_amount,
            }]);
        }

        Ok(request)
    }

    /// Like [`ValidatedRecord::into_request`], wrapped in the crate error type.
    pub fn try_into_request(self) -> Result<ConversionRequest> {
        self.into_request().map_err(CalcError::InvalidInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionChoice;

    fn options() -> AllowedOptions {
        AllowedOptions::default()
    }

    #[test]
    fn test_mixed_case_keys_are_normalized() {
        let input = InputRecord::new("1", "Kilo", "BYTE", "Base-10");
        let record = validate(&input, &options());

        assert!(record.is_valid());
        assert_eq!(record.prefix, "kilo");
        assert_eq!(record.unit_type, "byte");
        assert_eq!(record.base, "base-10");
        assert_eq!(record.amount, Some(1.0));
    }

    #[test]
    fn test_bad_amount_yields_single_error() {
        let input = InputRecord::new("abc", "kilo", "bit", "base-2");
        let record = validate(&input, &options());

        assert_eq!(record.amount, None);
        assert_eq!(
            record.errors,
            vec![ValidationError::InvalidAmount {
                raw: "abc".to_string()
            }]
        );
    }

    #[test]
    fn test_all_errors_are_collected() {
        let input = InputRecord::new("1.2.3", "exa", "nibble", "base-8");
        let record = validate(&input, &options());

        let messages: Vec<String> = record.errors.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "'1.2.3' is not a valid value for amount, use numbers only.",
                "'exa' is not a valid prefix: (none, kilo, mega, giga, tera, peta)",
                "'nibble' is not a valid type: (bit, byte)",
                "'base-8' is not a valid base: (base-2, base-10)",
            ]
        );
    }

    #[test]
    fn test_invalid_option_is_reported_lowercased() {
        let input = InputRecord::new("1", "EXA", "bit", "base-2");
        let record = validate(&input, &options());
        assert_eq!(
            record.errors[0].to_string(),
            "'exa' is not a valid prefix: (none, kilo, mega, giga, tera, peta)"
        );
    }

    #[test]
    fn test_amount_accepts_whitespace_and_exponents() {
        let record = validate(&InputRecord::new(" 2.5e3 ", "none", "bit", "base-2"), &options());
        assert_eq!(record.amount, Some(2500.0));
        assert!(record.is_valid());
    }

    #[test]
    fn test_non_finite_amounts_rejected() {
        for raw in ["inf", "-inf", "NaN", "1e400"] {
            let record = validate(&InputRecord::new(raw, "none", "bit", "base-2"), &options());
            assert_eq!(record.amount, None, "{raw} should be rejected");
            assert_eq!(record.errors.len(), 1);
        }
    }

    #[test]
    fn test_amount_accepts_digit_separators() {
        let record = validate(&InputRecord::new("1_000", "none", "bit", "base-2"), &options());
        assert_eq!(record.amount, Some(1000.0));

        let record = validate(&InputRecord::new("1_0.2_5e1_0", "none", "bit", "base-2"), &options());
        assert_eq!(record.amount, Some(10.25e10));
    }

    #[test]
    fn test_misplaced_digit_separators_rejected() {
        for raw in ["_1", "1_", "1__0", "1_.5", "1._5", "1e_3"] {
            let record = validate(&InputRecord::new(raw, "none", "bit", "base-2"), &options());
            assert_eq!(record.amount, None, "{raw} should be rejected");
            assert_eq!(
                record.errors[0].to_string(),
                format!("'{raw}' is not a valid value for amount, use numbers only.")
            );
        }
    }

    #[test]
    fn test_into_request_rejects_overflowing_bits() {
        let record = validate(&InputRecord::new("1e300", "peta", "byte", "base-2"), &options());
        assert!(record.is_valid());

        let errors = record.into_request().unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::AmountOutOfRange {
                raw: "1e300".to_string()
            }]
        );
        assert_eq!(errors[0].to_string(), "'1e300' is too large to convert.");
    }

    #[test]
    fn test_into_request_accepts_large_finite_bits() {
        let request = validate(&InputRecord::new("1e280", "peta", "byte", "base-2"), &options())
            .into_request()
            .unwrap();
        assert!(to_bits(request.amount, request.prefix, request.unit_type, request.base).is_finite());
    }

    #[test]
    fn test_empty_amount_rejected() {
        let record = validate(&InputRecord::new("", "none", "bit", "base-2"), &options());
        assert_eq!(
            record.errors[0].to_string(),
            "'' is not a valid value for amount, use numbers only."
        );
    }

    #[test]
    fn test_into_request_typed() {
        let request = validate(&InputRecord::new("3", "Giga", "bit", "base-2"), &options())
            .into_request()
            .unwrap();
        assert_eq!(request.amount, 3.0);
        assert_eq!(request.prefix, Prefix::Giga);
        assert_eq!(request.unit_type, UnitType::Bit);
        assert_eq!(request.base, UnitSystem::Base2);
    }

    #[test]
    fn test_into_request_rejects_errors() {
        let errors = validate(&InputRecord::new("x", "none", "bit", "base-2"), &options())
            .into_request()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_try_into_request_wraps_errors() {
        let err = validate(&InputRecord::new("x", "exa", "bit", "base-2"), &options())
            .try_into_request()
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(ref e) if e.len() == 2));
    }

    #[test]
    fn test_custom_options_restrict_choices() {
        let mut restricted = options();
        restricted.prefix.retain(|c| c.key == "none");

        let record = validate(&InputRecord::new("1", "kilo", "bit", "base-2"), &restricted);
        assert_eq!(
            record.errors[0].to_string(),
            "'kilo' is not a valid prefix: (none)"
        );
    }

    #[test]
    fn test_custom_option_without_variant_is_unsupported() {
        let mut extended = options();
        extended.prefix.push(OptionChoice::new("exa", "Exa (E)"));

        let record = validate(&InputRecord::new("1", "exa", "bit", "base-2"), &extended);
        assert!(record.is_valid());
        let errors = record.into_request().unwrap_err();
        assert_eq!(
            errors[0].to_string(),
            "'exa' is not a valid prefix: (none, kilo, mega, giga, tera, peta)"
        );
    }
}
