//! Formatting utilities for human-readable output.
//!
//! Provides the presentation helpers shared by every output format:
//! scaled-precision amounts, input echoes, and indented JSON.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Format an amount with precision that shrinks as the whole part grows.
///
/// | Amount | Decimals |
/// |--------|----------|
/// | `< 1` | 15 |
/// | whole part under 4 digits | 3 |
/// | whole part under 6 digits | 2 |
/// | whole part under 9 digits | 1 |
/// | otherwise | integer only |
///
/// Trailing zeros and a dangling decimal point are removed.
///
/// # Examples
///
/// ```
/// use bitcalc_core::format::format_decimal;
///
/// assert_eq!(format_decimal(0.001), "0.001");
/// assert_eq!(format_decimal(1.0), "1");
/// assert_eq!(format_decimal(1234.5678), "1234.57");
/// assert_eq!(format_decimal(123456789.9), "123456789");
/// ```
pub fn format_decimal(amount: f64) -> String {
    if amount < 1.0 {
        return trim_fraction(format!("{:.15}", amount));
    }

    let whole = format!("{:.0}", amount.trunc());
    match whole.len() {
        0..=3 => trim_fraction(format!("{:.3}", amount)),
        4..=5 => trim_fraction(format!("{:.2}", amount)),
        6..=8 => trim_fraction(format!("{:.1}", amount)),
        _ => whole,
    }
}

/// Echo an input amount without trailing zeros or decimal point.
///
/// ```
/// use bitcalc_core::format::format_input_amount;
///
/// assert_eq!(format_input_amount(1.0), "1");
/// assert_eq!(format_input_amount(2.50), "2.5");
/// assert_eq!(format_input_amount(100.0), "100");
/// ```
pub fn format_input_amount(amount: f64) -> String {
    trim_fraction(amount.to_string())
}

/// Serialize a value as JSON with 4-space indentation and sorted object keys.
pub fn format_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    // Round-trip through `Value` so object keys come out sorted.
    let value = serde_json::to_value(value)?;

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn trim_fraction(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
