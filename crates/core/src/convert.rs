//! Amount-to-bits conversion and conversion table generation.
//!
//! Responsibilities:
//! - Reduce a prefixed bit/byte amount to its canonical bit value.
//! - Expand a canonical bit value into every unit of a base's prefix table.
//!
//! Does NOT handle:
//! - Validation; callers pass typed, already-validated values.
//! - Display formatting of amounts (see `format`).
//!
//! Invariants:
//! - Table rows follow `UnitSystem::units()` order exactly, without filtering.
//! - `row[0] = bits`, `row[1] = bits / 8`, `row[i] = row[i - 2] / multiplier`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::units::{Prefix, UnitSystem, UnitType};
use crate::validate::ConversionRequest;

/// One unit of a conversion table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRow {
    pub abbr: String,
    pub label: String,
    pub amount: f64,
}

/// A completed conversion: the typed input, its bit value, and the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub input: ConversionRequest,
    pub bits: f64,
    pub rows: Vec<ConversionRow>,
}

impl ConversionReport {
    /// Look up a row by its full label (e.g. `"kilobyte"`).
    pub fn row(&self, label: &str) -> Option<&ConversionRow> {
        self.rows.iter().find(|row| row.label == label)
    }
}

/// Convert a prefixed bit or byte amount to a plain bit value.
pub fn to_bits(amount: f64, prefix: Prefix, unit_type: UnitType, base: UnitSystem) -> f64 {
    let bits = match unit_type {
        UnitType::Bit => amount,
        UnitType::Byte => amount * UnitType::BITS_PER_BYTE,
    };

    match prefix {
        Prefix::None => bits,
        _ => bits * f64::from(base.multiplier()).powi(prefix.power()),
    }
}

/// Expand a bit value into the full conversion table for `base`.
pub fn generate_table(bits: f64, base: UnitSystem) -> Vec<ConversionRow> {
    let divisor = f64::from(base.multiplier());
    let units = base.units();
    let mut amounts: Vec<f64> = Vec::with_capacity(units.len());

    for i in 0..units.len() {
        let amount = match i {
            0 => bits,
            1 => bits / UnitType::BITS_PER_BYTE,
            _ => amounts[i - 2] / divisor,
        };
        amounts.push(amount);
    }

    units
        .iter()
        .zip(amounts)
        .map(|(unit, amount)| ConversionRow {
            abbr: unit.abbr.to_string(),
            label: unit.label.to_string(),
            amount,
        })
        .collect()
}

/// Run a validated request through both conversion steps.
pub fn convert(request: &ConversionRequest) -> ConversionReport {
    let bits = to_bits(
        request.amount,
        request.prefix,
        request.unit_type,
        request.base,
    );
    debug!(
        amount = request.amount,
        prefix = %request.prefix,
        unit_type = %request.unit_type,
        base = %request.base,
        bits,
        "Converted amount to bits"
    );

    ConversionReport {
        input: *request,
        bits,
        rows: generate_table(bits, request.base),
    }
}
