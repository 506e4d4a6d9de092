//! Unit systems, prefixes, and the ordered prefix tables.
//!
//! Responsibilities:
//! - Define the closed option sets (base, prefix, unit type) as enums.
//! - Provide the per-base prefix tables used for conversion table generation.
//!
//! Does NOT handle:
//! - Validation of raw user strings (see `validate`).
//! - Arithmetic on amounts (see `convert`).
//!
//! Invariants:
//! - Each prefix table lists `bit`, `byte`, then ascending prefixed bit/byte pairs.
//!   Entry `i` and entry `i - 2` share a unit type and differ by one prefix level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Field, ParseOptionError};

/// Exponent radix used for prefix scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Binary (IEC) prefixes, powers of 1024.
    #[serde(rename = "base-2")]
    Base2,
    /// Decimal (SI) prefixes, powers of 1000.
    #[serde(rename = "base-10")]
    Base10,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Base2, UnitSystem::Base10];

    /// Multiplier applied once per prefix level.
    pub const fn multiplier(self) -> u32 {
        match self {
            UnitSystem::Base2 => 1024,
            UnitSystem::Base10 => 1000,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            UnitSystem::Base2 => "base-2",
            UnitSystem::Base10 => "base-10",
        }
    }

    /// Label shown next to the key in the input form.
    pub const fn form_label(self) -> &'static str {
        match self {
            UnitSystem::Base2 => "base-2 (1024)",
            UnitSystem::Base10 => "base-10 (1000)",
        }
    }

    /// Ordered prefix table for this base.
    pub fn units(self) -> &'static [UnitEntry] {
        match self {
            UnitSystem::Base2 => &BINARY_UNITS,
            UnitSystem::Base10 => &DECIMAL_UNITS,
        }
    }
}

/// Magnitude prefix applied to an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prefix {
    None,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
}

impl Prefix {
    pub const ALL: [Prefix; 6] = [
        Prefix::None,
        Prefix::Kilo,
        Prefix::Mega,
        Prefix::Giga,
        Prefix::Tera,
        Prefix::Peta,
    ];

    /// Number of times the base multiplier is applied.
    pub const fn power(self) -> i32 {
        match self {
            Prefix::None => 0,
            Prefix::Kilo => 1,
            Prefix::Mega => 2,
            Prefix::Giga => 3,
            Prefix::Tera => 4,
            Prefix::Peta => 5,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Prefix::None => "none",
            Prefix::Kilo => "kilo",
            Prefix::Mega => "mega",
            Prefix::Giga => "giga",
            Prefix::Tera => "tera",
            Prefix::Peta => "peta",
        }
    }

    pub const fn form_label(self) -> &'static str {
        match self {
            Prefix::None => "-",
            Prefix::Kilo => "Kilo (K)",
            Prefix::Mega => "Mega (M)",
            Prefix::Giga => "Giga (G)",
            Prefix::Tera => "Tera (T)",
            Prefix::Peta => "Peta (P)",
        }
    }
}

/// Whether an amount counts bits or bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Bit,
    Byte,
}

impl UnitType {
    pub const ALL: [UnitType; 2] = [UnitType::Bit, UnitType::Byte];

    pub const BITS_PER_BYTE: f64 = 8.0;

    pub const fn key(self) -> &'static str {
        match self {
            UnitType::Bit => "bit",
            UnitType::Byte => "byte",
        }
    }

    pub const fn form_label(self) -> &'static str {
        match self {
            UnitType::Bit => "bit (b)",
            UnitType::Byte => "byte (B)",
        }
    }
}

macro_rules! impl_key_traits {
    ($ty:ty, $field:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $ty {
            type Err = ParseOptionError;

            /// Case-insensitive lookup by key.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lowered = s.to_lowercase();
                Self::ALL
                    .into_iter()
                    .find(|v| v.key() == lowered)
                    .ok_or_else(|| ParseOptionError {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_key_traits!(UnitSystem, Field::Base);
impl_key_traits!(Prefix, Field::Prefix);
impl_key_traits!(UnitType, Field::Type);

/// One row of a prefix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitEntry {
    pub abbr: &'static str,
    pub label: &'static str,
    pub kind: UnitType,
    pub prefix: Prefix,
}

const fn entry(abbr: &'static str, label: &'static str, kind: UnitType, prefix: Prefix) -> UnitEntry {
    UnitEntry {
        abbr,
        label,
        kind,
        prefix,
    }
}

static BINARY_UNITS: [UnitEntry; 12] = [
    entry("b", "bit", UnitType::Bit, Prefix::None),
    entry("B", "byte", UnitType::Byte, Prefix::None),
    entry("Kib", "kibibit", UnitType::Bit, Prefix::Kilo),
    entry("KiB", "kibibyte", UnitType::Byte, Prefix::Kilo),
    entry("Mib", "mebibit", UnitType::Bit, Prefix::Mega),
    entry("MiB", "mebibyte", UnitType::Byte, Prefix::Mega),
    entry("Gib", "gibibit", UnitType::Bit, Prefix::Giga),
    entry("GiB", "gibibyte", UnitType::Byte, Prefix::Giga),
    entry("Tib", "tebibit", UnitType::Bit, Prefix::Tera),
    entry("TiB", "tebibyte", UnitType::Byte, Prefix::Tera),
    entry("Pib", "pebibit", UnitType::Bit, Prefix::Peta),
    entry("PiB", "pebibyte", UnitType::Byte, Prefix::Peta),
];

static DECIMAL_UNITS: [UnitEntry; 12] = [
    entry("b", "bit", UnitType::Bit, Prefix::None),
    entry("B", "byte", UnitType::Byte, Prefix::None),
    entry("kb", "kilobit", UnitType::Bit, Prefix::Kilo),
    entry("kB", "kilobyte", UnitType::Byte, Prefix::Kilo),
    entry("Mb", "megabit", UnitType::Bit, Prefix::Mega),
    entry("MB", "megabyte", UnitType::Byte, Prefix::Mega),
    entry("Gb", "gigabit", UnitType::Bit, Prefix::Giga),
    entry("GB", "gigabyte", UnitType::Byte, Prefix::Giga),
    entry("Tb", "terabit", UnitType::Bit, Prefix::Tera),
    entry("TB", "terabyte", UnitType::Byte, Prefix::Tera),
    entry("Pb", "petabit", UnitType::Bit, Prefix::Peta),
    entry("PB", "petabyte", UnitType::Byte, Prefix::Peta),
];
