//! Configuration types for bitcalc.
//!
//! Responsibilities:
//! - Define the resolved `Config` handed to the CLI.
//! - Define the on-disk `SettingsFile` shape.
//!
//! Does NOT handle:
//! - Loading or merging sources (see `loader`).
//! - Validating conversion defaults; those are raw strings checked by the
//!   calculator's validator like any other input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_OUTPUT_FORMAT, LOG_FORMATS};

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub defaults: ConversionDefaults,
    pub output: OutputSettings,
}

/// Fallback values for conversion options omitted on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversionDefaults {
    pub prefix: Option<String>,
    pub unit_type: Option<String>,
    pub base: Option<String>,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// Lower-cased output format name, one of `constants::OUTPUT_FORMATS`.
    pub format: String,
    pub log_format: LogFormat,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: DEFAULT_OUTPUT_FORMAT.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

/// Format of diagnostic log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "unknown log format '{}', expected one of: {}",
                other,
                LOG_FORMATS.join(", ")
            )),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        })
    }
}

/// JSON settings file contents. Every field is optional.
///
/// ```json
/// { "prefix": "kilo", "type": "byte", "base": "base-2", "output": "json" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_format: Option<String>,
}
