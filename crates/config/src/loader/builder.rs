//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Build the final `Config` from loaded values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Settings file loading logic (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Settings file values only fill fields that are still unset.
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;
use tracing::debug;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{DEFAULT_OUTPUT_FORMAT, ENV_DOTENV_DISABLED, OUTPUT_FORMATS};
use crate::types::{Config, ConversionDefaults, LogFormat, OutputSettings};

/// Configuration loader that builds config from the environment and the settings file.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    prefix: Option<String>,
    unit_type: Option<String>,
    base: Option<String>,
    output: Option<String>,
    log_format: Option<String>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not
    /// loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Use an explicit settings file. A missing explicit file is an error.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from `BITCALC_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Fill still-unset values from the settings file.
    ///
    /// Without an explicit path the platform default location is tried and
    /// silently skipped when absent.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Set the default prefix.
    pub fn with_prefix(mut self, prefix: String) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Set the default unit type.
    pub fn with_unit_type(mut self, unit_type: String) -> Self {
        self.unit_type = Some(unit_type);
        self
    }

    /// Set the default base.
    pub fn with_base(mut self, base: String) -> Self {
        self.base = Some(base);
        self
    }

    /// Set the output format name.
    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    /// Set the log format name.
    pub fn with_log_format(mut self, log_format: String) -> Self {
        self.log_format = Some(log_format);
        self
    }

    /// Build the final configuration.
    ///
    /// Output and log format names are checked here; conversion defaults are
    /// passed through untouched.
    pub fn build(self) -> Result<Config, ConfigError> {
        let format = match self.output {
            Some(raw) => normalize_output_format(&raw)?,
            None => DEFAULT_OUTPUT_FORMAT.to_string(),
        };

        let log_format = match self.log_format {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|message| ConfigError::InvalidValue {
                    var: "log_format".to_string(),
                    message,
                })?,
            None => LogFormat::default(),
        };

        let config = Config {
            defaults: ConversionDefaults {
                prefix: self.prefix,
                unit_type: self.unit_type,
                base: self.base,
            },
            output: OutputSettings { format, log_format },
        };
        debug!(
            output = %config.output.format,
            log_format = %config.output.log_format,
            "Built configuration"
        );
        Ok(config)
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn prefix(&self) -> Option<&String> {
        self.prefix.as_ref()
    }

    pub(crate) fn unit_type(&self) -> Option<&String> {
        self.unit_type.as_ref()
    }

    pub(crate) fn base(&self) -> Option<&String> {
        self.base.as_ref()
    }

    pub(crate) fn output(&self) -> Option<&String> {
        self.output.as_ref()
    }

    pub(crate) fn log_format(&self) -> Option<&String> {
        self.log_format.as_ref()
    }

    pub(crate) fn set_prefix(&mut self, prefix: Option<String>) {
        self.prefix = prefix;
    }

    pub(crate) fn set_unit_type(&mut self, unit_type: Option<String>) {
        self.unit_type = unit_type;
    }

    pub(crate) fn set_base(&mut self, base: Option<String>) {
        self.base = base;
    }

    pub(crate) fn set_output(&mut self, output: Option<String>) {
        self.output = output;
    }

    pub(crate) fn set_log_format(&mut self, log_format: Option<String>) {
        self.log_format = log_format;
    }
}

/// Lower-case and trim an output format name, rejecting unknown names.
fn normalize_output_format(raw: &str) -> Result<String, ConfigError> {
    let normalized = raw.trim().to_lowercase();
    if OUTPUT_FORMATS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(ConfigError::InvalidValue {
            var: "output".to_string(),
            message: format!(
                "unknown output format '{}', expected one of: {}",
                raw.trim(),
                OUTPUT_FORMATS.join(", ")
            ),
        })
    }
}
