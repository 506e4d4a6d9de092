//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read `BITCALC_*` environment variables and apply them to a `ConfigLoader`.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading the settings file (see file.rs).
//! - .env file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - An explicit config path already on the loader is not replaced.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_BASE, ENV_CONFIG_PATH, ENV_LOG_FORMAT, ENV_OUTPUT, ENV_PREFIX, ENV_TYPE,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.config_path().is_none()
        && let Some(path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        loader.set_config_path(Some(PathBuf::from(path)));
    }
    if let Some(prefix) = env_var_or_none(ENV_PREFIX) {
        loader.set_prefix(Some(prefix));
    }
    if let Some(unit_type) = env_var_or_none(ENV_TYPE) {
        loader.set_unit_type(Some(unit_type));
    }
    if let Some(base) = env_var_or_none(ENV_BASE) {
        loader.set_base(Some(base));
    }
    if let Some(output) = env_var_or_none(ENV_OUTPUT) {
        loader.set_output(Some(output));
    }
    if let Some(log_format) = env_var_or_none(ENV_LOG_FORMAT) {
        loader.set_log_format(Some(log_format));
    }
    Ok(())
}
