//! Settings file loading for configuration.
//!
//! Responsibilities:
//! - Read the JSON settings file and apply its values to a `ConfigLoader`.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - File values never replace a value that is already set.
//! - A missing file at an explicit path is an error; a missing default file is not.
//! - Blank string values in the file are treated as unset.

use std::path::Path;
use tracing::debug;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::path::default_config_path;
use crate::types::SettingsFile;

/// Apply settings file values to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let (path, explicit) = match loader.config_path() {
        Some(path) => (path.clone(), true),
        None => (default_config_path()?, false),
    };

    if !path.exists() {
        if explicit {
            return Err(ConfigError::ConfigFileNotFound { path });
        }
        debug!(path = %path.display(), "No settings file at default location");
        return Ok(());
    }

    let settings = read_settings(&path)?;
    debug!(path = %path.display(), "Loaded settings file");
    apply_settings(loader, settings);
    Ok(())
}

fn read_settings(path: &Path) -> Result<SettingsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_settings(loader: &mut ConfigLoader, settings: SettingsFile) {
    let present = |value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    if loader.prefix().is_none() {
        loader.set_prefix(present(settings.prefix));
    }
    if loader.unit_type().is_none() {
        loader.set_unit_type(present(settings.unit_type));
    }
    if loader.base().is_none() {
        loader.set_base(present(settings.base));
    }
    if loader.output().is_none() {
        loader.set_output(present(settings.output));
    }
    if loader.log_format().is_none() {
        loader.set_log_format(present(settings.log_format));
    }
}
