//! Path helpers for the settings file location.
//!
//! Responsibilities:
//! - Determine the platform-appropriate settings file path.
//!
//! Does NOT handle:
//! - File I/O operations (see `loader::file`).

use std::path::PathBuf;

use crate::constants::{APP_NAME, SETTINGS_FILE_NAME};
use crate::loader::ConfigError;

/// Returns the default path to the settings file.
///
/// - Linux: `~/.config/bitcalc/config.json`
/// - macOS: `~/Library/Application Support/bitcalc/config.json`
/// - Windows: `%AppData%\bitcalc\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory for this user".to_string())
    })?;

    Ok(proj_dirs.config_dir().join(SETTINGS_FILE_NAME))
}
