//! Centralized constants for the bitcalc workspace.
//!
//! Environment variable names and defaults live here so the CLI and the
//! loader agree on them.

// =============================================================================
// Output Defaults
// =============================================================================

/// Output format used when nothing else is configured.
pub const DEFAULT_OUTPUT_FORMAT: &str = "table";

/// Output format names accepted by the loader and the CLI.
pub const OUTPUT_FORMATS: [&str; 4] = ["table", "json", "csv", "markdown"];

/// Log format names accepted by the loader and the CLI.
pub const LOG_FORMATS: [&str; 2] = ["text", "json"];

// =============================================================================
// Settings File
// =============================================================================

/// Application name used for the platform config directory.
pub const APP_NAME: &str = "bitcalc";

/// File name of the JSON settings file inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "config.json";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_CONFIG_PATH: &str = "BITCALC_CONFIG_PATH";
pub const ENV_PREFIX: &str = "BITCALC_PREFIX";
pub const ENV_TYPE: &str = "BITCALC_TYPE";
pub const ENV_BASE: &str = "BITCALC_BASE";
pub const ENV_OUTPUT: &str = "BITCALC_OUTPUT";
pub const ENV_LOG_FORMAT: &str = "BITCALC_LOG_FORMAT";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
