//! Integration tests for configuration loading through the public API.
//!
//! These tests exercise the same builder chain the CLI uses.

use bitcalc_config::{ConfigError, ConfigLoader, LogFormat, default_config_path, env_var_or_none};
use std::path::PathBuf;

/// Builder values stand in for command-line flags and win over defaults.
#[test]
fn test_config_loader_cli_overrides() {
    let config = ConfigLoader::new()
        .with_prefix("kilo".to_string())
        .with_output("json".to_string())
        .with_log_format("json".to_string())
        .build()
        .expect("should build with CLI overrides");

    assert_eq!(config.defaults.prefix.as_deref(), Some("kilo"));
    assert_eq!(config.output.format, "json");
    assert_eq!(config.output.log_format, LogFormat::Json);
}

#[test]
fn test_env_var_or_none_exported() {
    let _result: Option<String> = env_var_or_none("BITCALC_PREFIX");
}

#[test]
fn test_default_config_path_exported() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("config.json"));
    }
}

#[test]
fn test_missing_explicit_path_error_message() {
    let path = PathBuf::from("/nonexistent/bitcalc/settings.json");
    let err = ConfigLoader::new()
        .with_config_path(path)
        .from_file()
        .unwrap_err();

    assert!(matches!(err, ConfigError::ConfigFileNotFound { .. }));
    assert!(err.to_string().contains("/nonexistent/bitcalc/settings.json"));
}
