//! Settings file tests for the configuration loader.
//!
//! Responsibilities:
//! - Test loading values from an explicit settings file.
//! - Test that the environment wins over the file.
//! - Test error reporting for missing and malformed files.

use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::{cleared_bitcalc_vars, env_lock};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::LogFormat;

fn write_settings(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_file_values_loaded() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_settings(
        temp_dir.path(),
        r#"{"prefix": "kilo", "type": "byte", "base": "base-2", "output": "csv", "log_format": "json"}"#,
    );

    temp_env::with_vars(cleared_bitcalc_vars(), || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_env()
            .unwrap()
            .from_file()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.defaults.prefix.as_deref(), Some("kilo"));
        assert_eq!(config.defaults.unit_type.as_deref(), Some("byte"));
        assert_eq!(config.defaults.base.as_deref(), Some("base-2"));
        assert_eq!(config.output.format, "csv");
        assert_eq!(config.output.log_format, LogFormat::Json);
    });
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_settings(temp_dir.path(), r#"{"prefix": "kilo", "base": "base-2"}"#);

    let mut vars = cleared_bitcalc_vars();
    vars.retain(|(name, _)| *name != "BITCALC_PREFIX");
    vars.push(("BITCALC_PREFIX", Some("tera")));

    temp_env::with_vars(vars, || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_env()
            .unwrap()
            .from_file()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.defaults.prefix.as_deref(), Some("tera"));
        assert_eq!(config.defaults.base.as_deref(), Some("base-2"));
    });
}

#[test]
fn test_blank_file_values_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_settings(temp_dir.path(), r#"{"prefix": "  ", "output": ""}"#);

    let config = ConfigLoader::new()
        .with_config_path(path)
        .from_file()
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.defaults.prefix, None);
    assert_eq!(config.output.format, "table");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.json");

    let result = ConfigLoader::new().with_config_path(path.clone()).from_file();
    match result {
        Err(ConfigError::ConfigFileNotFound { path: reported }) => assert_eq!(reported, path),
        other => panic!("expected ConfigFileNotFound, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_settings(temp_dir.path(), "{ not json");

    let result = ConfigLoader::new().with_config_path(path).from_file();
    assert!(matches!(result, Err(ConfigError::ConfigFileParse { .. })));
}

#[test]
fn test_unknown_keys_are_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_settings(temp_dir.path(), r#"{"amount": "5"}"#);

    let result = ConfigLoader::new().with_config_path(path).from_file();
    assert!(matches!(result, Err(ConfigError::ConfigFileParse { .. })));
}
