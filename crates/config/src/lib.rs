//! Configuration management for bitcalc.
//!
//! This crate provides types and loaders for calculator defaults and output
//! settings, layered from `.env` files, a JSON settings file, environment
//! variables, and explicit overrides.

pub mod constants;
mod loader;
mod path;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use path::default_config_path;
pub use types::{Config, ConversionDefaults, LogFormat, OutputSettings, SettingsFile};
