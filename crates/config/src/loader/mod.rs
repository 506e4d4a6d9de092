//! Configuration loader for environment variables and the settings file.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and the JSON settings file.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Writing the settings file.
//! - Checking conversion defaults against the calculator's option sets.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over settings file values.
//! - Builder `with_*` overrides take precedence over everything else.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod file;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
