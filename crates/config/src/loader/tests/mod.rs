//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test builder methods and final validation.
//! - Test environment variable handling and precedence.
//! - Test settings file loading.
//! - Test dotenv loading.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod file_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every `BITCALC_*` variable the loader reads, unset.
pub fn cleared_bitcalc_vars() -> Vec<(&'static str, Option<&'static str>)> {
    use crate::constants::*;
    [
        ENV_CONFIG_PATH,
        ENV_PREFIX,
        ENV_TYPE,
        ENV_BASE,
        ENV_OUTPUT,
        ENV_LOG_FORMAT,
    ]
    .into_iter()
    .map(|name| (name, None))
    .collect()
}
