//! Shared test utilities for bitcalc integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Keep the host's settings file and `BITCALC_*` variables out of tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.

use assert_cmd::Command;

/// Home directory that never exists, so no default settings file is found.
const ISOLATED_HOME: &str = "/nonexistent/bitcalc-test-home";

/// Returns a hermetic `bitcalc` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - The default settings file location points at an empty home.
/// - `BITCALC_*` variables are cleared to ensure no leakage from the host.
pub fn bitcalc_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("bitcalc");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("HOME", ISOLATED_HOME)
        .env("XDG_CONFIG_HOME", ISOLATED_HOME);

    // Clear potential host leakage
    cmd.env_remove("BITCALC_CONFIG_PATH")
        .env_remove("BITCALC_PREFIX")
        .env_remove("BITCALC_TYPE")
        .env_remove("BITCALC_BASE")
        .env_remove("BITCALC_OUTPUT")
        .env_remove("BITCALC_LOG_FORMAT")
        .env_remove("RUST_LOG");

    cmd
}
