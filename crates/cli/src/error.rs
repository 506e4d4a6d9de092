//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map calculator and configuration errors to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 matches clap's own usage-error code, so bad flags and bad
//!   query arguments share one code.

use bitcalc_core::CalcError;

/// Structured exit codes for bitcalc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success, including an incomplete input that shows the form.
    Success = 0,

    /// General error: I/O, configuration, or anything unclassified.
    GeneralError = 1,

    /// The argument set was unacceptable (too many or unknown arguments).
    ///
    /// Scripts should fix the invocation, not the values.
    InvalidArguments = 2,

    /// An amount or option value failed validation.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&CalcError> for ExitCode {
    fn from(err: &CalcError) -> Self {
        match err {
            CalcError::InvalidArguments(_) => ExitCode::InvalidArguments,
            CalcError::InvalidInput(_) => ExitCode::ValidationError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no calculator error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(calc_err) = cause.downcast_ref::<CalcError>() {
                return ExitCode::from(calc_err);
            }
        }

        ExitCode::GeneralError
    }
}
