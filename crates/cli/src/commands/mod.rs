//! CLI command implementations.

pub mod convert;
pub mod options;
pub mod query;
