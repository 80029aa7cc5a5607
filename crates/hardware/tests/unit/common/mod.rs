//! Common type tests.

/// Error messages and exit codes.
pub mod error;
