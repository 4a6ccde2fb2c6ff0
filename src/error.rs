//! Error types for the xpatch CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for xpatch operations.
///
/// Every variant is fatal for the current invocation; nothing is retried.
#[derive(Error, Debug)]
pub enum XpatchError {
    /// A command-line value was accepted by the parser but cannot be used.
    #[error("{0}")]
    ArgumentError(String),

    /// The INI configuration is malformed or lacks a required section/option.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Reading the input/config or writing the output failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// The patched content contains a character outside 7-bit ASCII.
    #[error("Encoding error: {0}")]
    EncodingError(String),
}

impl XpatchError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            XpatchError::ArgumentError(_) => exit_codes::USER_ERROR,
            XpatchError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            XpatchError::IoError(_) => exit_codes::IO_FAILURE,
            XpatchError::EncodingError(_) => exit_codes::ENCODING_FAILURE,
        }
    }
}

/// Result type alias for xpatch operations.
pub type Result<T> = std::result::Result<T, XpatchError>;
