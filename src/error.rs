//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All fallible operations return [`Result<T, CtrcryptError>`](CtrcryptError).

use thiserror::Error;

/// The error type for all CTR cipher operations.
///
/// Covers I/O failures and pre-I/O parameter rejection. Cryptographic
/// misuse (reusing a key/IV pair across two plaintexts) is a documented
/// precondition violation, not a runtime error — CTR mode cannot detect
/// it, and this crate performs no authentication.
#[derive(Error, Debug)]
pub enum CtrcryptError {
    /// I/O error reading a source or writing a destination.
    ///
    /// Wraps [`std::io::Error`]; the operation aborts immediately and a
    /// partially written destination is left in an undefined state.
    /// Callers needing atomicity should write to a temporary location
    /// and rename on success.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid parameter, detected before any I/O.
    ///
    /// Raised for wrong-sized key or IV material and for a zero block
    /// count in a partial-decrypt request. Never retried internally.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Binary-to-text codec failure (malformed base64 input).
    #[error("Codec error: {0}")]
    Codec(String),
}

impl From<&'static str> for CtrcryptError {
    fn from(msg: &'static str) -> Self {
        CtrcryptError::Config(msg.to_string())
    }
}
