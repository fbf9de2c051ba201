//! Input error types for numanal-core.
//!
//! Uses `thiserror` for matchable variants. Each variant carries the token
//! that failed so the caller can echo it back to the user.

use thiserror::Error;

/// Errors produced while tokenizing free-form numeric input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A token could not be read as an integer.
    #[error("\"{token}\" cannot be converted to an integer")]
    InvalidInteger { token: String },

    /// A token could not be read as a finite decimal number.
    #[error("\"{token}\" cannot be converted to a decimal number")]
    InvalidFloat { token: String },
}
