//! Storage error types for numanal-storage.
//!
//! [`StorageError`] is the one error type every backend returns, so callers
//! never see engine-specific faults except wrapped in the `Sqlite` variant.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A program with this name is already stored.
    #[error("program already exists: {name}")]
    DuplicateKey { name: String },

    /// No program with this name is stored.
    #[error("program not found: {name}")]
    NotFound { name: String },

    /// Underlying SQLite fault (I/O, locking, unclassified constraint).
    #[error("storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Schema migration could not be applied.
    #[error("migration error: {0}")]
    Migration(String),
}
