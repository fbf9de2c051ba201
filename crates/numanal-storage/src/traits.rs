//! The [`TimingStore`] trait defining the storage contract for programs and
//! their timings.
//!
//! All backends (InMemoryStore, SqliteStore) implement this trait, so the
//! interactive layer can be exercised against either without change.
//! Every write is committed before the call returns; there are no
//! multi-call transactions.

use numanal_core::{Program, Timing};

use crate::error::StorageError;

/// The storage contract for programs and timings.
///
/// The trait is synchronous; only one session is assumed to use a store at
/// a time.
pub trait TimingStore {
    // -------------------------------------------------------------------
    // Program operations
    // -------------------------------------------------------------------

    /// Lists all programs in a stable (insertion) order.
    fn list_programs(&self) -> Result<Vec<Program>, StorageError>;

    /// Adds a program.
    ///
    /// Fails with [`StorageError::DuplicateKey`] if the name is taken; the
    /// store is left unchanged in that case.
    fn add_program(&mut self, program: &Program) -> Result<(), StorageError>;

    /// Deletes a program together with all of its timings.
    ///
    /// Deleting a name that is not stored is a no-op.
    fn delete_program(&mut self, name: &str) -> Result<(), StorageError>;

    /// Retrieves a program by name.
    fn get_program(&self, name: &str) -> Result<Program, StorageError>;

    /// Retrieves the command-line prefix of a program.
    ///
    /// Fails with [`StorageError::NotFound`] if the name is not stored.
    fn get_command_line_prefix(&self, name: &str) -> Result<String, StorageError> {
        self.get_program(name).map(|p| p.command_line_prefix)
    }

    // -------------------------------------------------------------------
    // Timing operations
    // -------------------------------------------------------------------

    /// Lists a program's timings ascending by problem size. Unknown
    /// programs have no timings.
    fn list_timings(&self, name: &str) -> Result<Vec<Timing>, StorageError>;

    /// Adds one timing row. Duplicate problem sizes are not checked here.
    ///
    /// Fails with [`StorageError::NotFound`] if the program is not stored.
    fn add_timing(&mut self, name: &str, timing: Timing) -> Result<(), StorageError>;

    /// Deletes every timing of a program, leaving the program itself.
    ///
    /// Returns the number of rows removed (zero if there were none).
    fn delete_timings(&mut self, name: &str) -> Result<usize, StorageError>;
}
