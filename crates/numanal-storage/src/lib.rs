//! Storage for benchmark programs and their timings.
//!
//! Provides the [`TimingStore`] trait defining the storage contract that all
//! backends implement, plus the [`InMemoryStore`] and [`SqliteStore`] as
//! first-class backends.
//!
//! # Integrity
//!
//! - Program names are unique; adding an existing name fails with
//!   [`StorageError::DuplicateKey`].
//! - Deleting a program removes every timing that references it.
//! - Timings can only be added for a program that exists.
//!
//! Duplicate problem sizes are *not* rejected here; that is a policy of the
//! interactive layer (see `numanal_core::is_duplicate`).
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`traits`]: TimingStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: SQL schema migrations and connection setup
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::TimingStore;
