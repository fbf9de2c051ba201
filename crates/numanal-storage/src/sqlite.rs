//! SQLite implementation of [`TimingStore`].
//!
//! [`SqliteStore`] persists programs and timings in a SQLite database with
//! foreign keys enforced and automatic schema migrations. Deleting a program
//! relies on `ON DELETE CASCADE` to remove its timings.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use numanal_core::{Program, Timing};

use crate::error::StorageError;
use crate::traits::TimingStore;

/// SQLite-backed implementation of [`TimingStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = crate::schema::open_database(path)?;
        info!(path = %path.display(), "opened timings database");
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    /// Verifies a program exists, returning an error if not.
    fn assert_program_exists(&self, name: &str) -> Result<(), StorageError> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM programs WHERE name = ?1)",
            params![name],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(StorageError::NotFound {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

impl TimingStore for SqliteStore {
    fn list_programs(&self) -> Result<Vec<Program>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT name, description, command_line_prefix FROM programs ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Program {
                name: row.get(0)?,
                description: row.get(1)?,
                command_line_prefix: row.get(2)?,
            })
        })?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    fn add_program(&mut self, program: &Program) -> Result<(), StorageError> {
        let tx = self.conn.transaction()?;
        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM programs WHERE name = ?1)",
            params![program.name],
            |row| row.get(0),
        )?;
        if exists {
            return Err(StorageError::DuplicateKey {
                name: program.name.clone(),
            });
        }
        tx.execute(
            "INSERT INTO programs (name, description, command_line_prefix) VALUES (?1, ?2, ?3)",
            params![
                program.name,
                program.description,
                program.command_line_prefix
            ],
        )?;
        tx.commit()?;
        info!(name = %program.name, "program added");
        Ok(())
    }

    fn delete_program(&mut self, name: &str) -> Result<(), StorageError> {
        let removed = self
            .conn
            .execute("DELETE FROM programs WHERE name = ?1", params![name])?;
        if removed > 0 {
            info!(name, "program deleted");
        }
        Ok(())
    }

    fn get_program(&self, name: &str) -> Result<Program, StorageError> {
        self.conn
            .query_row(
                "SELECT name, description, command_line_prefix FROM programs WHERE name = ?1",
                params![name],
                |row| {
                    Ok(Program {
                        name: row.get(0)?,
                        description: row.get(1)?,
                        command_line_prefix: row.get(2)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| StorageError::NotFound {
                name: name.to_string(),
            })
    }

    fn list_timings(&self, name: &str) -> Result<Vec<Timing>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT problem_size, time FROM timings
             WHERE program_name = ?1
             ORDER BY problem_size ASC, rowid ASC",
        )?;
        let rows = stmt.query_map(params![name], |row| {
            let problem_size: i64 = row.get(0)?;
            let time: f64 = row.get(1)?;
            Ok((problem_size, time))
        })?;
        let mut result = Vec::new();
        for row in rows {
            let (problem_size, time) = row?;
            // The CHECK constraint keeps stored sizes positive.
            result.push(Timing::new(problem_size as u64, time));
        }
        Ok(result)
    }

    fn add_timing(&mut self, name: &str, timing: Timing) -> Result<(), StorageError> {
        self.assert_program_exists(name)?;
        let problem_size = i64::try_from(timing.problem_size).map_err(|_| {
            StorageError::Sqlite(rusqlite::Error::ToSqlConversionFailure(
                format!("problem size {} exceeds i64", timing.problem_size).into(),
            ))
        })?;
        self.conn.execute(
            "INSERT INTO timings (program_name, problem_size, time) VALUES (?1, ?2, ?3)",
            params![name, problem_size, timing.time],
        )?;
        debug!(name, problem_size, time = timing.time, "timing added");
        Ok(())
    }

    fn delete_timings(&mut self, name: &str) -> Result<usize, StorageError> {
        let removed = self
            .conn
            .execute("DELETE FROM timings WHERE program_name = ?1", params![name])?;
        if removed > 0 {
            info!(name, removed, "timings deleted");
        }
        Ok(removed)
    }
}
