//! In-memory implementation of [`TimingStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and throwaway
//! sessions. It keeps programs in insertion order and gives each program its
//! own timing list, so removing a program drops its timings with it, the
//! same cascade the SQLite schema performs.

use numanal_core::{Program, Timing};

use crate::error::StorageError;
use crate::traits::TimingStore;

/// Data stored for a single program in the in-memory backend.
#[derive(Debug, Clone)]
struct StoredProgram {
    program: Program,
    /// Timings in insertion order; sorted on read.
    timings: Vec<Timing>,
}

/// In-memory backend with identical semantics to [`crate::SqliteStore`].
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    programs: Vec<StoredProgram>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, name: &str) -> Option<&StoredProgram> {
        self.programs.iter().find(|p| p.program.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut StoredProgram> {
        self.programs.iter_mut().find(|p| p.program.name == name)
    }
}

impl TimingStore for InMemoryStore {
    fn list_programs(&self) -> Result<Vec<Program>, StorageError> {
        Ok(self.programs.iter().map(|p| p.program.clone()).collect())
    }

    fn add_program(&mut self, program: &Program) -> Result<(), StorageError> {
        if self.find(&program.name).is_some() {
            return Err(StorageError::DuplicateKey {
                name: program.name.clone(),
            });
        }
        self.programs.push(StoredProgram {
            program: program.clone(),
            timings: Vec::new(),
        });
        Ok(())
    }

    fn delete_program(&mut self, name: &str) -> Result<(), StorageError> {
        self.programs.retain(|p| p.program.name != name);
        Ok(())
    }

    fn get_program(&self, name: &str) -> Result<Program, StorageError> {
        self.find(name)
            .map(|p| p.program.clone())
            .ok_or_else(|| StorageError::NotFound {
                name: name.to_string(),
            })
    }

    fn list_timings(&self, name: &str) -> Result<Vec<Timing>, StorageError> {
        let mut timings = self
            .find(name)
            .map(|p| p.timings.clone())
            .unwrap_or_default();
        // Stable sort keeps insertion order among equal sizes, like
        // `ORDER BY problem_size, rowid`.
        timings.sort_by_key(|t| t.problem_size);
        Ok(timings)
    }

    fn add_timing(&mut self, name: &str, timing: Timing) -> Result<(), StorageError> {
        let stored = self.find_mut(name).ok_or_else(|| StorageError::NotFound {
            name: name.to_string(),
        })?;
        stored.timings.push(timing);
        Ok(())
    }

    fn delete_timings(&mut self, name: &str) -> Result<usize, StorageError> {
        Ok(self
            .find_mut(name)
            .map(|p| std::mem::take(&mut p.timings).len())
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_kept() {
        let mut store = InMemoryStore::new();
        for name in ["zeta", "alpha", "mid"] {
            store
                .add_program(&Program::new(name, "desc", "prefix"))
                .unwrap();
        }
        let names: Vec<String> = store
            .list_programs()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn equal_sizes_keep_insertion_order() {
        let mut store = InMemoryStore::new();
        store.add_program(&Program::new("p", "d", "x")).unwrap();
        store.add_timing("p", Timing::new(10, 0.3)).unwrap();
        store.add_timing("p", Timing::new(5, 0.1)).unwrap();
        store.add_timing("p", Timing::new(10, 0.2)).unwrap();
        assert_eq!(
            store.list_timings("p").unwrap(),
            vec![
                Timing::new(5, 0.1),
                Timing::new(10, 0.3),
                Timing::new(10, 0.2)
            ]
        );
    }

    #[test]
    fn readding_after_delete_starts_empty() {
        let mut store = InMemoryStore::new();
        let program = Program::new("p", "d", "x");
        store.add_program(&program).unwrap();
        store.add_timing("p", Timing::new(1, 1.0)).unwrap();
        store.delete_program("p").unwrap();
        store.add_program(&program).unwrap();
        assert!(store.list_timings("p").unwrap().is_empty());
    }
}
