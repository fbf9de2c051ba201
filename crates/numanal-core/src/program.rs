//! Domain records: benchmark programs and their recorded timings.
//!
//! A [`Program`] is identified by its `name`. A [`Timing`] is one
//! `(problem_size, time)` measurement; the owning program's name is carried
//! by the storage layer, not by the record itself.

use std::fmt;

/// A named external benchmark executable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Program {
    /// Unique program name (primary key).
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Executable (optionally followed by leading arguments) that receives
    /// the problem size as its final argument.
    pub command_line_prefix: String,
}

impl Program {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        command_line_prefix: impl Into<String>,
    ) -> Self {
        Program {
            name: name.into(),
            description: description.into(),
            command_line_prefix: command_line_prefix.into(),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One measured (or manually entered) duration at a problem size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Positive problem size passed to the benchmark.
    pub problem_size: u64,
    /// Elapsed time in seconds, never negative.
    pub time: f64,
}

impl Timing {
    pub fn new(problem_size: u64, time: f64) -> Self {
        Timing { problem_size, time }
    }
}
