//! Runner error types covering every way a measurement can fail.

use std::path::PathBuf;

/// Errors that can occur while running a benchmark executable.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// No executable file matches the command-line prefix.
    #[error("executable not found: {}", path.display())]
    ExecutableNotFound { path: PathBuf },

    /// The first output line is missing, not a number, or not a valid
    /// duration.
    #[error("malformed benchmark output: {output:?}")]
    MalformedOutput { output: String },

    /// The process could not be started, exited abnormally, or overran the
    /// configured timeout.
    #[error("running `{command}` failed: {reason}")]
    ExecutionError { command: String, reason: String },
}
