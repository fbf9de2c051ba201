//! Process-based benchmark execution.
//!
//! The first whitespace token of a command-line prefix names the executable,
//! resolved against the runner's work directory (absolute paths are used as
//! given). Remaining tokens are passed ahead of the problem size. No shell is
//! involved, so prefixes are never re-interpreted.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::RunnerError;

/// Polling interval while waiting on a benchmark with a deadline.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Something that can time a benchmark at a given problem size.
pub trait Measure {
    /// Returns true when the executable named by `command_line_prefix`
    /// exists as a file in the work directory.
    fn executable_exists(&self, command_line_prefix: &str) -> bool;

    /// Runs the benchmark once and returns the elapsed seconds it reports.
    fn measure(&self, command_line_prefix: &str, problem_size: u64) -> Result<f64, RunnerError>;
}

/// Spawns benchmark executables from a fixed work directory.
#[derive(Debug, Clone)]
pub struct Runner {
    work_dir: PathBuf,
    timeout: Option<Duration>,
}

impl Runner {
    /// A relative `work_dir` is resolved against the current directory now,
    /// since the child resolves its program path after changing into it.
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        let work_dir = work_dir.into();
        Runner {
            work_dir: std::path::absolute(&work_dir).unwrap_or(work_dir),
            timeout: None,
        }
    }

    /// Kills a benchmark that has not exited after `timeout` and reports
    /// [`RunnerError::ExecutionError`]. Without a timeout the runner waits
    /// indefinitely.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The absolute directory benchmarks are looked up in and run from.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path of the executable a prefix refers to, or `None` for a blank
    /// prefix.
    pub fn executable_path(&self, command_line_prefix: &str) -> Option<PathBuf> {
        command_line_prefix
            .split_whitespace()
            .next()
            .map(|program| self.work_dir.join(program))
    }

    fn wait(&self, child: &mut Child) -> std::io::Result<Option<ExitStatus>> {
        let Some(timeout) = self.timeout else {
            return child.wait().map(Some);
        };
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(Some(status));
            }
            if Instant::now() >= deadline {
                return Ok(None);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl Measure for Runner {
    fn executable_exists(&self, command_line_prefix: &str) -> bool {
        self.executable_path(command_line_prefix)
            .is_some_and(|path| path.is_file())
    }

    fn measure(&self, command_line_prefix: &str, problem_size: u64) -> Result<f64, RunnerError> {
        let path = self
            .executable_path(command_line_prefix)
            .unwrap_or_else(|| self.work_dir.clone());
        if !path.is_file() {
            return Err(RunnerError::ExecutableNotFound { path });
        }

        let command = format!("{} {}", command_line_prefix.trim(), problem_size);
        let execution_error = |reason: String| RunnerError::ExecutionError {
            command: command.clone(),
            reason,
        };

        let mut child = Command::new(&path)
            .args(command_line_prefix.split_whitespace().skip(1))
            .arg(problem_size.to_string())
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| execution_error(format!("failed to start: {}", e)))?;
        debug!(%command, pid = child.id(), "benchmark started");

        // Pipes are drained on their own threads so a chatty benchmark
        // cannot block on a full pipe while we wait for it.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match self.wait(&mut child) {
            Ok(Some(status)) => status,
            Ok(None) => {
                let _ = child.kill();
                let _ = child.wait();
                warn!(%command, "benchmark timed out");
                // Drain threads are left detached: a grandchild may still
                // hold the pipes open.
                return Err(execution_error(format!(
                    "timed out after {:.3} seconds",
                    self.timeout.unwrap_or_default().as_secs_f64()
                )));
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(execution_error(format!("failed to wait: {}", e)));
            }
        };

        let stdout = stdout.join().unwrap_or_default();
        let stderr = stderr.join().unwrap_or_default();

        if !status.success() {
            let stderr = stderr.trim();
            let reason = if stderr.is_empty() {
                format!("exited with {}", status)
            } else {
                format!("exited with {}: {}", status, stderr)
            };
            return Err(execution_error(reason));
        }

        let seconds = parse_timing(&stdout)?;
        info!(%command, seconds, "benchmark measured");
        Ok(seconds)
    }
}

/// Reads a pipe to completion on a background thread.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

/// Parses the first line of benchmark output as a duration in seconds.
///
/// The line is trimmed; it must be a finite, non-negative number.
pub fn parse_timing(output: &str) -> Result<f64, RunnerError> {
    let first = output.lines().next().map(str::trim).unwrap_or("");
    match first.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => Ok(seconds),
        _ => Err(RunnerError::MalformedOutput {
            output: first.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_line_only() {
        assert_eq!(parse_timing("0.004512\n").unwrap(), 0.004512);
        assert_eq!(parse_timing("  1.5  \nnoise\n2.0\n").unwrap(), 1.5);
        assert_eq!(parse_timing("3").unwrap(), 3.0);
    }

    #[test]
    fn rejects_missing_or_bad_output() {
        for output in ["", "\n", "fast\n", "-0.5\n", "inf\n", "\n0.1\n"] {
            assert!(
                matches!(parse_timing(output), Err(RunnerError::MalformedOutput { .. })),
                "expected MalformedOutput for {:?}",
                output
            );
        }
    }

    #[test]
    fn executable_path_uses_first_token() {
        let runner = Runner::new("/opt/bench");
        assert_eq!(
            runner.executable_path("l2vecnorm"),
            Some(PathBuf::from("/opt/bench/l2vecnorm"))
        );
        assert_eq!(
            runner.executable_path("  python3 script.py"),
            Some(PathBuf::from("/opt/bench/python3"))
        );
        assert_eq!(
            runner.executable_path("/usr/bin/env foo"),
            Some(PathBuf::from("/usr/bin/env"))
        );
        assert_eq!(runner.executable_path("   "), None);
    }

    #[test]
    fn relative_work_dir_is_made_absolute() {
        let runner = Runner::new("bench_bin");
        assert!(runner.work_dir().is_absolute());
        assert_eq!(
            runner.work_dir(),
            std::env::current_dir().unwrap().join("bench_bin")
        );
        assert_eq!(
            runner.executable_path("l2vecnorm"),
            Some(runner.work_dir().join("l2vecnorm"))
        );
    }

    #[test]
    fn missing_executable_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let runner = Runner::new(dir.path());
        assert!(!runner.executable_exists("nope"));
        let err = runner.measure("nope", 10).unwrap_err();
        match err {
            RunnerError::ExecutableNotFound { path } => assert_eq!(path, dir.path().join("nope")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn directory_is_not_an_executable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("bench")).unwrap();
        let runner = Runner::new(dir.path());
        assert!(!runner.executable_exists("bench"));
        assert!(!runner.executable_exists(""));
    }
}
