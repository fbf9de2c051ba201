//! Command-line configuration for the `numanal` binary.
//!
//! Every flag is optional. Without any, the database is `timings.db` and
//! benchmarks are looked up in the current directory.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};

/// Record, generate and plot benchmark timings.
#[derive(Parser, Debug)]
#[command(name = "numanal", version, about = "Record, generate and plot benchmark timings")]
pub struct Cli {
    /// Path to the timings database file.
    #[arg(long, default_value = "timings.db", env = "NUMANAL_DB_PATH")]
    pub db: PathBuf,

    /// Directory holding the benchmark executables. Benchmarks run here.
    #[arg(long, default_value = ".", env = "NUMANAL_WORK_DIR")]
    pub work_dir: PathBuf,

    /// File the timing plot is written to.
    #[arg(long, default_value = "timings.svg", env = "NUMANAL_PLOT_PATH")]
    pub plot_out: PathBuf,

    /// Kill a benchmark that runs longer than this many seconds.
    #[arg(long, value_name = "SECS", value_parser = parse_timeout, env = "NUMANAL_TIMEOUT")]
    pub timeout: Option<Duration>,

    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid timeout '{}', expected seconds", s))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("timeout must be a positive number of seconds, got '{}'", s));
    }
    Ok(Duration::from_secs_f64(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["numanal"]).unwrap();
        assert_eq!(cli.db, PathBuf::from("timings.db"));
        assert_eq!(cli.work_dir, PathBuf::from("."));
        assert_eq!(cli.plot_out, PathBuf::from("timings.svg"));
        assert_eq!(cli.timeout, None);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn explicit_flags() {
        let cli = Cli::try_parse_from([
            "numanal",
            "--db",
            "/tmp/t.db",
            "--work-dir",
            "bin",
            "--plot-out",
            "out.svg",
            "--timeout",
            "2.5",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.db, PathBuf::from("/tmp/t.db"));
        assert_eq!(cli.work_dir, PathBuf::from("bin"));
        assert_eq!(cli.plot_out, PathBuf::from("out.svg"));
        assert_eq!(cli.timeout, Some(Duration::from_millis(2500)));
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn single_verbose_is_info() {
        let cli = Cli::try_parse_from(["numanal", "-v"]).unwrap();
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn rejects_bad_timeouts() {
        assert!(Cli::try_parse_from(["numanal", "--timeout", "0"]).is_err());
        assert!(Cli::try_parse_from(["numanal", "--timeout", "-1"]).is_err());
        assert!(Cli::try_parse_from(["numanal", "--timeout", "soon"]).is_err());
        assert!(Cli::try_parse_from(["numanal", "--timeout", "inf"]).is_err());
    }
}
