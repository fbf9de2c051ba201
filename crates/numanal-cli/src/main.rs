//! `numanal` binary.
//!
//! Opens (or creates) the timings database, then hands the terminal to the
//! interactive menu until the user exits.

use std::io;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use numanal_cli::{Cli, Console, SvgPlotter, Workflow};
use numanal_runner::Runner;
use numanal_storage::SqliteStore;

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    process::exit(run(cli));
}

/// Runs one interactive session.
///
/// Returns exit code: 0 = normal exit, 1 = database could not be opened,
/// 3 = terminal I/O error.
fn run(cli: Cli) -> i32 {
    let existed = cli.db.is_file();
    let store = match SqliteStore::new(&cli.db) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "Error: failed to open database '{}': {}",
                cli.db.display(),
                e
            );
            return 1;
        }
    };

    if existed {
        println!("Using database {}", cli.db.display());
    } else {
        println!("Created database {}, set up tables", cli.db.display());
    }

    let mut runner = Runner::new(&cli.work_dir);
    if let Some(timeout) = cli.timeout {
        runner = runner.with_timeout(timeout);
    }
    println!("Work directory: {}", runner.work_dir().display());
    let plotter = SvgPlotter::new(&cli.plot_out);

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut workflow = Workflow::new(store, runner, plotter, console);

    info!(
        db = %cli.db.display(),
        work_dir = %workflow.runner().work_dir().display(),
        "session started"
    );
    match workflow.run() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("I/O error: {}", e);
            3
        }
    }
}
