//! Sample benchmark executables for the `numanal` tool.
//!
//! Each binary takes a single problem size on its command line and prints
//! one timing, in seconds, on the first line of standard output.

use std::fmt::Display;
use std::process::ExitCode;

/// Exit status for a missing or unparsable problem size.
pub const USAGE_EXIT: u8 = 2;

/// Parses the problem size from the arguments following the program name.
pub fn problem_size<I>(mut args: I) -> Result<u64, String>
where
    I: Iterator,
    I::Item: Display,
{
    let arg = args.next().ok_or("missing problem size")?.to_string();
    if args.next().is_some() {
        return Err("expected a single problem size".to_string());
    }
    match arg.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("invalid problem size '{}'", arg)),
    }
}

/// L2 norm of the vector `0, 1, .., n - 1`.
pub fn l2_norm(n: u64) -> f64 {
    let u: Vec<f64> = (0..n).map(|i| i as f64).collect();
    u.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Synthetic O(n) curve.
pub fn linear(n: u64) -> f64 {
    n as f64
}

/// Synthetic O(n log n) curve.
pub fn n_log_n(n: u64) -> f64 {
    let n = n as f64;
    n * n.ln()
}

/// Shared `main` body: parse the size, print the timing `timing` returns.
pub fn run(name: &str, timing: impl FnOnce(u64) -> f64) -> ExitCode {
    match problem_size(std::env::args().skip(1)) {
        Ok(n) => {
            println!("{:.6}", timing(n));
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("usage: {} <problem-size>", name);
            ExitCode::from(USAGE_EXIT)
        }
    }
}
