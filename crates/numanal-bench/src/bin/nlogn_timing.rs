//! Prints a synthetic O(n log n) timing.

use std::process::ExitCode;

fn main() -> ExitCode {
    numanal_bench::run("nlogn_timing", numanal_bench::n_log_n)
}
