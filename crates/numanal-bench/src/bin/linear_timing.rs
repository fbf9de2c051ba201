//! Prints a synthetic O(n) timing.

use std::process::ExitCode;

fn main() -> ExitCode {
    numanal_bench::run("linear_timing", numanal_bench::linear)
}
