//! Times the L2 norm of `0..n` and prints the elapsed seconds.

use std::hint::black_box;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    numanal_bench::run("l2vecnorm", |n| {
        let start = Instant::now();
        black_box(numanal_bench::l2_norm(black_box(n)));
        start.elapsed().as_secs_f64()
    })
}
