//! Runs external benchmark executables and harvests their timings.
//!
//! A benchmark is invoked as `<command_line_prefix> <problem_size>` from the
//! work directory and must print one floating-point number of seconds on the
//! first line of standard output. Anything after that line is ignored.
//!
//! The [`Measure`] trait is the seam the interactive layer depends on;
//! [`Runner`] is the process-spawning implementation.

pub mod error;
pub mod runner;

pub use error::RunnerError;
pub use runner::{parse_timing, Measure, Runner};
