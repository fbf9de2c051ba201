//! Validation rules shared by every timing-entry flow.
//!
//! The store accepts any row; these checks keep interactive sessions from
//! recording a problem size twice for the same program, or recording a
//! value outside the data model.

use crate::program::Timing;

/// Returns true when `problem_size` already appears in `existing`.
pub fn is_duplicate(problem_size: u64, existing: &[Timing]) -> bool {
    existing.iter().any(|t| t.problem_size == problem_size)
}

/// Converts raw integer input into a problem size. Only positive values
/// qualify.
pub fn problem_size_from(value: i64) -> Option<u64> {
    u64::try_from(value).ok().filter(|&size| size > 0)
}

/// A timing must be a finite, non-negative number of seconds.
pub fn time_is_valid(time: f64) -> bool {
    time.is_finite() && time >= 0.0
}
