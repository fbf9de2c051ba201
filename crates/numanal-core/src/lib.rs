pub mod error;
pub mod input;
pub mod policy;
pub mod program;

// Re-export commonly used types
pub use error::InputError;
pub use input::{parse_floats, parse_ints, parse_yes_no};
pub use policy::{is_duplicate, problem_size_from, time_is_valid};
pub use program::{Program, Timing};
