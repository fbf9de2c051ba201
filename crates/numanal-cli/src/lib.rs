//! Interactive front end for recording, generating and plotting benchmark
//! timings.
//!
//! The [`workflow::Workflow`] drives a numbered text menu over a
//! [`numanal_storage::TimingStore`], a [`numanal_runner::Measure`]
//! implementation and a [`plot::PlotSink`]. All three are injected, so the
//! whole menu can be scripted in tests.

pub mod config;
pub mod console;
pub mod plot;
pub mod presenter;
pub mod workflow;

pub use config::Cli;
pub use console::Console;
pub use plot::{Chart, PlotError, PlotSink, Series, SvgPlotter};
pub use workflow::{MenuAction, Workflow, WorkflowError};
