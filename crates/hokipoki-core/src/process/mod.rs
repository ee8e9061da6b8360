//! Subprocess execution
//!
//! [`ProcessRunner`] is the seam between the adapter and the operating
//! system; tests swap in a mock, production uses [`TokioProcessRunner`].

mod runner;
mod tokio_runner;

pub use runner::{ProcessOutput, ProcessRunner};
pub use tokio_runner::TokioProcessRunner;
