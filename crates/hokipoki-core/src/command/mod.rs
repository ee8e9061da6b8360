//! Command construction for the external `hokipoki` CLI
//!
//! Commands are built as argument vectors and spawned without a shell, so
//! task text reaches the CLI byte for byte.

mod builder;
mod inference;

pub use builder::{CommandLine, REQUEST_SUBCOMMAND, STATUS_SUBCOMMAND, request_command, status_command};
pub use inference::infer_tool;
