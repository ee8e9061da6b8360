//! HokiPoki plugin command core
//!
//! This crate implements the `/hokipoki` plugin command: it forwards a
//! natural-language task to the external `hokipoki` CLI (the HokiPoki AI
//! marketplace client) and renders the CLI's JSON answer as text.
//!
//! # Flow
//!
//! 1. Join the loose argument tokens into a task description and validate it
//! 2. Resolve the target tool (explicit option, else inferred from the text)
//! 3. Build an argument vector and run `hokipoki request ... --json --no-interactive`
//! 4. Interpret stdout and render a success, error or guidance message
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use hokipoki_core::{AdapterConfig, CommandAdapter, CommandOptions};
//!
//! let adapter = CommandAdapter::from_config(AdapterConfig::default());
//! let args = vec!["Fix the bug in auth.ts, use codex".to_string()];
//! let message = adapter.execute(&args, CommandOptions::default()).await;
//! println!("{}", message);
//! ```

pub mod adapter;
pub mod autocomplete;
pub mod command;
pub mod config;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod process;
pub mod render;
pub mod types;

pub use adapter::CommandAdapter;
pub use autocomplete::{CompletionOption, ParseCompletionError};
pub use command::{CommandLine, infer_tool};
pub use config::{AdapterConfig, ConfigError, ConfigLoader};
pub use descriptor::{CommandDescriptor, OptionSpec};
pub use diagnostics::{Diagnostic, DiagnosticLevel, DiagnosticSink, MemorySink, TracingSink};
pub use error::{AdapterError, AdapterResult, ExecutionFailure, FailureCause};
pub use process::{ProcessOutput, ProcessRunner, TokioProcessRunner};
pub use types::{
    CommandOptions, ParseToolError, TaskRequest, TaskResponse, ToolName, WorkspaceEntry,
    WorkspaceStatus,
};
