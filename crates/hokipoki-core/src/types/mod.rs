//! Request and response types for the `/hokipoki` command
//!
//! Everything here lives for a single invocation; nothing is persisted.

mod request;
mod response;
mod tool;


pub use request::{CommandOptions, TaskRequest};
pub use response::{TaskResponse, WorkspaceEntry, WorkspaceStatus};
pub use tool::{ParseToolError, ToolName};
