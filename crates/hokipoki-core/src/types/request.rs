//! Invocation options and the validated task request

use serde::{Deserialize, Serialize};

use super::tool::ToolName;
use crate::command::infer_tool;
use crate::error::{AdapterError, AdapterResult};

/// Structured options passed by the host alongside the loose argument tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandOptions {
    /// Explicit tool selection (`--tool`)
    pub tool: Option<ToolName>,
    /// Files to include (`--files`)
    pub files: Vec<String>,
    /// Directories to include (`--dir`)
    pub dir: Vec<String>,
    /// Include the entire repository (`--all`)
    pub all: bool,
    /// Route to a specific workspace (`--workspace`)
    pub workspace: Option<String>,
}

/// A validated request for one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    /// Task description, forwarded verbatim
    pub task: String,
    pub tool: Option<ToolName>,
    pub files: Vec<String>,
    pub dirs: Vec<String>,
    pub all: bool,
    pub workspace: Option<String>,
}

impl TaskRequest {
    /// Build a request from the raw argument tokens and options.
    ///
    /// The tokens are joined with single spaces. A task that is blank after
    /// trimming is rejected with [`AdapterError::Usage`].
    pub fn from_invocation(args: &[String], options: CommandOptions) -> AdapterResult<Self> {
        let task = args.join(" ");
        if task.trim().is_empty() {
            return Err(AdapterError::Usage);
        }

        Ok(Self {
            task,
            tool: options.tool,
            files: options.files,
            dirs: options.dir,
            all: options.all,
            workspace: options.workspace.filter(|w| !w.is_empty()),
        })
    }

    /// Explicit tool if one was given, else the tool named in the task text
    pub fn resolved_tool(&self) -> Option<ToolName> {
        self.tool.or_else(|| infer_tool(&self.task))
    }
}
