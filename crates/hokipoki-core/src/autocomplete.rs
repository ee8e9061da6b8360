//! Autocomplete suggestions for `--tool` and `--workspace`
//!
//! Lookups never fail from the caller's point of view: problems are
//! reported to the diagnostic sink and an empty list is returned.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::command::status_command;
use crate::diagnostics::DiagnosticSink;
use crate::process::ProcessRunner;
use crate::types::{ToolName, WorkspaceStatus};

/// Options that have a suggestion source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionOption {
    Tool,
    Workspace,
}

impl fmt::Display for CompletionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tool => f.write_str("tool"),
            Self::Workspace => f.write_str("workspace"),
        }
    }
}

/// Returned when an option has no suggestion source
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No completions for option '{0}'")]
pub struct ParseCompletionError(pub String);

impl FromStr for CompletionOption {
    type Err = ParseCompletionError;

    /// Accepts the option name with or without its leading `--`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches("--") {
            "tool" => Ok(Self::Tool),
            "workspace" => Ok(Self::Workspace),
            other => Err(ParseCompletionError(other.to_string())),
        }
    }
}

/// Static list of tool names
pub fn tool_suggestions() -> Vec<String> {
    ToolName::ALL.iter().map(|t| t.as_str().to_string()).collect()
}

/// Workspace names reported by `<program> status --json`
pub async fn workspace_suggestions(
    runner: &dyn ProcessRunner,
    program: &str,
    sink: &dyn DiagnosticSink,
) -> Vec<String> {
    let command = status_command(program);

    let output = match runner.run(&command).await.and_then(|o| o.into_result(&command)) {
        Ok(output) => output,
        Err(e) => {
            sink.warn(&format!("Failed to fetch workspaces for autocomplete: {}", e));
            return Vec::new();
        }
    };

    match serde_json::from_str::<WorkspaceStatus>(&output.stdout) {
        Ok(status) => status.workspace_names(),
        Err(e) => {
            sink.warn(&format!(
                "Failed to fetch workspaces for autocomplete: invalid status JSON: {}",
                e
            ));
            Vec::new()
        }
    }
}
