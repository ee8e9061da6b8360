//! Interpretation of `hokipoki request --json` output

use crate::error::{AdapterError, AdapterResult};
use crate::types::{TaskResponse, ToolName};

const UNKNOWN_ERROR: &str = "Unknown error";
const UNKNOWN_TOOL: &str = "unknown AI";

/// Parse stdout into a successful [`TaskResponse`].
///
/// - not JSON at all: [`AdapterError::InvalidJson`] carrying the raw text
/// - JSON reporting failure, or JSON that is not a response object:
///   [`AdapterError::Remote`]
pub fn interpret_output(stdout: &str) -> AdapterResult<TaskResponse> {
    let value: serde_json::Value =
        serde_json::from_str(stdout).map_err(|_| AdapterError::invalid_json(stdout))?;

    if !value.is_object() {
        tracing::debug!("Response JSON is not an object: {}", value);
        return Err(AdapterError::remote(UNKNOWN_ERROR));
    }

    let response: TaskResponse = match serde_json::from_value(value) {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("Response JSON has unexpected shape: {}", e);
            return Err(AdapterError::remote(UNKNOWN_ERROR));
        }
    };

    if response.is_failure() {
        let message = response
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        return Err(AdapterError::Remote(message));
    }

    Ok(response)
}

/// Compose the success message.
///
/// Segments, in order: tool, task id, output, patch note, credits. Each
/// optional segment is omitted when its field is absent.
pub fn format_success(response: &TaskResponse, requested_tool: Option<ToolName>) -> String {
    let tool_used = response
        .tool
        .as_deref()
        .filter(|t| !t.is_empty())
        .or(requested_tool.as_ref().map(ToolName::as_str))
        .unwrap_or(UNKNOWN_TOOL);

    let mut message = format!("✅ Task completed by {}", tool_used);

    if let Some(task_id) = response.task_id.as_deref().filter(|id| !id.is_empty()) {
        message.push_str(&format!(" (Task ID: {})", task_id));
    }

    if let Some(output) = response.output.as_deref().filter(|o| !o.is_empty()) {
        message.push_str(&format!("\n\n{}", output));
    }

    if response.patch.as_deref().is_some_and(|p| !p.is_empty()) {
        message.push_str("\n\n📝 Changes have been applied to your repository.");
        message.push_str("\n   Run 'git status' to see the changes.");
    }

    if let Some(credits) = response.credits {
        message.push_str(&format!("\n\n💰 Credits used: {}", credits));
    }

    message
}
