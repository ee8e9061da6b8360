//! JSON shapes emitted by the `hokipoki` CLI in `--json` mode
//!
//! Decoding is lenient: display fields accept strings, numbers or booleans,
//! and a field of an unexpected type is dropped instead of failing the whole
//! document.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Answer of `hokipoki request --json`.
///
/// Every field is optional on the wire; a missing `success` counts as failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskResponse {
    #[serde(deserialize_with = "truthy")]
    pub success: bool,
    #[serde(deserialize_with = "display_text")]
    pub patch: Option<String>,
    #[serde(deserialize_with = "display_text")]
    pub output: Option<String>,
    #[serde(deserialize_with = "display_text")]
    pub error: Option<String>,
    #[serde(deserialize_with = "display_text")]
    pub task_id: Option<String>,
    #[serde(deserialize_with = "display_text")]
    pub tool: Option<String>,
    #[serde(deserialize_with = "credit_amount")]
    pub credits: Option<f64>,
}

impl TaskResponse {
    /// Whether the CLI reported a failure
    pub fn is_failure(&self) -> bool {
        !self.success || self.error.as_deref().is_some_and(|e| !e.is_empty())
    }
}

/// Answer of `hokipoki status --json`, reduced to what completion needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceStatus {
    #[serde(default, deserialize_with = "workspace_entries")]
    pub workspaces: Option<Vec<WorkspaceEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceEntry {
    #[serde(deserialize_with = "display_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "display_text")]
    pub id: Option<String>,
}

impl WorkspaceEntry {
    /// Name shown to the user, falling back to the identifier
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.id.as_deref().filter(|id| !id.is_empty()))
    }
}

impl WorkspaceStatus {
    /// Display names of all workspaces that have a name or id
    pub fn workspace_names(&self) -> Vec<String> {
        self.workspaces
            .iter()
            .flatten()
            .filter_map(|w| w.display_name().map(str::to_string))
            .collect()
    }
}

/// `false`, `null`, `0` and `""` are false; any other value is true
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Strings pass through, numbers and booleans are printed, anything else is absent
fn display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// A number, or a string holding one
fn credit_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Object entries of a `workspaces` array; other entries are skipped
fn workspace_entries<'de, D>(deserializer: D) -> Result<Option<Vec<WorkspaceEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    Ok(Some(
        items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
    ))
}
