//! Known AI tools the marketplace can route work to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An AI backend selectable with `--tool`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolName {
    Claude,
    Codex,
    Gemini,
}

impl ToolName {
    /// All tools, in the order they are offered for completion
    pub const ALL: [ToolName; 3] = [ToolName::Claude, ToolName::Codex, ToolName::Gemini];

    /// Lowercase name as understood by the `hokipoki` CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Codex => "codex",
            Self::Gemini => "gemini",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known tool
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tool '{0}', expected one of: claude, codex, gemini")]
pub struct ParseToolError(pub String);

impl FromStr for ToolName {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "claude" => Ok(Self::Claude),
            "codex" => Ok(Self::Codex),
            "gemini" => Ok(Self::Gemini),
            _ => Err(ParseToolError(s.to_string())),
        }
    }
}
