//! Tool inference from free-text task descriptions

use crate::types::ToolName;

/// Scan order; the first tool with a matching phrase wins
const INFERENCE_ORDER: [ToolName; 3] = [ToolName::Codex, ToolName::Gemini, ToolName::Claude];

/// Detect an explicit tool preference such as "use codex" or "with gemini".
///
/// Matching is case-insensitive substring search. Returns `None` when the
/// text names no tool, leaving the choice to the `hokipoki` CLI.
pub fn infer_tool(task: &str) -> Option<ToolName> {
    let lower = task.to_lowercase();

    INFERENCE_ORDER.into_iter().find(|tool| {
        let name = tool.as_str();
        lower.contains(&format!("use {}", name)) || lower.contains(&format!("with {}", name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_use_codex_any_case() {
        assert_eq!(infer_tool("Please USE CODEX for this"), Some(ToolName::Codex));
        assert_eq!(infer_tool("use codex"), Some(ToolName::Codex));
        assert_eq!(infer_tool("Optimize it, Use Codex."), Some(ToolName::Codex));
    }

    #[test]
    fn test_infer_with_phrases() {
        assert_eq!(infer_tool("refactor with gemini"), Some(ToolName::Gemini));
        assert_eq!(infer_tool("write docs with Claude"), Some(ToolName::Claude));
        assert_eq!(infer_tool("with codex please"), Some(ToolName::Codex));
    }

    #[test]
    fn test_infer_use_claude() {
        assert_eq!(infer_tool("use claude to review"), Some(ToolName::Claude));
    }

    #[test]
    fn test_infer_none_without_phrase() {
        assert_eq!(infer_tool("Fix the bug in authentication.ts"), None);
        assert_eq!(infer_tool("codex is a tool"), None);
        assert_eq!(infer_tool("gemini"), None);
        assert_eq!(infer_tool(""), None);
    }

    #[test]
    fn test_infer_precedence_follows_scan_order() {
        // codex is scanned before gemini, gemini before claude
        assert_eq!(
            infer_tool("use claude first, then with gemini, finally use codex"),
            Some(ToolName::Codex)
        );
        assert_eq!(infer_tool("use claude or with gemini"), Some(ToolName::Gemini));
    }

    #[test]
    fn test_infer_matches_inside_longer_words() {
        // plain substring search, as the phrase may be followed by anything
        assert_eq!(infer_tool("reuse codexes"), Some(ToolName::Codex));
    }
}
