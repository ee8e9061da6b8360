//! Fixed user-facing message templates

use crate::descriptor::CommandDescriptor;

/// Guidance shown when the `hokipoki` CLI is not installed
pub const NOT_INSTALLED_GUIDANCE: &str = "\
❌ HokiPoki CLI not found.

Please install HokiPoki CLI first:
  npm install -g @next-halo/hokipoki-cli

Then authenticate:
  hokipoki login

Visit https://hoki-poki.ai for more information.";

/// Guidance shown when the user is not logged in
pub const NOT_AUTHENTICATED_GUIDANCE: &str = "\
❌ Not authenticated with HokiPoki.

Please run:
  hokipoki login

Visit https://hoki-poki.ai to create an account if you don't have one.";

/// Generic troubleshooting for any other execution failure
pub fn generic_guidance(detail: &str) -> String {
    format!(
        "❌ Error executing HokiPoki: {}

If this persists, try:
  1. Check 'hokipoki status' to verify your account
  2. Run 'hokipoki login' to re-authenticate
  3. Visit https://hoki-poki.ai/docs for troubleshooting",
        detail
    )
}

/// Usage message for an empty task description
pub fn usage_message(descriptor: &CommandDescriptor) -> String {
    let name = descriptor.name;
    let mut message = format!(
        "❌ Error: Please provide a task description.

Usage: /{name} [options] <task description>

Examples:
  /{name} Fix the bug in authentication.ts
  /{name} --tool codex Optimize this algorithm
  /{name} --files src/main.ts Refactor this file

Options:"
    );

    for option in &descriptor.options {
        message.push_str(&format!("\n  {:<30}{}", option.usage(), option.help));
    }
    message
}

/// Notice for output that is not JSON; the raw text is shown as is
pub fn non_json_notice(raw: &str) -> String {
    format!("⚠️  Received non-JSON response from HokiPoki:\n\n{}", raw)
}

/// Error reported by the CLI in its JSON answer
pub fn remote_error(message: &str) -> String {
    format!("❌ HokiPoki Error: {}", message)
}

/// Progress notice emitted before the task is sent
pub fn progress_notice(tool: Option<&str>) -> String {
    match tool {
        Some(tool) => format!("🚀 Sending task to HokiPoki network ({})...", tool),
        None => "🚀 Sending task to HokiPoki network...".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_message_lists_options_aligned() {
        let usage = usage_message(&CommandDescriptor::hokipoki());

        assert!(usage.starts_with("❌ Error: Please provide a task description."));
        assert!(usage.contains("Usage: /hokipoki [options] <task description>"));
        assert!(usage.contains("  /hokipoki --tool codex Optimize this algorithm"));
        assert!(usage.contains("\n  --tool <claude|codex|gemini>  Specify AI tool to use"));
        assert!(usage.contains("\n  --files <files...>            Include specific files"));
        assert!(usage.contains("\n  --dir <directories...>        Include directories"));
        assert!(usage.contains("\n  --all                         Include entire repository"));
        assert!(usage.ends_with("\n  --workspace <name>            Route to specific workspace"));
    }

    #[test]
    fn test_progress_notice() {
        assert_eq!(
            progress_notice(Some("codex")),
            "🚀 Sending task to HokiPoki network (codex)..."
        );
        assert_eq!(progress_notice(None), "🚀 Sending task to HokiPoki network...");
    }

    #[test]
    fn test_generic_guidance_echoes_detail() {
        let message = generic_guidance("Failed to execute hokipoki: boom");
        assert!(message.starts_with("❌ Error executing HokiPoki: Failed to execute hokipoki: boom"));
        assert!(message.contains("hokipoki status"));
    }
}
