//! Rendering of results and errors into user-facing text

mod classify;
mod messages;
mod response;

pub use classify::{FailureKind, classify_failure, classify_message};
pub use messages::{
    NOT_AUTHENTICATED_GUIDANCE, NOT_INSTALLED_GUIDANCE, generic_guidance, non_json_notice,
    progress_notice, remote_error, usage_message,
};
pub use response::{format_success, interpret_output};

use crate::descriptor::CommandDescriptor;
use crate::error::{AdapterError, ExecutionFailure};

/// Render any adapter error as the message returned to the host
pub fn render_error(err: &AdapterError) -> String {
    match err {
        AdapterError::Usage => usage_message(&CommandDescriptor::hokipoki()),
        AdapterError::InvalidJson { raw } => non_json_notice(raw),
        AdapterError::Remote(message) => remote_error(message),
        AdapterError::Execution(failure) => render_failure(failure),
    }
}

/// Pick the guidance message for an execution failure
pub fn render_failure(failure: &ExecutionFailure) -> String {
    match classify_failure(failure) {
        FailureKind::NotInstalled => NOT_INSTALLED_GUIDANCE.to_string(),
        FailureKind::NotAuthenticated => NOT_AUTHENTICATED_GUIDANCE.to_string(),
        FailureKind::Other => generic_guidance(&failure.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_remote_error() {
        assert_eq!(
            render_error(&AdapterError::remote("quota exceeded")),
            "❌ HokiPoki Error: quota exceeded"
        );
    }

    #[test]
    fn test_render_non_json() {
        let message = render_error(&AdapterError::invalid_json("hello"));
        assert_eq!(message, "⚠️  Received non-JSON response from HokiPoki:\n\nhello");
    }

    #[test]
    fn test_render_usage() {
        let message = render_error(&AdapterError::Usage);
        assert!(message.contains("Please provide a task description"));
    }

    #[test]
    fn test_render_401_is_auth_template() {
        let failure =
            ExecutionFailure::exited("hokipoki", Some(1), "hokipoki request", "", "HTTP 401");
        assert_eq!(
            render_error(&AdapterError::Execution(failure)),
            NOT_AUTHENTICATED_GUIDANCE
        );
    }

    #[test]
    fn test_render_generic_includes_failure() {
        let failure =
            ExecutionFailure::exited("hokipoki", Some(3), "hokipoki request", "", "disk full");
        let message = render_failure(&failure);
        assert!(message.starts_with("❌ Error executing HokiPoki: Failed to execute hokipoki:"));
        assert!(message.contains("disk full"));
        assert!(message.contains("hokipoki login"));
    }
}
