//! Classification of execution failures into guidance categories

use std::io;

use serde::Deserialize;

use crate::error::{ExecutionFailure, FailureCause};

/// Exit status shells use for "command not found"
const EXIT_COMMAND_NOT_FOUND: i32 = 127;

/// Guidance category for a failed execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The CLI binary is missing
    NotInstalled,
    /// The CLI rejected the credentials
    NotAuthenticated,
    /// Anything else
    Other,
}

/// Machine-readable error marker a failing CLI may print in `--json` mode
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorKindMarker {
    error_kind: Option<String>,
}

impl FailureKind {
    fn from_error_kind(kind: &str) -> Option<Self> {
        match kind {
            "not_installed" => Some(Self::NotInstalled),
            "not_authenticated" | "unauthenticated" => Some(Self::NotAuthenticated),
            _ => None,
        }
    }
}

/// Pick exactly one guidance category for a failure.
///
/// Structured signals (spawn error kind, exit code, `errorKind` in stdout)
/// are consulted first; message matching is the fallback for CLIs that only
/// report problems as text.
pub fn classify_failure(failure: &ExecutionFailure) -> FailureKind {
    match failure.cause {
        FailureCause::Launch(io::ErrorKind::NotFound) => return FailureKind::NotInstalled,
        FailureCause::ExitStatus(Some(EXIT_COMMAND_NOT_FOUND)) => return FailureKind::NotInstalled,
        FailureCause::WorkingDirectory(_) => return FailureKind::Other,
        _ => {}
    }

    if let Some(kind) = structured_kind(&failure.stdout) {
        return kind;
    }

    classify_message(&failure.program, &failure.to_string())
}

/// Legacy text matching, checked in order
pub fn classify_message(program: &str, message: &str) -> FailureKind {
    if message.contains(&format!("{}: command not found", program)) {
        FailureKind::NotInstalled
    } else if message.contains("Not authenticated") || message.contains("401") {
        FailureKind::NotAuthenticated
    } else {
        FailureKind::Other
    }
}

fn structured_kind(stdout: &str) -> Option<FailureKind> {
    let marker: ErrorKindMarker = serde_json::from_str(stdout.trim()).ok()?;
    marker
        .error_kind
        .as_deref()
        .and_then(FailureKind::from_error_kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn exited(code: i32, stdout: &str, stderr: &str) -> ExecutionFailure {
        ExecutionFailure::exited("hokipoki", Some(code), "hokipoki request", stdout, stderr)
    }

    #[test]
    fn test_spawn_not_found_is_not_installed() {
        let err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let failure = ExecutionFailure::launch("hokipoki", &err);
        assert_eq!(classify_failure(&failure), FailureKind::NotInstalled);
    }

    #[test]
    fn test_spawn_permission_denied_is_other() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let failure = ExecutionFailure::launch("hokipoki", &err);
        assert_eq!(classify_failure(&failure), FailureKind::Other);
    }

    #[test]
    fn test_exit_127_is_not_installed() {
        assert_eq!(classify_failure(&exited(127, "", "")), FailureKind::NotInstalled);
    }

    #[test]
    fn test_structured_error_kind_wins_over_text() {
        let failure = exited(1, r#"{"success":false,"errorKind":"not_authenticated"}"#, "boom");
        assert_eq!(classify_failure(&failure), FailureKind::NotAuthenticated);

        let failure = exited(1, r#"{"errorKind":"unauthenticated"}"#, "");
        assert_eq!(classify_failure(&failure), FailureKind::NotAuthenticated);
    }

    #[test]
    fn test_unknown_error_kind_falls_back_to_text() {
        let failure = exited(1, r#"{"errorKind":"quota"}"#, "HTTP 401");
        assert_eq!(classify_failure(&failure), FailureKind::NotAuthenticated);
    }

    #[test]
    fn test_text_401_and_not_authenticated() {
        assert_eq!(classify_failure(&exited(1, "", "Request failed: 401")), FailureKind::NotAuthenticated);
        assert_eq!(
            classify_failure(&exited(1, "", "Error: Not authenticated. Run login.")),
            FailureKind::NotAuthenticated
        );
    }

    #[test]
    fn test_text_command_not_found() {
        assert_eq!(
            classify_message("hokipoki", "/bin/sh: hokipoki: command not found"),
            FailureKind::NotInstalled
        );
        // another binary missing is not our CLI missing
        assert_eq!(
            classify_message("hokipoki", "node: command not found"),
            FailureKind::Other
        );
    }

    #[test]
    fn test_not_found_checked_before_auth() {
        assert_eq!(
            classify_message("hokipoki", "hokipoki: command not found (401)"),
            FailureKind::NotInstalled
        );
    }

    #[test]
    fn test_missing_working_dir_is_other() {
        let failure =
            ExecutionFailure::missing_working_dir("hokipoki", std::path::Path::new("/tmp/401"));
        assert_eq!(classify_failure(&failure), FailureKind::Other);
    }

    #[test]
    fn test_timeout_is_other() {
        let failure =
            ExecutionFailure::timed_out("hokipoki", Duration::from_secs(5), "hokipoki request");
        assert_eq!(classify_failure(&failure), FailureKind::Other);
    }
}
