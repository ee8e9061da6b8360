//! Error types for the HokiPoki adapter

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Result type alias for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Errors produced while handling one `/hokipoki` invocation.
///
/// None of these escape [`crate::CommandAdapter::execute`]; each one is
/// rendered into a user-facing message by [`crate::render::render_error`].
#[derive(Error, Debug, Clone)]
pub enum AdapterError {
    /// The task description was empty or whitespace only
    #[error("Usage error: task description is empty")]
    Usage,

    /// The external CLI printed something that is not JSON
    #[error("Non-JSON response from hokipoki")]
    InvalidJson { raw: String },

    /// The external CLI reported a failure in its JSON answer
    #[error("HokiPoki error: {0}")]
    Remote(String),

    /// The external CLI could not be launched, failed, or timed out
    #[error(transparent)]
    Execution(#[from] ExecutionFailure),
}

impl AdapterError {
    /// Create a new remote error
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    /// Create a new invalid JSON error
    pub fn invalid_json(raw: impl Into<String>) -> Self {
        Self::InvalidJson { raw: raw.into() }
    }
}

/// Why the subprocess did not complete successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureCause {
    /// The process could not be spawned
    Launch(io::ErrorKind),
    /// The process exited with a non-zero status (`None` when killed by a signal)
    ExitStatus(Option<i32>),
    /// The process was killed after exceeding the configured timeout
    TimedOut(Duration),
    /// The configured working directory is not a directory; nothing was spawned
    WorkingDirectory(PathBuf),
}

/// An execution failure of the external CLI.
///
/// Keeps the structured cause next to the human-readable detail so the
/// failure can be classified without string matching when possible.
#[derive(Error, Debug, Clone)]
#[error("Failed to execute {program}: {detail}")]
pub struct ExecutionFailure {
    pub program: String,
    pub cause: FailureCause,
    pub detail: String,
    /// Whatever the process wrote to stdout before failing
    pub stdout: String,
}

impl ExecutionFailure {
    /// The process could not be started
    pub fn launch(program: impl Into<String>, err: &io::Error) -> Self {
        let program = program.into();
        let detail = if err.kind() == io::ErrorKind::NotFound {
            // Same wording a shell uses, so legacy matching keeps working
            format!("{}: command not found", program)
        } else {
            format!("{}: {}", program, err)
        };
        Self {
            program,
            cause: FailureCause::Launch(err.kind()),
            detail,
            stdout: String::new(),
        }
    }

    /// The process exited unsuccessfully
    pub fn exited(
        program: impl Into<String>,
        code: Option<i32>,
        command: &str,
        stdout: impl Into<String>,
        stderr: &str,
    ) -> Self {
        let mut detail = match code {
            Some(code) => format!("Command failed with exit code {}: {}", code, command),
            None => format!("Command terminated by signal: {}", command),
        };
        let stderr = stderr.trim();
        if !stderr.is_empty() {
            detail.push('\n');
            detail.push_str(stderr);
        }
        Self {
            program: program.into(),
            cause: FailureCause::ExitStatus(code),
            detail,
            stdout: stdout.into(),
        }
    }

    /// The process exceeded its time budget
    pub fn timed_out(program: impl Into<String>, timeout: Duration, command: &str) -> Self {
        Self {
            program: program.into(),
            cause: FailureCause::TimedOut(timeout),
            detail: format!(
                "Command timed out after {} seconds: {}",
                timeout.as_secs(),
                command
            ),
            stdout: String::new(),
        }
    }
}

impl ExecutionFailure {
    /// The working directory is missing, so the process was never started
    pub fn missing_working_dir(program: impl Into<String>, dir: &Path) -> Self {
        Self {
            program: program.into(),
            cause: FailureCause::WorkingDirectory(dir.to_path_buf()),
            detail: format!("working directory does not exist: {}", dir.display()),
            stdout: String::new(),
        }
    }
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Launch(kind) => write!(f, "launch failed ({})", kind),
            Self::ExitStatus(Some(code)) => write!(f, "exit code {}", code),
            Self::ExitStatus(None) => write!(f, "terminated by signal"),
            Self::TimedOut(timeout) => write!(f, "timed out after {}s", timeout.as_secs()),
            Self::WorkingDirectory(dir) => write!(f, "bad working directory ({})", dir.display()),
        }
    }
}
