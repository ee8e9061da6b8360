//! Process runner abstraction

use async_trait::async_trait;

use crate::command::CommandLine;
use crate::error::ExecutionFailure;

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    /// A process that exited with status 0
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A process that exited with the given status
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Attach stderr output
    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }

    /// Attach stdout output
    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Turn a non-zero exit into an [`ExecutionFailure`]
    pub fn into_result(self, command: &CommandLine) -> Result<ProcessOutput, ExecutionFailure> {
        if self.is_success() {
            return Ok(self);
        }
        Err(ExecutionFailure::exited(
            command.program(),
            self.exit_code,
            &command.to_shell_string(),
            self.stdout,
            &self.stderr,
        ))
    }
}

/// Runs a command to completion and captures its output.
///
/// Implementations return `Err` only when the process could not be run to
/// completion (spawn failure, timeout). A non-zero exit is reported through
/// [`ProcessOutput::exit_code`].
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, command: &CommandLine) -> Result<ProcessOutput, ExecutionFailure>;
}
