//! Process runner backed by `tokio::process`

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

use super::runner::{ProcessOutput, ProcessRunner};
use crate::command::CommandLine;
use crate::config::AdapterConfig;
use crate::error::ExecutionFailure;

/// Spawns commands directly (no shell) with stdin closed.
///
/// When a timeout is set the child is killed once it elapses.
#[derive(Debug, Clone, Default)]
pub struct TokioProcessRunner {
    timeout: Option<Duration>,
    working_dir: Option<PathBuf>,
}

impl TokioProcessRunner {
    /// Runner without timeout, inheriting the current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner configured from an [`AdapterConfig`]
    pub fn from_config(config: &AdapterConfig) -> Self {
        Self {
            timeout: config.timeout(),
            working_dir: config.working_dir.clone(),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    #[instrument(skip(self, command), fields(program = %command.program()))]
    async fn run(&self, command: &CommandLine) -> Result<ProcessOutput, ExecutionFailure> {
        let rendered = command.to_shell_string();
        debug!("Executing command: {}", rendered);

        let mut cmd = Command::new(command.program());
        cmd.args(command.arguments())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &self.working_dir {
            // A missing cwd makes spawn fail with NotFound, same as a missing binary
            if !dir.is_dir() {
                debug!("Working directory is not a directory: {}", dir.display());
                return Err(ExecutionFailure::missing_working_dir(command.program(), dir));
            }
            cmd.current_dir(dir);
        }

        let output = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, cmd.output()).await {
                Ok(result) => result,
                Err(_) => {
                    debug!("Command timed out after {:?}", limit);
                    return Err(ExecutionFailure::timed_out(
                        command.program(),
                        limit,
                        &rendered,
                    ));
                }
            },
            None => cmd.output().await,
        }
        .map_err(|e| ExecutionFailure::launch(command.program(), &e))?;

        debug!("Command exited with {:?}", output.status.code());

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
