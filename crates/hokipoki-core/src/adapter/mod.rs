//! The `/hokipoki` command handler
//!
//! [`CommandAdapter::execute`] is the single recovery boundary: every error
//! raised while handling an invocation is rendered into the returned string.


use std::sync::Arc;

use tracing::instrument;

use crate::autocomplete::{self, CompletionOption};
use crate::command::{CommandLine, request_command};
use crate::config::AdapterConfig;
use crate::descriptor::CommandDescriptor;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::AdapterResult;
use crate::process::{ProcessOutput, ProcessRunner, TokioProcessRunner};
use crate::render::{format_success, interpret_output, progress_notice, render_error};
use crate::types::{CommandOptions, TaskRequest};

/// Forwards tasks to the `hokipoki` CLI and renders its answers
pub struct CommandAdapter<R = TokioProcessRunner> {
    runner: R,
    program: String,
    sink: Arc<dyn DiagnosticSink>,
}

impl CommandAdapter<TokioProcessRunner> {
    /// Adapter that spawns real processes and logs through `tracing`
    pub fn from_config(config: AdapterConfig) -> Self {
        let runner = TokioProcessRunner::from_config(&config);
        Self::new(runner, config.program)
    }
}

impl<R: ProcessRunner> CommandAdapter<R> {
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Send diagnostics somewhere other than `tracing`
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::hokipoki()
    }

    /// Handle one invocation and return the message for the user
    pub async fn execute(&self, args: &[String], options: CommandOptions) -> String {
        match self.try_execute(args, options).await {
            Ok(message) => message,
            Err(err) => {
                tracing::debug!("Invocation failed: {}", err);
                render_error(&err)
            }
        }
    }

    /// Handle one invocation, returning the success message or the error
    #[instrument(skip_all, fields(arg_count = args.len()))]
    pub async fn try_execute(
        &self,
        args: &[String],
        options: CommandOptions,
    ) -> AdapterResult<String> {
        let request = TaskRequest::from_invocation(args, options)?;
        let tool = request.resolved_tool();

        self.sink
            .info(&progress_notice(tool.as_ref().map(|t| t.as_str())));

        let command = request_command(&self.program, &request, tool);
        let output = self.run_checked(&command).await?;
        let response = interpret_output(&output.stdout)?;

        Ok(format_success(&response, tool))
    }

    /// Suggestions for an option value
    pub async fn complete(&self, option: CompletionOption) -> Vec<String> {
        match option {
            CompletionOption::Tool => autocomplete::tool_suggestions(),
            CompletionOption::Workspace => {
                autocomplete::workspace_suggestions(&self.runner, &self.program, self.sink.as_ref())
                    .await
            }
        }
    }

    /// Run a command, failing on non-zero exit; stderr of a successful run is
    /// only logged
    async fn run_checked(&self, command: &CommandLine) -> AdapterResult<ProcessOutput> {
        let output = self.runner.run(command).await?.into_result(command)?;

        let stderr = output.stderr.trim();
        if !stderr.is_empty() {
            self.sink.warn(&format!("stderr: {}", stderr));
        }

        Ok(output)
    }
}
