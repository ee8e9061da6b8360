//! Argument vector construction

use std::fmt;

use crate::types::{TaskRequest, ToolName};

/// Subcommand that submits a task
pub const REQUEST_SUBCOMMAND: &str = "request";

/// Subcommand that reports account status
pub const STATUS_SUBCOMMAND: &str = "status";

/// A program plus its discrete arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Create a command with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Position of a flag in the argument list
    pub fn position(&self, flag: &str) -> Option<usize> {
        self.args.iter().position(|a| a == flag)
    }

    /// Render as a POSIX shell command line, quoting where needed.
    ///
    /// Only used for logs and error messages; the process is never spawned
    /// through a shell.
    pub fn to_shell_string(&self) -> String {
        shell_words::join(std::iter::once(&self.program).chain(self.args.iter()))
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell_string())
    }
}

/// Build `<program> request ...` for a task.
///
/// `tool` is the already resolved tool (explicit or inferred). Machine
/// readable output and non-interactive mode are always requested.
pub fn request_command(program: &str, request: &TaskRequest, tool: Option<ToolName>) -> CommandLine {
    let mut cmd = CommandLine::new(program).arg(REQUEST_SUBCOMMAND);

    if let Some(tool) = tool {
        cmd = cmd.arg("--tool").arg(tool.as_str());
    }

    cmd = cmd.arg("--task").arg(request.task.as_str());

    if !request.files.is_empty() {
        cmd = cmd.arg("--files").args(request.files.iter().cloned());
    }

    if !request.dirs.is_empty() {
        cmd = cmd.arg("--dir").args(request.dirs.iter().cloned());
    }

    if request.all {
        cmd = cmd.arg("--all");
    }

    if let Some(workspace) = &request.workspace {
        cmd = cmd.arg("--workspace").arg(workspace.as_str());
    }

    cmd.arg("--json").arg("--no-interactive")
}

/// Build `<program> status --json`
pub fn status_command(program: &str) -> CommandLine {
    CommandLine::new(program).arg(STATUS_SUBCOMMAND).arg("--json")
}
