//! CLI argument definitions using clap
//!
//! - hokipoki-plugin run "task"                 # Forward a task
//! - hokipoki-plugin run --tool codex Fix it    # Forward with explicit tool
//! - hokipoki-plugin complete workspace         # List completion values
//! - hokipoki-plugin describe                   # Print command metadata

use clap::{Args, Parser, Subcommand};
use hokipoki_core::{CommandOptions, CompletionOption, ToolName};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hokipoki-plugin")]
#[command(about = "Request help from remote AI via HokiPoki P2P marketplace")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Name or path of the hokipoki CLI binary
    #[arg(long, global = true)]
    pub program: Option<String>,

    /// Subprocess timeout in seconds (0 disables)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Working directory for the hokipoki CLI
    #[arg(long, global = true)]
    pub working_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a task to the HokiPoki network
    Run(RunArgs),

    /// Print completion suggestions for an option, one per line
    Complete {
        #[arg(value_name = "tool|workspace")]
        option: CompletionOption,
    },

    /// Print the command descriptor as JSON
    Describe,
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Specify AI tool to use
    #[arg(long, value_name = "claude|codex|gemini")]
    pub tool: Option<ToolName>,

    /// Include specific files
    #[arg(long, num_args = 1..)]
    pub files: Vec<String>,

    /// Include directories
    #[arg(long, num_args = 1..)]
    pub dir: Vec<String>,

    /// Include entire repository
    #[arg(long)]
    pub all: bool,

    /// Route to specific workspace
    #[arg(long)]
    pub workspace: Option<String>,

    /// Task description
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub task: Vec<String>,
}

impl RunArgs {
    /// Split into the loose task tokens and the structured options
    pub fn into_invocation(self) -> (Vec<String>, CommandOptions) {
        let options = CommandOptions {
            tool: self.tool,
            files: self.files,
            dir: self.dir,
            all: self.all,
            workspace: self.workspace,
        };
        (self.task, options)
    }
}
