//! HokiPoki plugin host
//!
//! Runs the `/hokipoki` command outside of an editor plugin host. The
//! rendered message goes to stdout; logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! hokipoki-plugin run Fix the bug in authentication.ts
//! hokipoki-plugin run --tool codex Optimize this algorithm
//! hokipoki-plugin run --files src/main.ts -- Refactor this file
//! hokipoki-plugin complete workspace
//! hokipoki-plugin describe
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `--verbose`) to see the spawned commands.

mod args;
mod router;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    router::route(cli).await
}
