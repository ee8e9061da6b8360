//! Command routing
//!
//! Resolves configuration, builds the adapter, and dispatches subcommands.

use anyhow::{Context, Result};
use hokipoki_core::config::ConfigOverrides;
use hokipoki_core::{AdapterConfig, CommandAdapter, ConfigLoader};

use crate::args::{Cli, Commands};

/// Route CLI commands to their handlers
pub async fn route(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let adapter = CommandAdapter::from_config(config);

    match cli.command {
        Commands::Run(run) => {
            let (task, options) = run.into_invocation();
            let message = adapter.execute(&task, options).await;
            println!("{}", message);
        }
        Commands::Complete { option } => {
            for suggestion in adapter.complete(option).await {
                println!("{}", suggestion);
            }
        }
        Commands::Describe => {
            let json = serde_json::to_string_pretty(&adapter.descriptor())
                .context("Failed to serialize command descriptor")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Defaults, then file, then environment, then flags
fn resolve_config(cli: &Cli) -> Result<AdapterConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }

    let env_overrides =
        ConfigOverrides::from_env().context("Invalid HOKIPOKI_* environment variable")?;
    let flag_overrides = ConfigOverrides {
        program: cli.program.clone(),
        timeout_secs: cli.timeout,
        working_dir: cli.working_dir.clone(),
    };

    loader
        .with_overrides(env_overrides)
        .with_overrides(flag_overrides)
        .load()
        .context("Failed to load configuration")
}
