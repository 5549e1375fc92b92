//! Command dispatch logic.
//!
//! Responsibilities:
//! - Load the configuration store once from the parsed arguments.
//! - Route the subcommand to its handler.
//!
//! Invariants:
//! - The delimiter is applied before any lookup runs.

use anyhow::{Context, Result};
use confkit_config::ConfigStore;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Load the store described by `cli` and run its subcommand.
pub(crate) fn run_command(cli: Cli) -> Result<ExitCode> {
    let mut store = ConfigStore::new(&cli.file, cli.env.as_deref())
        .with_context(|| format!("Failed to load {}", cli.file.display()))?;
    store
        .set_delimiter(&cli.delimiter)
        .context("Failed to apply delimiter")?;

    match cli.command {
        Commands::Get { key, default, raw } => {
            commands::get::run(&store, &key, default.as_deref(), raw)
        }
        Commands::Exists { key } => commands::exists::run(&store, &key),
        Commands::Show => commands::show::run(&store),
    }
}
