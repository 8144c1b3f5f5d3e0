//! Command dispatch logic for routeplan

use std::time::Instant;

use crate::cli::Cli;
use routeplan_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::LoadedNetwork;
use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = std::env::current_dir()?;

    debug!(elapsed = ?start.elapsed(), "resolve_cwd");

    let ctx = CommandContext::new(cli, &cwd, start);

    // Execute command
    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
