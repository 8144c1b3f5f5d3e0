//! Command implementations for all routeplan commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use routeplan_core::error::Result;
use tracing::debug;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let loaded = ctx.load_network()?;
        let cli = ctx.cli;

        let result = match self {
            Commands::Roads => commands::roads::execute(cli, &loaded),
            Commands::Path {
                start,
                goal,
                strategy,
                visit_all,
            } => {
                let strategy = strategy.unwrap_or(loaded.config.query.strategy);
                commands::path::execute(
                    cli,
                    &loaded,
                    start,
                    goal.as_deref(),
                    strategy,
                    *visit_all,
                )
            }
            Commands::Sweep { start, strategy } => {
                let strategy = strategy.unwrap_or(loaded.config.query.strategy);
                commands::sweep::execute(cli, &loaded, start, strategy)
            }
            Commands::Shortest { start, goal } => {
                commands::shortest::execute(cli, &loaded, start, goal)
            }
            Commands::Alternatives { start, goal, k } => {
                let k = k.unwrap_or(loaded.config.query.k);
                commands::alternatives::execute(cli, &loaded, start, goal, k)
            }
        };

        if cli.verbose {
            debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        }
        result
    }
}
