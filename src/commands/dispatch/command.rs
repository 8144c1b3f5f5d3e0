//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::Cli;
use routeplan_core::config::NetworkConfig;
use routeplan_core::error::Result;
use routeplan_core::graph::{apply_changes, RoadNetwork};
use tracing::debug;

/// A network ready for querying, with the CLI road changes applied
pub struct LoadedNetwork {
    pub path: PathBuf,
    pub config: NetworkConfig,
    pub network: RoadNetwork,
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, cwd: &'a Path, start: Instant) -> Self {
        Self { cli, cwd, start }
    }

    /// Discover the network file, build it, and apply --close/--add-road/--reroute
    pub fn load_network(&self) -> Result<LoadedNetwork> {
        let (path, config, base) =
            NetworkConfig::discover_network(self.cli.network.as_deref(), self.cwd)?;

        if self.cli.verbose {
            debug!(elapsed = ?self.start.elapsed(), "load_network");
        }

        let network = apply_changes(&base, &self.cli.road_changes())?;

        Ok(LoadedNetwork {
            path,
            config,
            network,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("routeplan {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Route planning over small weighted road networks.");
        println!();
        println!("Run `routeplan --help` for usage information.");
        Ok(())
    }
}
