//! CLI argument parsing for routeplan
//!
//! Uses clap for argument parsing.
//! Supports global flags: --network, --format, --quiet, --verbose and the
//! road change flags --close, --add-road, --reroute

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_add_road, parse_close, parse_format, parse_reroute, parse_strategy};
use routeplan_core::graph::{RoadChange, Strategy};

pub use routeplan_core::format::OutputFormat;

/// Routeplan - route planning over small weighted road networks
#[derive(Parser, Debug)]
#[command(name = "routeplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Road network file (TOML)
    #[arg(long, global = true, env = "ROUTEPLAN_NETWORK")]
    pub network: Option<PathBuf>,

    /// Output format: human, json or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, routeplan_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Close every road between two locations (FROM,TO), repeatable
    #[arg(long, global = true, value_name = "FROM,TO", value_parser = parse_close)]
    pub close: Vec<RoadChange>,

    /// Add an alternate road (FROM,TO,DISTANCE), repeatable
    #[arg(long, global = true, value_name = "FROM,TO,DISTANCE", value_parser = parse_add_road)]
    pub add_road: Vec<RoadChange>,

    /// Replace the roads between two locations (FROM,TO,DISTANCE), repeatable
    #[arg(long, global = true, value_name = "FROM,TO,DISTANCE", value_parser = parse_reroute)]
    pub reroute: Vec<RoadChange>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Road changes in application order: closures, additions, reroutes
    pub fn road_changes(&self) -> Vec<RoadChange> {
        self.close
            .iter()
            .chain(&self.add_road)
            .chain(&self.reroute)
            .cloned()
            .collect()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List locations and roads of the network
    Roads,

    /// Find a path with uninformed search (bfs or dfs)
    Path {
        /// Start location
        start: String,

        /// Goal location (not needed with --visit-all)
        goal: Option<String>,

        /// Search strategy: bfs or dfs
        #[arg(long, short, value_parser = parse_strategy)]
        strategy: Option<Strategy>,

        /// Visit every location exactly once, starting at START
        #[arg(long)]
        visit_all: bool,
    },

    /// Visit every location reachable from a start location
    Sweep {
        /// Start location
        start: String,

        /// Traversal order: bfs or dfs
        #[arg(long, short, value_parser = parse_strategy)]
        strategy: Option<Strategy>,
    },

    /// Find the minimum-distance path
    Shortest {
        /// Start location
        start: String,

        /// Goal location
        goal: String,
    },

    /// Find up to k low-cost alternative paths
    Alternatives {
        /// Start location
        start: String,

        /// Goal location
        goal: String,

        /// Number of paths to return
        #[arg(long, short)]
        k: Option<usize>,
    },
}
