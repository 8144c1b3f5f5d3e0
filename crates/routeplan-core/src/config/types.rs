//! Configuration type definitions

use crate::graph::Strategy;
use serde::{Deserialize, Serialize};

/// Road network file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Display name of the network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Locations declared up front, including ones without roads
    #[serde(default)]
    pub locations: Vec<String>,

    /// Roads, each stored in both directions
    #[serde(default)]
    pub roads: Vec<RoadConfig>,

    /// Query defaults
    #[serde(default)]
    pub query: QueryConfig,
}

/// A single bidirectional road
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadConfig {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Defaults applied when the command line leaves a value unset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Strategy for `path` and `sweep`
    #[serde(default)]
    pub strategy: Strategy,

    /// Number of routes for `alternatives`
    #[serde(default = "default_k")]
    pub k: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            k: default_k(),
        }
    }
}

fn default_k() -> usize {
    2
}
