//! Routeplan Core Library
//!
//! Route search over small weighted, undirected road networks: uninformed
//! BFS/DFS search, exhaustive tours, reachability sweeps, shortest paths,
//! k best-cost alternatives and snapshot-based road mutations.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
