//! Road network storage and route search
//!
//! Provides the search engine over a weighted, undirected road network:
//! - Adjacency-list network store with road mutation primitives
//! - Cost-ordered BFS and stack-ordered DFS between two locations
//! - Exhaustive single-visit tours and reachability sweeps
//! - Dijkstra shortest paths and k best-cost alternatives
//! - Snapshot-based "what if" road closures and reroutes

pub mod algos;
pub mod mutate;
pub mod network;
pub mod traversal;
pub mod types;

pub use algos::{
    bfs_find_path, dfs_find_path, explore, find_path, k_shortest_paths, shortest_path, sweep,
    visit_all_locations,
};
pub use mutate::{apply_changes, block_road, reroute_road, RoadChange};
pub use network::{Neighbor, RoadNetwork, RoadSegment};
pub use traversal::RoadGraph;
pub use types::{Distance, Location, Route, SearchOutcome, Strategy, SweepResult};
