//! Graph algorithm implementations
//!
//! Contains concrete implementations of the search algorithms:
//! - `frontier`: Frontier disciplines and the shared start-to-goal loop
//! - `dijkstra`: Weighted shortest path finding
//! - `explore`: Uninformed BFS/DFS search
//! - `tour`: Exhaustive single-visit tours
//! - `sweep`: Reachability sweeps
//! - `ksp`: K best-cost routes by road blocking

pub mod dijkstra;
pub mod explore;
pub mod frontier;
pub mod ksp;
pub mod sweep;
pub mod tour;

pub use dijkstra::shortest_path;
pub use explore::{bfs_find_path, dfs_find_path, explore, find_path};
pub use ksp::k_shortest_paths;
pub use sweep::sweep;
pub use tour::visit_all_locations;
