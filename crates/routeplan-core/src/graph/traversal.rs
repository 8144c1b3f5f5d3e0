use crate::graph::network::Neighbor;

/// Trait for providing road adjacency to the search algorithms
pub trait RoadGraph {
    /// Neighbor list in insertion order; empty for unknown locations
    fn neighbors_of(&self, location: &str) -> &[Neighbor];
    fn contains(&self, location: &str) -> bool;
    /// Total number of declared locations
    fn location_count(&self) -> usize;
}
