//! Adjacency-list road network
//!
//! Every road is stored twice, once in each endpoint's neighbor list, in
//! insertion order. Parallel roads between the same pair are kept as
//! separate entries.

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::types::{Distance, Location};
use crate::graph::RoadGraph;
use serde::Serialize;
use std::collections::HashMap;

/// One entry of a location's neighbor list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub location: Location,
    pub distance: Distance,
}

/// A road listed once, in the direction it was first stored
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadSegment {
    pub from: Location,
    pub to: Location,
    pub distance: Distance,
}

/// Weighted, undirected road network with insertion-ordered neighbor lists
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadNetwork {
    locations: Vec<Location>,
    adjacency: HashMap<Location, Vec<Neighbor>>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a location without roads. Returns false if it already existed.
    pub fn declare_location(&mut self, location: &str) -> bool {
        if self.adjacency.contains_key(location) {
            return false;
        }
        self.locations.push(location.to_string());
        self.adjacency.insert(location.to_string(), Vec::new());
        true
    }

    /// Append a road to both endpoint lists, declaring unknown endpoints.
    ///
    /// An existing road between the same pair is left in place, so this can
    /// model an alternate connection.
    pub fn add_road(&mut self, a: &str, b: &str, distance: Distance) -> Result<()> {
        if a == b {
            bail_invalid!("road", format!("self-loop at '{}'", a));
        }
        if !distance.is_finite() || distance.value() < 0.0 {
            bail_invalid!("distance", format!("{} for road {}-{}", distance, a, b));
        }

        self.declare_location(a);
        self.declare_location(b);
        self.push_neighbor(a, b, distance);
        self.push_neighbor(b, a, distance);

        tracing::trace!(from = a, to = b, distance = %distance, "add_road");
        Ok(())
    }

    fn push_neighbor(&mut self, from: &str, to: &str, distance: Distance) {
        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(Neighbor {
                location: to.to_string(),
                distance,
            });
        }
    }

    /// Remove every road between `a` and `b` in both directions.
    ///
    /// Returns how many roads were removed; zero means nothing changed.
    pub fn remove_road(&mut self, a: &str, b: &str) -> usize {
        let removed = Self::retain_without(self.adjacency.get_mut(a), b);
        Self::retain_without(self.adjacency.get_mut(b), a);

        tracing::trace!(from = a, to = b, removed, "remove_road");
        removed
    }

    fn retain_without(list: Option<&mut Vec<Neighbor>>, target: &str) -> usize {
        match list {
            Some(list) => {
                let before = list.len();
                list.retain(|n| n.location != target);
                before - list.len()
            }
            None => 0,
        }
    }

    /// Replace every road between `a` and `b` with a single road of `distance`
    pub fn reroute_road(&mut self, a: &str, b: &str, distance: Distance) -> Result<()> {
        self.remove_road(a, b);
        self.add_road(a, b, distance)
    }

    /// Neighbor list of `location`; unknown locations have none
    pub fn neighbors_of(&self, location: &str) -> &[Neighbor] {
        self.adjacency
            .get(location)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Locations in declaration order
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Every stored road exactly once, parallel roads included.
    ///
    /// A road is reported from the endpoint declared first.
    pub fn roads(&self) -> Vec<RoadSegment> {
        let position: HashMap<&str, usize> = self
            .locations
            .iter()
            .enumerate()
            .map(|(i, loc)| (loc.as_str(), i))
            .collect();

        let mut roads = Vec::new();
        for (i, from) in self.locations.iter().enumerate() {
            for neighbor in self.neighbors_of(from) {
                let j = position
                    .get(neighbor.location.as_str())
                    .copied()
                    .unwrap_or(usize::MAX);
                if i < j {
                    roads.push(RoadSegment {
                        from: from.clone(),
                        to: neighbor.location.clone(),
                        distance: neighbor.distance,
                    });
                }
            }
        }
        roads
    }
}

impl RoadGraph for RoadNetwork {
    fn neighbors_of(&self, location: &str) -> &[Neighbor] {
        RoadNetwork::neighbors_of(self, location)
    }

    fn contains(&self, location: &str) -> bool {
        RoadNetwork::contains(self, location)
    }

    fn location_count(&self) -> usize {
        RoadNetwork::location_count(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[Neighbor]) -> Vec<&str> {
        list.iter().map(|n| n.location.as_str()).collect()
    }

    #[test]
    fn test_add_road_is_symmetric() {
        let mut net = RoadNetwork::new();
        net.add_road("A", "B", Distance::from(510)).unwrap();

        assert_eq!(net.neighbors_of("A")[0].location, "B");
        assert_eq!(net.neighbors_of("A")[0].distance, Distance::from(510));
        assert_eq!(net.neighbors_of("B")[0].location, "A");
        assert_eq!(net.neighbors_of("B")[0].distance, Distance::from(510));
        assert_eq!(net.location_count(), 2);
    }

    #[test]
    fn test_add_road_keeps_insertion_order() {
        let mut net = RoadNetwork::new();
        net.add_road("A", "B", Distance::from(510)).unwrap();
        net.add_road("A", "H", Distance::from(275)).unwrap();
        net.add_road("A", "M", Distance::from(400)).unwrap();

        assert_eq!(names(net.neighbors_of("A")), vec!["B", "H", "M"]);
        assert_eq!(net.locations(), &["A", "B", "H", "M"]);
    }

    #[test]
    fn test_parallel_roads_are_not_merged() {
        let mut net = RoadNetwork::new();
        net.add_road("A", "M", Distance::from(700)).unwrap();
        net.add_road("A", "M", Distance::from(400)).unwrap();

        assert_eq!(net.neighbors_of("A").len(), 2);
        assert_eq!(net.neighbors_of("M").len(), 2);
        assert_eq!(net.roads().len(), 2);
    }

    #[test]
    fn test_remove_road_removes_all_parallel_roads() {
        let mut net = RoadNetwork::new();
        net.add_road("A", "M", Distance::from(700)).unwrap();
        net.add_road("A", "M", Distance::from(400)).unwrap();
        net.add_road("A", "B", Distance::from(510)).unwrap();

        assert_eq!(net.remove_road("M", "A"), 2);
        assert_eq!(names(net.neighbors_of("A")), vec!["B"]);
        assert!(net.neighbors_of("M").is_empty());
        // Locations survive road removal
        assert!(net.contains("M"));
    }

    #[test]
    fn test_add_then_remove_restores_lists() {
        let mut net = RoadNetwork::new();
        net.add_road("A", "B", Distance::from(510)).unwrap();
        net.add_road("B", "G", Distance::from(180)).unwrap();
        let before_a = net.neighbors_of("A").to_vec();
        let before_g = net.neighbors_of("G").to_vec();

        net.add_road("A", "G", Distance::from(42)).unwrap();
        net.remove_road("A", "G");

        assert_eq!(net.neighbors_of("A"), before_a.as_slice());
        assert_eq!(net.neighbors_of("G"), before_g.as_slice());
    }

    #[test]
    fn test_remove_missing_road_is_noop() {
        let mut net = RoadNetwork::new();
        net.add_road("A", "B", Distance::from(510)).unwrap();
        net.add_road("G", "M", Distance::from(300)).unwrap();
        let before = net.clone();

        assert_eq!(net.remove_road("A", "M"), 0);
        assert_eq!(net.remove_road("X", "Y"), 0);
        assert_eq!(net, before);
    }

    #[test]
    fn test_unknown_location_has_no_neighbors() {
        let net = RoadNetwork::new();
        assert!(net.neighbors_of("Nowhere").is_empty());
        assert!(!net.contains("Nowhere"));
    }

    #[test]
    fn test_add_road_rejects_self_loop_and_bad_weight() {
        let mut net = RoadNetwork::new();
        assert!(net.add_road("A", "A", Distance::from(1)).is_err());
        assert!(net.add_road("A", "B", Distance::new(-1.0)).is_err());
        assert!(net.add_road("A", "B", Distance::new(f64::NAN)).is_err());
        assert_eq!(net.location_count(), 0);
    }

    #[test]
    fn test_declare_location_without_roads() {
        let mut net = RoadNetwork::new();
        assert!(net.declare_location("Hawassa"));
        assert!(!net.declare_location("Hawassa"));
        assert_eq!(net.location_count(), 1);
        assert!(net.roads().is_empty());
    }

    #[test]
    fn test_reroute_replaces_distance() {
        let mut net = RoadNetwork::new();
        net.add_road("A", "M", Distance::from(700)).unwrap();
        net.reroute_road("A", "M", Distance::from(400)).unwrap();

        assert_eq!(net.neighbors_of("A").len(), 1);
        assert_eq!(net.neighbors_of("A")[0].distance, Distance::from(400));
    }
}
