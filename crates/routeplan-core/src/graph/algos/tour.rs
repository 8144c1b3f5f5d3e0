//! Exhaustive single-visit tours
//!
//! Backtracking search for a path that starts at a given location and visits
//! every declared location exactly once. Worst-case time is combinatorial in
//! the number of locations; intended for small networks only.

use crate::graph::types::{Distance, Location, Route};
use crate::graph::RoadGraph;
use std::collections::HashSet;

/// One level of the backtracking stack
struct Frame {
    location: Location,
    /// Distance of the road used to enter this location
    entered_by: Distance,
    /// Next neighbor list index to try
    next: usize,
}

/// Search state: the current partial tour plus its undo information
struct TourState {
    frames: Vec<Frame>,
    visited: HashSet<Location>,
}

impl TourState {
    fn new(start: &str) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.to_string());
        Self {
            frames: vec![Frame {
                location: start.to_string(),
                entered_by: Distance::ZERO,
                next: 0,
            }],
            visited,
        }
    }

    fn advance(&mut self, location: Location, distance: Distance) {
        self.visited.insert(location.clone());
        self.frames.push(Frame {
            location,
            entered_by: distance,
            next: 0,
        });
    }

    /// Undo the most recent step
    fn backtrack(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.visited.remove(&frame.location);
        }
    }

    /// Sum of the roads actually used along the tour
    fn cost(&self) -> Distance {
        self.frames
            .iter()
            .fold(Distance::ZERO, |acc, f| acc + f.entered_by)
    }

    fn into_route(self) -> Route {
        let cost = self.cost();
        let path = self.frames.into_iter().map(|f| f.location).collect();
        Route::new(path, cost)
    }
}

/// First path from `start` that visits every location exactly once.
///
/// Neighbors are tried in list order, so the result is the first tour found,
/// not the cheapest. Returns `None` when no such path exists.
#[tracing::instrument(skip(graph), fields(start = %start, locations = graph.location_count()))]
pub fn visit_all_locations(graph: &dyn RoadGraph, start: &str) -> Option<Route> {
    let target = graph.location_count();
    if !graph.contains(start) {
        tracing::debug!("start_not_in_network");
        return None;
    }

    let mut state = TourState::new(start);
    let mut backtracks = 0usize;

    loop {
        if state.frames.len() == target {
            tracing::debug!(backtracks, cost = %state.cost(), "tour_found");
            return Some(state.into_route());
        }

        let Some(frame) = state.frames.last_mut() else {
            break;
        };

        let neighbors = graph.neighbors_of(&frame.location);
        let candidate = neighbors
            .iter()
            .enumerate()
            .skip(frame.next)
            .find(|(_, n)| !state.visited.contains(&n.location));

        match candidate {
            Some((index, neighbor)) => {
                frame.next = index + 1;
                state.advance(neighbor.location.clone(), neighbor.distance);
            }
            None => {
                state.backtrack();
                backtracks += 1;
            }
        }
    }

    tracing::debug!(backtracks, "no_tour");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algos::fixtures::{five_city_network, four_city_line};
    use crate::graph::RoadNetwork;

    #[test]
    fn test_tour_along_line() {
        let net = four_city_line();
        let route = visit_all_locations(&net, "A").unwrap();

        assert_eq!(route.path, vec!["A", "B", "G", "M"]);
        assert_eq!(route.cost, Distance::from(990));
    }

    #[test]
    fn test_tour_from_middle_of_line_fails() {
        let net = four_city_line();
        assert!(visit_all_locations(&net, "B").is_none());
    }

    #[test]
    fn test_tour_from_leaf_of_branching_network() {
        // H - A - B - G - M
        let net = five_city_network();
        let route = visit_all_locations(&net, "H").unwrap();

        assert_eq!(route.path, vec!["H", "A", "B", "G", "M"]);
        assert_eq!(route.cost, Distance::from(1265));
    }

    #[test]
    fn test_tour_backtracks_out_of_dead_end() {
        // A lists C first; every branch through C first dead-ends
        let mut net = RoadNetwork::new();
        net.add_road("A", "C", Distance::from(1)).unwrap();
        net.add_road("A", "B", Distance::from(2)).unwrap();
        net.add_road("B", "C", Distance::from(3)).unwrap();
        net.add_road("C", "D", Distance::from(4)).unwrap();

        let route = visit_all_locations(&net, "A").unwrap();
        assert_eq!(route.path, vec!["A", "B", "C", "D"]);
        assert_eq!(route.cost, Distance::from(9));
    }

    #[test]
    fn test_tour_counts_declared_isolated_locations() {
        let mut net = four_city_line();
        net.declare_location("Hawassa");
        assert!(visit_all_locations(&net, "A").is_none());
    }

    #[test]
    fn test_tour_single_location() {
        let mut net = RoadNetwork::new();
        net.declare_location("A");
        let route = visit_all_locations(&net, "A").unwrap();
        assert_eq!(route.path, vec!["A"]);
        assert_eq!(route.cost, Distance::ZERO);
    }

    #[test]
    fn test_tour_unknown_start() {
        let net = four_city_line();
        assert!(visit_all_locations(&net, "Nowhere").is_none());
    }
}
