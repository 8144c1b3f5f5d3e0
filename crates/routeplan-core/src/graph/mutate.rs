//! Snapshot-based road mutations
//!
//! "What if" closures and reroutes run against an owned copy of the network
//! so independent queries never see each other's changes. In-place changes
//! go through [`RoadNetwork`]'s own methods instead.

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::types::{Distance, Location};
use crate::graph::RoadNetwork;

/// Copy of `network` with every road between `a` and `b` removed
pub fn block_road(network: &RoadNetwork, a: &str, b: &str) -> RoadNetwork {
    let mut snapshot = network.clone();
    snapshot.remove_road(a, b);
    snapshot
}

/// Copy of `network` where the roads between `a` and `b` are replaced by a
/// single road of `distance`
pub fn reroute_road(
    network: &RoadNetwork,
    a: &str,
    b: &str,
    distance: Distance,
) -> Result<RoadNetwork> {
    let mut snapshot = network.clone();
    snapshot.reroute_road(a, b, distance)?;
    Ok(snapshot)
}

/// A single road change requested by a caller
#[derive(Debug, Clone, PartialEq)]
pub enum RoadChange {
    /// Close every road between two locations
    Close { a: Location, b: Location },
    /// Add an alternate road, keeping existing ones
    Add {
        a: Location,
        b: Location,
        distance: Distance,
    },
    /// Replace existing roads with one of a new distance
    Reroute {
        a: Location,
        b: Location,
        distance: Distance,
    },
}

impl RoadChange {
    /// Parse `"A,B"` into a closure
    pub fn parse_close(input: &str) -> Result<Self> {
        match split_fields(input).as_slice() {
            [a, b] if !a.is_empty() && !b.is_empty() => Ok(RoadChange::Close {
                a: a.to_string(),
                b: b.to_string(),
            }),
            _ => bail_invalid!("road closure", format!("'{}' (expected: FROM,TO)", input)),
        }
    }

    /// Parse `"A,B,DISTANCE"` into an added road
    pub fn parse_add(input: &str) -> Result<Self> {
        let (a, b, distance) = parse_weighted(input, "added road")?;
        Ok(RoadChange::Add { a, b, distance })
    }

    /// Parse `"A,B,DISTANCE"` into a reroute
    pub fn parse_reroute(input: &str) -> Result<Self> {
        let (a, b, distance) = parse_weighted(input, "reroute")?;
        Ok(RoadChange::Reroute { a, b, distance })
    }

    /// Apply this change to `network` in place
    pub fn apply(&self, network: &mut RoadNetwork) -> Result<()> {
        match self {
            RoadChange::Close { a, b } => {
                let removed = network.remove_road(a, b);
                if removed == 0 {
                    tracing::debug!(from = %a, to = %b, "close_missing_road");
                }
                Ok(())
            }
            RoadChange::Add { a, b, distance } => network.add_road(a, b, *distance),
            RoadChange::Reroute { a, b, distance } => network.reroute_road(a, b, *distance),
        }
    }
}

fn split_fields(input: &str) -> Vec<&str> {
    input.split(',').map(str::trim).collect()
}

fn parse_weighted(input: &str, context: &str) -> Result<(Location, Location, Distance)> {
    match split_fields(input).as_slice() {
        [a, b, distance] if !a.is_empty() && !b.is_empty() => {
            let value: f64 = match distance.parse() {
                Ok(value) => value,
                Err(_) => bail_invalid!("distance", format!("'{}' in {}", distance, input)),
            };
            Ok((a.to_string(), b.to_string(), Distance::new(value)))
        }
        _ => bail_invalid!(context, format!("'{}' (expected: FROM,TO,DISTANCE)", input)),
    }
}

/// Copy of `network` with `changes` applied in order
pub fn apply_changes(network: &RoadNetwork, changes: &[RoadChange]) -> Result<RoadNetwork> {
    let mut snapshot = network.clone();
    for change in changes {
        change.apply(&mut snapshot)?;
    }
    if !changes.is_empty() {
        tracing::debug!(changes = changes.len(), "applied_road_changes");
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algos::fixtures::five_city_network;
    use crate::graph::algos::shortest_path;

    #[test]
    fn test_block_road_leaves_original_untouched() {
        let net = five_city_network();
        let blocked = block_road(&net, "B", "G");

        assert!(!shortest_path(&blocked, "A", "M").found());
        assert_eq!(shortest_path(&net, "A", "M").cost, Distance::from(990));
    }

    #[test]
    fn test_independent_snapshots() {
        let net = five_city_network();
        let first = block_road(&net, "A", "B");
        let second = block_road(&net, "G", "M");

        assert_eq!(first.neighbors_of("G").len(), 2);
        assert_eq!(second.neighbors_of("A").len(), 2);
    }

    #[test]
    fn test_reroute_direct_road() {
        // Close the direct road, then open a replacement of 400
        let mut net = five_city_network();
        net.add_road("A", "M", Distance::from(1500)).unwrap();

        let rerouted = reroute_road(&net, "A", "M", Distance::from(400)).unwrap();
        let route = shortest_path(&rerouted, "A", "M");
        assert_eq!(route.path, vec!["A", "M"]);
        assert_eq!(route.cost, Distance::from(400));

        assert_eq!(shortest_path(&net, "A", "M").cost, Distance::from(990));
    }

    #[test]
    fn test_parse_changes() {
        assert_eq!(
            RoadChange::parse_close("Addis Ababa, Mekelle").unwrap(),
            RoadChange::Close {
                a: "Addis Ababa".to_string(),
                b: "Mekelle".to_string()
            }
        );
        assert_eq!(
            RoadChange::parse_add("A,M,400").unwrap(),
            RoadChange::Add {
                a: "A".to_string(),
                b: "M".to_string(),
                distance: Distance::from(400)
            }
        );
        assert!(matches!(
            RoadChange::parse_reroute("A,M,2.5").unwrap(),
            RoadChange::Reroute { distance, .. } if distance == Distance::new(2.5)
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(RoadChange::parse_close("A").is_err());
        assert!(RoadChange::parse_close("A,B,C").is_err());
        assert!(RoadChange::parse_add("A,B").is_err());
        assert!(RoadChange::parse_add("A,B,far").is_err());
        assert!(RoadChange::parse_reroute(",B,3").is_err());
    }

    #[test]
    fn test_apply_changes_in_order() {
        let net = five_city_network();
        let changes = vec![
            RoadChange::parse_close("B,G").unwrap(),
            RoadChange::parse_add("A,M,700").unwrap(),
            RoadChange::parse_close("X,Y").unwrap(),
        ];

        let changed = apply_changes(&net, &changes).unwrap();
        let route = shortest_path(&changed, "A", "M");
        assert_eq!(route.path, vec!["A", "M"]);
        assert_eq!(route.cost, Distance::from(700));
    }

    #[test]
    fn test_apply_changes_rejects_invalid_road() {
        let net = five_city_network();
        let changes = vec![RoadChange::parse_add("A,A,10").unwrap()];
        assert!(apply_changes(&net, &changes).is_err());
    }
}
