//! K best-cost routes by iterative road blocking
//!
//! Each round blocks, one at a time, every road along the most recently
//! selected route, re-solves start to goal on each blocked snapshot, and
//! keeps the cheapest result. Only single-road deviations from the latest
//! route are considered, and earlier results are not excluded, so a route
//! may be returned more than once.

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::algos::dijkstra::shortest_path;
use crate::graph::mutate::block_road;
use crate::graph::types::Route;
use crate::graph::RoadNetwork;
use crate::trace_time;
use std::time::Instant;

/// Up to `k` routes from `start` to `goal`, in selection order.
///
/// Returns an empty list when the goal is unreachable. Stops early when a
/// round finds no deviation at all. `k` must be at least 1.
#[tracing::instrument(skip(network), fields(start = %start, goal = %goal, k = k))]
pub fn k_shortest_paths(
    network: &RoadNetwork,
    start: &str,
    goal: &str,
    k: usize,
) -> Result<Vec<Route>> {
    if k == 0 {
        bail_invalid!("k", "0 (must be at least 1)");
    }

    let first = shortest_path(network, start, goal);
    if !first.found() {
        return Ok(Vec::new());
    }

    let mut results = vec![first];

    while results.len() < k {
        let round_start = Instant::now();
        let Some(current) = results.last() else {
            break;
        };

        let mut candidates: Vec<Route> = current
            .legs()
            .map(|(u, v)| shortest_path(&block_road(network, u, v), start, goal))
            .filter(Route::found)
            .collect();

        tracing::debug!(
            round = results.len(),
            candidates = candidates.len(),
            "deviation_round"
        );
        trace_time!(round_start, "deviation_round_solved", round = results.len());

        // Stable sort keeps the earliest blocked road on cost ties
        candidates.sort_by(|a, b| a.cost.total_cmp(&b.cost));
        match candidates.into_iter().next() {
            Some(next) => results.push(next),
            None => break,
        }
    }

    Ok(results)
}
