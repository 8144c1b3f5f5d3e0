use crate::graph::algos::frontier::{Frontier, FrontierEntry, QueueFrontier, StackFrontier};
use crate::graph::types::{Distance, Location, Strategy, SweepResult};
use crate::graph::RoadGraph;
use std::collections::HashSet;

/// Visit every location reachable from `start` exactly once.
///
/// BFS uses a plain FIFO queue here, DFS a stack. Frontier entries carry the
/// distance of the single road used to reach them, and `cost` accumulates
/// that distance for each newly visited location. The reported `path` is the
/// one carried by the last entry popped before the sweep stopped.
#[tracing::instrument(skip(graph), fields(start = %start, strategy = %strategy))]
pub fn sweep(graph: &dyn RoadGraph, start: &str, strategy: Strategy) -> SweepResult {
    match strategy {
        Strategy::Bfs => run_sweep(graph, start, QueueFrontier::default()),
        Strategy::Dfs => run_sweep(graph, start, StackFrontier::default()),
    }
}

fn run_sweep<F: Frontier>(graph: &dyn RoadGraph, start: &str, mut frontier: F) -> SweepResult {
    let total = graph.location_count();
    let mut visited: HashSet<Location> = HashSet::new();
    let mut visit_order: Vec<Location> = Vec::new();
    let mut cost = Distance::ZERO;
    let mut last_path = vec![start.to_string()];

    frontier.push(FrontierEntry::start(start));

    while let Some(entry) = frontier.pop() {
        if visited.insert(entry.location.clone()) {
            cost += entry.cost;
            visit_order.push(entry.location.clone());

            let successors = graph
                .neighbors_of(&entry.location)
                .iter()
                .filter(|n| !visited.contains(&n.location))
                .map(|n| entry.step(n, n.distance))
                .collect();
            frontier.push_expansion(successors);
        }

        last_path = entry.path;

        if visited.len() == total {
            break;
        }
    }

    tracing::debug!(
        visited = visit_order.len(),
        total,
        cost = %cost,
        "sweep_complete"
    );

    SweepResult {
        path: last_path,
        cost,
        visit_order,
    }
}
