use crate::graph::network::Neighbor;
use crate::graph::types::{Distance, Location, Route};
use crate::graph::RoadGraph;
use std::collections::{HashSet, VecDeque};

/// A search state waiting to be expanded
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierEntry {
    pub location: Location,
    pub path: Vec<Location>,
    pub cost: Distance,
}

impl FrontierEntry {
    pub fn start(location: &str) -> Self {
        FrontierEntry {
            location: location.to_string(),
            path: vec![location.to_string()],
            cost: Distance::ZERO,
        }
    }

    /// Successor state reached over `neighbor`, carrying `cost`
    pub fn step(&self, neighbor: &Neighbor, cost: Distance) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(neighbor.location.clone());
        FrontierEntry {
            location: neighbor.location.clone(),
            path,
            cost,
        }
    }
}

/// Frontier discipline shared by the search loops
pub trait Frontier {
    fn push(&mut self, entry: FrontierEntry);
    fn pop(&mut self) -> Option<FrontierEntry>;

    /// Push the successors of one expansion, given in neighbor list order
    fn push_expansion(&mut self, entries: Vec<FrontierEntry>) {
        for entry in entries {
            self.push(entry);
        }
    }
}

/// Last-in-first-out frontier
#[derive(Debug, Default)]
pub struct StackFrontier {
    stack: Vec<FrontierEntry>,
}

impl Frontier for StackFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.stack.push(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.stack.pop()
    }

    // Reversed so the first listed neighbor is popped first
    fn push_expansion(&mut self, entries: Vec<FrontierEntry>) {
        self.stack.extend(entries.into_iter().rev());
    }
}

/// First-in-first-out frontier
#[derive(Debug, Default)]
pub struct QueueFrontier {
    queue: VecDeque<FrontierEntry>,
}

impl Frontier for QueueFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.queue.push_back(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }
}

/// Start-to-goal search loop.
///
/// Pops an entry, skips it if its location was already expanded, returns
/// it if it is the goal, and otherwise expands it with cumulative costs.
pub fn search<F: Frontier>(
    graph: &dyn RoadGraph,
    start: &str,
    goal: &str,
    mut frontier: F,
) -> Route {
    let mut visited: HashSet<Location> = HashSet::new();
    frontier.push(FrontierEntry::start(start));

    while let Some(entry) = frontier.pop() {
        if visited.contains(&entry.location) {
            continue;
        }

        if entry.location == goal {
            tracing::debug!(
                expanded = visited.len(),
                hops = entry.path.len() - 1,
                cost = %entry.cost,
                "goal_reached"
            );
            return Route::new(entry.path, entry.cost);
        }

        visited.insert(entry.location.clone());
        tracing::trace!(location = %entry.location, cost = %entry.cost, "expand");

        let successors = graph
            .neighbors_of(&entry.location)
            .iter()
            .filter(|n| !visited.contains(&n.location))
            .map(|n| entry.step(n, entry.cost + n.distance))
            .collect();
        frontier.push_expansion(successors);
    }

    tracing::debug!(expanded = visited.len(), "goal_unreachable");
    Route::unreachable()
}
