use crate::graph::algos::frontier::{search, Frontier, FrontierEntry};
use crate::graph::types::Route;
use crate::graph::RoadGraph;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap.
///
/// Ordered by accumulated cost, then by insertion sequence, so equal-cost
/// entries leave the heap in the order they entered it.
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub entry: FrontierEntry,
    pub seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entry
            .cost
            .total_cmp(&other.entry.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Priority frontier keyed by cumulative cost
#[derive(Debug, Default)]
pub struct MinCostFrontier {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
}

impl MinCostFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for MinCostFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry { entry, seq }));
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(heap_entry)| heap_entry.entry)
    }
}

/// Minimum cumulative-distance route from `start` to `goal`.
///
/// Returns [`Route::unreachable`] when the goal cannot be reached. Negative
/// distances are rejected by the network store and are not handled here.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn shortest_path(graph: &dyn RoadGraph, start: &str, goal: &str) -> Route {
    search(graph, start, goal, MinCostFrontier::new())
}
