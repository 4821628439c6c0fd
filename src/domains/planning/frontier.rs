use super::candidate::PathCandidate;
use crate::common::{DomainError, DomainResult};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Per-agent agenda of partial paths, min-ordered by estimated total cost.
///
/// Backed by a binary heap, so push and pop are amortized `O(log n)`. Ties
/// on cost are broken by insertion order (first pushed, first popped), which
/// keeps search behavior reproducible across runs.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
}

#[derive(Debug)]
struct FrontierEntry {
    cost: OrderedFloat<f64>,
    seq: u64,
    candidate: PathCandidate,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, candidate: PathCandidate) {
        let entry = FrontierEntry {
            cost: OrderedFloat(candidate.cost),
            seq: self.next_seq,
            candidate,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(entry));
    }

    /// Remove and return the cheapest candidate.
    pub fn pop_min(&mut self) -> DomainResult<PathCandidate> {
        self.heap
            .pop()
            .map(|Reverse(entry)| entry.candidate)
            .ok_or(DomainError::EmptyFrontier)
    }

    pub fn peek_min(&self) -> Option<&PathCandidate> {
        self.heap.peek().map(|Reverse(entry)| &entry.candidate)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
