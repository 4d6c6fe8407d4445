//! Search frontier: a priority queue ordered by f-score.
//!
//! Backed by a binary heap, so enqueue and dequeue are O(log n). The only
//! behavioral contract is "lowest priority dequeues first"; among equal
//! priorities, entries dequeue in insertion order (FIFO), which makes the
//! search fully deterministic.
//!
//! Elements are flat cell indices (`y * width + x`). Re-enqueueing a cell
//! with an improved priority just pushes a second entry; the stale one is
//! skipped by the planner's closed-set check when it surfaces (lazy
//! deletion).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// An entry in the open set
#[derive(Clone, Debug)]
struct OpenNode {
    /// Flat cell index
    cell: u32,
    /// Accumulated path cost from start
    g: f32,
    /// Priority: g plus heuristic
    f: f32,
    /// Insertion sequence number, breaks ties among equal f
    seq: u64,
}

impl Eq for OpenNode {}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cell == other.cell && self.seq == other.seq
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior: lowest f first,
        // then earliest insertion.
        match other.f.partial_cmp(&self.f).unwrap_or(Ordering::Equal) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            ord => ord,
        }
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search frontier
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<OpenNode>,
    queued: HashSet<u32>,
    seq: u64,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a cell with its path cost and priority
    pub fn enqueue(&mut self, cell: u32, g: f32, f: f32) {
        self.heap.push(OpenNode {
            cell,
            g,
            f,
            seq: self.seq,
        });
        self.seq += 1;
        self.queued.insert(cell);
    }

    /// Dequeue the lowest-priority cell, returning `(cell, g)`
    pub fn dequeue(&mut self) -> Option<(u32, f32)> {
        let node = self.heap.pop()?;
        self.queued.remove(&node.cell);
        Some((node.cell, node.g))
    }

    /// Whether the frontier holds no entries
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Membership by cell index.
    ///
    /// Reflects enqueue/dequeue pairs; a stale duplicate left behind by a
    /// priority improvement is not counted.
    pub fn contains(&self, cell: u32) -> bool {
        self.queued.contains(&cell)
    }

    /// Number of entries currently queued (stale duplicates included)
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
