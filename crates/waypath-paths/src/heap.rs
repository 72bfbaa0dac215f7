//! Binary min-heap of `(priority, payload)` pairs.
//!
//! Entries are keyed by `(priority, insertion_order)`: lower priorities pop
//! first and equal priorities pop in push order (FIFO), so a search driven
//! by this heap settles cells in a reproducible order.
//!
//! The heap never removes or updates entries in place. Pushing the same
//! payload twice leaves two entries; callers that need decrease-key skip the
//! stale one when it surfaces.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
    payload: T,
    priority: u32,
    /// Monotonically increasing; lower = pushed earlier.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue with FIFO tie-breaking.
#[derive(Debug)]
pub struct MinHeap<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> MinHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Create an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            seq: 0,
        }
    }

    /// Insert `payload` at `priority`. O(log n).
    pub fn push(&mut self, priority: u32, payload: T) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            payload,
            priority,
            seq,
        }));
    }

    /// Remove the entry with the lowest priority. O(log n).
    ///
    /// Returns `None` when the heap is empty.
    pub fn pop_min(&mut self) -> Option<(u32, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.priority, entry.payload))
    }

    /// Lowest priority currently queued.
    pub fn peek_priority(&self) -> Option<u32> {
        self.heap.peek().map(|Reverse(entry)| entry.priority)
    }

    /// Number of queued entries, stale duplicates included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
