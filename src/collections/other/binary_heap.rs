//! `PriorityQueue`: a priority queue implemented with a binary min-heap.
//!
//! This implementation uses [`DynamicArray`] as the backing storage. Entries are
//! `Pair<item, priority>` and the heap is ordered by the priority (`Pair::second`)
//! only, so the entry with the lowest priority value is dequeued first.
//!
//! Heap invariant: `heap[i] <= heap[2i + 1]` and `heap[i] <= heap[2i + 2]` for every
//! valid index.

use crate::collections::other::Pair;
use crate::collections::vec::DynamicArray;
use crate::error::{Error, Result};
use core::cmp::Ordering;
use core::fmt;

/// A min-priority queue of `Pair<K, P>` keyed on `P`.
pub struct PriorityQueue<K, P> {
    data: DynamicArray<Pair<K, P>>,
}

impl<K, P: Ord> PriorityQueue<K, P> {
    /// Creates an empty priority queue.
    pub fn new() -> Self {
        Self {
            data: DynamicArray::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            data: DynamicArray::with_capacity(capacity)?,
        })
    }

    /// Returns the number of entries in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts an entry.
    pub fn enqueue(&mut self, entry: Pair<K, P>) {
        self.data.push_back(entry);
        self.sift_up(self.data.len() - 1);
    }

    /// Inserts `item` with the given priority.
    pub fn push(&mut self, item: K, priority: P) {
        self.enqueue(Pair::new(item, priority));
    }

    /// Removes and returns the entry with the lowest priority.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] if the heap is empty.
    pub fn dequeue(&mut self) -> Result<Pair<K, P>> {
        if self.data.is_empty() {
            return Err(Self::empty());
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let entry = self.data.pop().ok_or_else(Self::empty)?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(entry)
    }

    /// Returns the entry with the lowest priority without removing it.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] if the heap is empty.
    pub fn peek(&self) -> Result<&Pair<K, P>> {
        self.data.get(0).map_err(|_| Self::empty())
    }

    /// Clears the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    // Helper to compare two entries in the heap by priority
    fn less(&self, a: usize, b: usize) -> bool {
        self.data[a].cmp_second(&self.data[b]) == Ordering::Less
    }

    fn empty() -> Error {
        Error::EmptyContainer {
            container: "priority queue",
        }
    }
}

impl<K, P> PriorityQueue<K, P> {
    /// Iterates over all entries in the heap in arbitrary order.
    pub fn iter(&self) -> core::slice::Iter<'_, Pair<K, P>> {
        self.data.iter()
    }
}

impl<K: Clone, P: Clone> Clone for PriorityQueue<K, P> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<K, P: Ord> Default for PriorityQueue<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P: Ord + fmt::Debug> fmt::Debug for PriorityQueue<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.len())
            .field("min_priority", &self.peek().ok().map(Pair::second))
            .finish()
    }
}
