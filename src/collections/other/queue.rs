//! `Queue`: a FIFO queue over a circular buffer.
//!
//! The queue keeps its elements in a [`DynamicArray`] of slots that is treated as a
//! ring:
//! - `head` is the slot of the next element to dequeue,
//! - `tail` is the slot the next enqueue writes to,
//! - both advance modulo the ring size (the current backing capacity).
//!
//! When every slot is occupied, `enqueue` grows the ring to twice its size and lays
//! the live elements out again in FIFO order starting at slot 0, so wrap-around is
//! preserved across any number of enqueue/dequeue cycles.
//!
//! Performance Characteristics:
//! - Enqueue: O(1) amortized
//! - Dequeue / peek: O(1)

use crate::collections::vec::DynamicArray;
use crate::error::{Error, Result};
use core::fmt;

/// A first-in first-out queue backed by a ring buffer.
pub struct Queue<T> {
    slots: DynamicArray<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue. No slots are allocated until the first enqueue.
    pub fn new() -> Self {
        Self {
            slots: DynamicArray::new(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Creates an empty queue with `capacity` pre-allocated slots.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut slots = DynamicArray::with_capacity(capacity)?;
        for _ in 0..capacity {
            slots.push_back(None);
        }
        Ok(Self {
            slots,
            head: 0,
            tail: 0,
            len: 0,
        })
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the ring.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Adds an element at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        self.slots[self.tail] = Some(value);
        self.tail = (self.tail + 1) % self.slots.len();
        self.len += 1;
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Self::empty());
        }
        let value = self.slots[self.head].take().ok_or_else(Self::empty)?;
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        Ok(value)
    }

    /// Returns the element at the front of the queue without removing it.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Self::empty());
        }
        self.slots[self.head].as_ref().ok_or_else(Self::empty)
    }

    /// Removes every element, keeping the allocated slots.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Iterates over the queued elements from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let ring = self.slots.len();
        (0..self.len).filter_map(move |i| self.slots[(self.head + i) % ring].as_ref())
    }

    // Doubles the ring and re-lays the live elements out from slot 0.
    fn grow(&mut self) {
        let ring = self.slots.len();
        let new_ring = (ring * 2).max(DynamicArray::<Option<T>>::DEFAULT_CAPACITY);
        let mut slots = DynamicArray::new();
        for i in 0..self.len {
            slots.push_back(self.slots[(self.head + i) % ring].take());
        }
        while slots.len() < new_ring {
            slots.push_back(None);
        }
        self.slots = slots;
        self.head = 0;
        self.tail = self.len;
    }

    fn empty() -> Error {
        Error::EmptyContainer { container: "queue" }
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_fifo() {
        let mut q = Queue::new();
        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.len(), 3);
        assert_eq!(*q.peek().unwrap(), 1);
        assert_eq!(q.dequeue().unwrap(), 1);
        assert_eq!(q.dequeue().unwrap(), 2);
        assert_eq!(q.dequeue().unwrap(), 3);
        assert!(q.is_empty());
    }

    #[test]
    fn test_queue_empty_errors() {
        let mut q: Queue<i32> = Queue::new();
        assert_eq!(
            q.dequeue().unwrap_err(),
            Error::EmptyContainer { container: "queue" }
        );
        assert!(q.peek().is_err());
    }

    #[test]
    fn test_queue_wraps_then_grows() {
        let mut q = Queue::with_capacity(2).unwrap();
        q.enqueue('a');
        q.enqueue('b');
        assert_eq!(q.dequeue().unwrap(), 'a');
        // tail wraps to slot 0
        q.enqueue('c');
        // full with head == 1: growing must keep b before c
        q.enqueue('d');
        assert_eq!(q.capacity(), 4);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec!['b', 'c', 'd']);
        assert_eq!(q.dequeue().unwrap(), 'b');
        assert_eq!(q.dequeue().unwrap(), 'c');
        assert_eq!(q.dequeue().unwrap(), 'd');
    }

    #[test]
    fn test_queue_many_cycles() {
        let mut q = Queue::new();
        let mut expected = 0;
        for round in 0..100 {
            for i in 0..7 {
                q.enqueue(round * 7 + i);
            }
            for _ in 0..5 {
                assert_eq!(q.dequeue().unwrap(), expected);
                expected += 1;
            }
        }
        while let Ok(v) = q.dequeue() {
            assert_eq!(v, expected);
            expected += 1;
        }
        assert_eq!(expected, 700);
    }

    #[test]
    fn test_queue_clear() {
        let mut q = Queue::new();
        for i in 0..5 {
            q.enqueue(i);
        }
        let capacity = q.capacity();
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.capacity(), capacity);
        q.enqueue(9);
        assert_eq!(q.dequeue().unwrap(), 9);
    }
}
