//! `DynamicArray`: a growable, indexable sequence with explicit capacity doubling.
//!
//! This is the backing store for every other container in the crate (queue, stack,
//! priority queue, disjoint set) and for the per-vertex adjacency lists of
//! [`Graph`](crate::graph::Graph).
//!
//! Design:
//! - The array owns its buffer; dropping the array releases it.
//! - Capacity is managed by the array itself: it starts at
//!   [`DynamicArray::DEFAULT_CAPACITY`] (or the requested capacity) and doubles
//!   whenever a push finds the array full.
//! - Checked accessors return [`Error::IndexOutOfRange`]; `Index`/`IndexMut`
//!   panic like slice indexing does.
//! - `Clone` performs a deep copy of the live elements and keeps the capacity.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push_back` | O(1) amortized |
//! | `get` / `set` | O(1) |
//! | `remove_at` | O(n) |

use crate::error::{Error, Result};
use core::fmt;
use core::ops::{Index, IndexMut};
use core::slice;

/// A growable array that doubles its capacity on overflow.
pub struct DynamicArray<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    /// Capacity of an array created with [`DynamicArray::new`].
    pub const DEFAULT_CAPACITY: usize = 2;

    /// Creates an empty array with the default capacity.
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(Self::DEFAULT_CAPACITY),
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// Creates an empty array able to hold `capacity` elements before growing.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity { capacity });
        }
        Ok(Self {
            data: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the array can hold before it has to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the next push will grow the buffer.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Appends an element, doubling the capacity first if the array is full.
    pub fn push_back(&mut self, value: T) {
        if self.is_full() {
            self.grow(self.capacity * 2);
        }
        self.data.push(value);
    }

    /// Removes and returns the last element, if any.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Returns a shared reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.data
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns an exclusive reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.data
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Overwrites the element at `index`, returning the previous value.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Removes the element at `index`, shifting everything after it one slot left.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.data.remove(index))
    }

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    /// Returns the last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Removes every element. The capacity is left untouched.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the index of the first element matching `pred`.
    pub fn position<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.data.iter().position(pred)
    }

    /// Iterates over the live elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the live elements in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Views the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Views the live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn grow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > self.capacity);
        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Creates an array of `len` copies of `value`.
    ///
    /// The capacity is `len`, or the default capacity for an empty array.
    pub fn filled(value: T, len: usize) -> Self {
        let capacity = len.max(Self::DEFAULT_CAPACITY);
        let mut data = Vec::with_capacity(capacity);
        data.resize(len, value);
        Self { data, capacity }
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend(self.data.iter().cloned());
        Self {
            data,
            capacity: self.capacity,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clear();
        if self.capacity < source.capacity {
            self.grow(source.capacity);
        }
        self.data.extend(source.data.iter().cloned());
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        for value in iter {
            array.push_back(value);
        }
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_array() {
        let arr: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(arr.len(), 0);
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), DynamicArray::<i32>::DEFAULT_CAPACITY);
    }

    #[test]
    fn test_push_and_get() {
        let mut arr = DynamicArray::new();
        arr.push_back(5);
        arr.push_back(10);
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0], 5);
        assert_eq!(*arr.get(1).unwrap(), 10);
        assert!(!arr.is_empty());
    }

    #[test]
    fn test_capacity_doubles() {
        let mut arr = DynamicArray::new();
        for i in 0..3 {
            arr.push_back(i);
        }
        assert_eq!(arr.capacity(), 4);
        for i in 3..5 {
            arr.push_back(i);
        }
        assert_eq!(arr.capacity(), 8);
        assert!(arr.len() <= arr.capacity());
    }

    #[test]
    fn test_with_capacity() {
        let arr: DynamicArray<u8> = DynamicArray::with_capacity(16).unwrap();
        assert_eq!(arr.capacity(), 16);
        assert_eq!(
            DynamicArray::<u8>::with_capacity(0).unwrap_err(),
            Error::InvalidCapacity { capacity: 0 }
        );
    }

    #[test]
    fn test_set_returns_previous() {
        let mut arr: DynamicArray<i32> = [5, 10].into_iter().collect();
        assert_eq!(arr.set(1, 15).unwrap(), 10);
        assert_eq!(arr.as_slice(), &[5, 15]);
        assert!(arr.set(2, 1).is_err());
    }

    #[test]
    fn test_remove_at_shifts_left() {
        let mut arr: DynamicArray<i32> = (1..=5).collect();
        assert_eq!(arr.remove_at(1).unwrap(), 2);
        assert_eq!(arr.as_slice(), &[1, 3, 4, 5]);
        assert_eq!(arr.remove_at(3).unwrap(), 5);
        assert_eq!(arr.as_slice(), &[1, 3, 4]);
        assert_eq!(
            arr.remove_at(3).unwrap_err(),
            Error::IndexOutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn test_out_of_range_on_empty() {
        let mut arr: DynamicArray<i32> = DynamicArray::new();
        assert!(arr.get(0).is_err());
        assert!(arr.get_mut(0).is_err());
        assert!(arr.remove_at(0).is_err());
    }

    #[test]
    #[should_panic]
    fn test_index_panics_out_of_bounds() {
        let arr: DynamicArray<i32> = DynamicArray::new();
        let _ = arr[0];
    }

    #[test]
    fn test_clone_is_deep() {
        let mut arr1: DynamicArray<i32> = [5, 10].into_iter().collect();
        let arr2 = arr1.clone();
        arr1.push_back(15);
        arr1[0] = 99;
        assert_eq!(arr1.len(), 3);
        assert_eq!(arr2.len(), 2);
        assert_eq!(arr2.as_slice(), &[5, 10]);
    }

    #[test]
    fn test_clone_from_replaces_contents() {
        let source: DynamicArray<i32> = (0..6).collect();
        let mut target: DynamicArray<i32> = [42].into_iter().collect();
        target.clone_from(&source);
        assert_eq!(target, source);
        assert!(target.capacity() >= source.len());
    }

    #[test]
    fn test_filled() {
        let arr = DynamicArray::filled(false, 4);
        assert_eq!(arr.len(), 4);
        assert!(arr.iter().all(|&b| !b));
        let empty: DynamicArray<bool> = DynamicArray::filled(true, 0);
        assert_eq!(empty.capacity(), DynamicArray::<bool>::DEFAULT_CAPACITY);
    }
}
