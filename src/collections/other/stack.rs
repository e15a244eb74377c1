//! `Stack`: a LIFO stack over a [`DynamicArray`].

use crate::collections::vec::DynamicArray;
use crate::error::{Error, Result};
use core::fmt;

/// A last-in first-out stack.
#[derive(Clone)]
pub struct Stack<T> {
    data: DynamicArray<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            data: DynamicArray::new(),
        }
    }

    /// Number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pushes an element on top of the stack.
    pub fn push(&mut self, value: T) {
        self.data.push_back(value);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.data.pop().ok_or(Error::EmptyContainer { container: "stack" })
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] if the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        self.data.last().ok_or(Error::EmptyContainer { container: "stack" })
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("len", &self.len())
            .field("top", &self.data.last())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_lifo() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(*s.peek().unwrap(), 3);
        assert_eq!(s.pop().unwrap(), 3);
        assert_eq!(s.pop().unwrap(), 2);
        s.push(4);
        assert_eq!(s.pop().unwrap(), 4);
        assert_eq!(s.pop().unwrap(), 1);
        assert!(s.is_empty());
    }

    #[test]
    fn test_stack_empty_errors() {
        let mut s: Stack<u8> = Stack::new();
        assert!(s.pop().unwrap_err().is_out_of_range());
        assert!(s.peek().is_err());
    }

    #[test]
    fn test_stack_grows() {
        let mut s = Stack::new();
        for i in 0..1000 {
            s.push(i);
        }
        assert_eq!(s.len(), 1000);
        for i in (0..1000).rev() {
            assert_eq!(s.pop().unwrap(), i);
        }
    }
}
