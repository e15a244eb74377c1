//! Disjoint Set (Union-Find) implementation.
//!
//! Elements are the integers `0..n`. Each element starts as its own singleton
//! set with rank 0.
//!
//! - `find` uses recursive path compression: every node on the path is re-pointed
//!   directly at the root.
//! - `union_sets` uses union by rank; on equal ranks the second root is attached
//!   under the first and the first's rank is incremented.

use crate::collections::vec::DynamicArray;
use crate::error::{Error, Result};

/// A Disjoint Set (Union-Find) data structure.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    /// Parent pointers. A root points at itself.
    parent: DynamicArray<usize>,
    /// Rank (height upper bound) for union-by-rank.
    rank: DynamicArray<u32>,
}

impl DisjointSet {
    /// Creates a disjoint set of `n` singleton elements.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: DynamicArray::filled(0, n),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Finds the representative of the set containing `x`, with path compression.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `x` is not an element.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.find_root(x))
    }

    /// Unites the sets containing `x` and `y`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if either id is not an element.
    pub fn union_sets(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        let root_x = self.find_root(x);
        let root_y = self.find_root(y);

        if root_x == root_y {
            return Ok(false);
        }

        let rank_x = self.rank[root_x];
        let rank_y = self.rank[root_y];

        if rank_x < rank_y {
            self.parent[root_x] = root_y;
        } else if rank_x > rank_y {
            self.parent[root_y] = root_x;
        } else {
            // Same rank, attach y under x and bump x
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }

        Ok(true)
    }

    /// Returns `true` if `x` and `y` belong to the same set.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if either id is not an element.
    pub fn is_same_set(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Returns the number of distinct sets.
    pub fn set_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .count()
    }

    fn find_root(&mut self, x: usize) -> usize {
        let parent = self.parent[x];
        if parent == x {
            return x;
        }
        let root = self.find_root(parent);
        self.parent[x] = root;
        root
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: x,
                len: self.len(),
            })
        }
    }
}

impl Default for DisjointSet {
    fn default() -> Self {
        Self::new(0)
    }
}
