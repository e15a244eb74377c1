//! `Pair`: a plain two-field record.
//!
//! Adjacency lists store `Pair<neighbor, weight>` and the priority queue stores
//! `Pair<item, priority>`. Where an order is needed only `second` takes part in
//! the comparison, see [`Pair::cmp_second`].
//!
//! A pair cannot be changed once built. Its fields are read through
//! [`Pair::first`] and [`Pair::second`] or taken apart with [`Pair::into_tuple`].

use core::cmp::Ordering;
use core::fmt;

/// An immutable 2-tuple.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    /// Creates a new pair.
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// First component (a vertex id in adjacency lists and heap entries).
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Second component (a weight or a priority).
    #[inline]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Splits the pair into a tuple.
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B: Ord> Pair<A, B> {
    /// Compares two pairs by their second component only.
    #[inline]
    pub fn cmp_second(&self, other: &Self) -> Ordering {
        self.second.cmp(&other.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pair")
            .field(&self.first)
            .field(&self.second)
            .finish()
    }
}
