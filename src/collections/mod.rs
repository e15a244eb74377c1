//! Containers used by the graph and its algorithms.
//!
//! Collections are organized by data structure type:
//! - `vec`: the growable array every other container is built on
//! - `other`: queue, stack, priority queue, disjoint set and the `Pair` record

pub mod other;
pub mod vec;

// Re-export commonly used types from submodules
pub use other::{DisjointSet, Pair, PriorityQueue, Queue, Stack};
pub use vec::DynamicArray;
