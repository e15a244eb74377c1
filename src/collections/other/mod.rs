//! Auxiliary containers built on [`DynamicArray`](crate::collections::DynamicArray).
//!
//! Each graph algorithm allocates the ones it needs for the duration of a call:
//! BFS uses [`Queue`], DFS uses [`Stack`], Dijkstra and Prim use [`PriorityQueue`]
//! and Kruskal uses [`DisjointSet`].

pub mod binary_heap;
pub mod disjoint_set;
pub mod pair;
pub mod queue;
pub mod stack;

pub use binary_heap::PriorityQueue;
pub use disjoint_set::DisjointSet;
pub use pair::Pair;
pub use queue::Queue;
pub use stack::Stack;
