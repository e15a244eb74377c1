//! Weighted graphs and the algorithms that run over them.
//!
//! Graph code is organized into:
//! - `basic`: the adjacency-list [`Graph`] itself
//! - `algorithms`: traversals, shortest paths, spanning trees and components

pub mod algorithms;
pub mod basic;

// Re-export commonly used types from submodules
pub use algorithms::{bfs, dfs, dijkstra, kruskal, prim};
pub use basic::{Edge, Graph, Weight};
