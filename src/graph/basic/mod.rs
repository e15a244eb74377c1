//! Basic graph implementations.
//!
//! This module contains the adjacency-list representation every algorithm in the
//! crate consumes and produces.

pub mod adjacency_graph;

pub use adjacency_graph::{Edge, Graph, Weight};
