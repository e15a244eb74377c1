//! # `arbor` - Graph Algorithms on Hand-Rolled Containers
//!
//! A small weighted-graph library together with the containers it is built on and
//! five classic algorithms that turn a graph into a tree or forest.
//!
//! ## Layers
//!
//! 1. **Containers** (`collections`):
//!    - [`DynamicArray`]: growable array, doubles its capacity when full
//!    - [`Queue`]: FIFO over a circular buffer
//!    - [`Stack`]: LIFO
//!    - [`PriorityQueue`]: binary min-heap of [`Pair`]s keyed on `second`
//!    - [`DisjointSet`]: union-find with path compression and union by rank
//!
//! 2. **Graph** ([`Graph`]): adjacency lists of `(neighbor, weight)` pairs with
//!    vertices numbered `1..=N`.
//!
//! 3. **Algorithms** (`graph::algorithms`): [`bfs`], [`dfs`], [`dijkstra`],
//!    [`prim`] and [`kruskal`]. Each borrows the input graph and returns a new graph
//!    with the same vertex count holding only the selected directed edges.
//!
//! ## Errors
//!
//! Fallible operations return [`Result`]. Errors are either invalid arguments
//! (bad vertex ids, self-loops, duplicate edges, negative weights, ...) or
//! out-of-range accesses on a container; see [`ErrorKind`]. A failing call leaves
//! its receiver unchanged.
//!
//! ## Logging
//!
//! With the `tracing` feature (on by default) algorithms are instrumented with
//! `tracing` spans at `debug` level, and repairing a one-directional edge in
//! [`Graph::add_edge`] logs a warning. The library never installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use arbor::{kruskal, prim, Graph};
//!
//! let mut g = Graph::new(4);
//! g.add_edge(1, 2, 3)?;
//! g.add_edge(2, 3, 1)?;
//! g.add_edge(1, 3, 4)?;
//! g.add_edge(3, 4, 2)?;
//!
//! let mst = prim(&g)?;
//! assert_eq!(mst.total_weight(), 6);
//! assert_eq!(kruskal(&g)?.total_weight(), mst.total_weight());
//! # Ok::<(), arbor::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{DisjointSet, DynamicArray, Pair, PriorityQueue, Queue, Stack};
pub use error::{Error, ErrorKind, Result};
pub use graph::algorithms::{component_count, connected_components, shortest_distances};
pub use graph::{bfs, dfs, dijkstra, kruskal, prim, Edge, Graph, Weight};
