//! Traversal and optimisation algorithms over [`Graph`].
//!
//! Every algorithm borrows its input immutably and returns a **new** graph with the
//! same vertex count that holds only the directed edges it selected (a tree or a
//! forest). Scratch containers (visited flags, queues, heaps, disjoint sets) live
//! for the duration of a single call.
//!
//! | Algorithm | Working set | Result |
//! |-----------|-------------|--------|
//! | [`bfs`] | [`Queue`](crate::collections::Queue) | BFS tree |
//! | [`dfs`] | [`Stack`](crate::collections::Stack) | DFS tree |
//! | [`dijkstra`] | [`PriorityQueue`](crate::collections::PriorityQueue) | shortest-path tree |
//! | [`prim`] | [`PriorityQueue`](crate::collections::PriorityQueue) | minimum spanning tree of vertex 1's component |
//! | [`kruskal`] | [`DisjointSet`](crate::collections::DisjointSet) | minimum spanning forest |

pub mod components;
pub mod shortest_path;
pub mod sort;
pub mod spanning_tree;
pub mod traversal;

pub use components::{component_count, connected_components};
pub use shortest_path::{dijkstra, shortest_distances};
pub use spanning_tree::{kruskal, prim};
pub use traversal::{bfs, dfs};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Checks that `vertex` names a vertex of `graph`.
pub(crate) fn validate_vertex(graph: &Graph, vertex: usize) -> Result<()> {
    if vertex == 0 || vertex > graph.vertex_count() {
        return Err(Error::VertexOutOfRange {
            vertex,
            vertex_count: graph.vertex_count(),
        });
    }
    Ok(())
}

/// Rejects graphs holding a negative edge weight.
pub(crate) fn require_non_negative(graph: &Graph) -> Result<()> {
    if graph.has_negative_edge() {
        return Err(Error::NegativeWeight);
    }
    Ok(())
}
