//! Breadth-first and depth-first traversal trees.

use super::validate_vertex;
use crate::collections::{DynamicArray, Queue, Stack};
use crate::error::Result;
use crate::graph::Graph;

/// Visitation marker used by [`dfs`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    /// On the stack, still has neighbors to explore.
    Open,
    Closed,
}

/// Builds the breadth-first search tree rooted at `root`.
///
/// Vertices are marked visited when they are discovered (enqueue time), so each
/// vertex is enqueued at most once. For every newly discovered neighbor the edge
/// `current -> neighbor` is added to the result with its original weight.
///
/// # Errors
/// Returns [`Error::VertexOutOfRange`](crate::Error::VertexOutOfRange) if `root`
/// is not a vertex of `graph`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count()))
)]
pub fn bfs(graph: &Graph, root: usize) -> Result<Graph> {
    validate_vertex(graph, root)?;
    let mut tree = Graph::new(graph.vertex_count());
    let mut visited = DynamicArray::filled(false, graph.vertex_count());
    let mut queue = Queue::new();

    visited[root - 1] = true;
    queue.enqueue(root);

    while let Ok(current) = queue.dequeue() {
        for edge in graph.adjacent(current)? {
            let (next, weight) = edge.into_tuple();
            if !visited[next - 1] {
                visited[next - 1] = true;
                queue.enqueue(next);
                tree.add_directed_edge(current, next, weight)?;
            }
        }
    }

    Ok(tree)
}

/// Builds the depth-first search tree rooted at `root`.
///
/// The vertex on top of the stack pushes its first unvisited neighbor (in
/// adjacency order) and the scan restarts from that neighbor. A vertex with no
/// unvisited neighbor is closed and popped. The resulting edge set therefore
/// depends on adjacency-list insertion order.
///
/// # Errors
/// Returns [`Error::VertexOutOfRange`](crate::Error::VertexOutOfRange) if `root`
/// is not a vertex of `graph`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count()))
)]
pub fn dfs(graph: &Graph, root: usize) -> Result<Graph> {
    validate_vertex(graph, root)?;
    let mut tree = Graph::new(graph.vertex_count());
    let mut state = DynamicArray::filled(VisitState::Unvisited, graph.vertex_count());
    let mut stack = Stack::new();

    state[root - 1] = VisitState::Open;
    stack.push(root);

    while let Ok(&current) = stack.peek() {
        let next = graph
            .adjacent(current)?
            .iter()
            .find(|edge| state[*edge.first() - 1] == VisitState::Unvisited)
            .map(|edge| edge.into_tuple());

        match next {
            Some((next, weight)) => {
                state[next - 1] = VisitState::Open;
                stack.push(next);
                tree.add_directed_edge(current, next, weight)?;
            }
            None => {
                state[current - 1] = VisitState::Closed;
                stack.pop()?;
            }
        }
    }

    debug_assert!(state.iter().all(|&s| s != VisitState::Open));
    Ok(tree)
}
