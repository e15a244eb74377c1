//! Dijkstra's single-source shortest paths.
//!
//! The priority queue is used with lazy deletion: relaxing an edge pushes a fresh
//! `(vertex, distance)` entry instead of decreasing a key, and stale entries are
//! skipped when they are popped for an already-finalized vertex.

use super::{require_non_negative, validate_vertex};
use crate::collections::{DynamicArray, Pair, PriorityQueue};
use crate::error::{Error, Result};
use crate::graph::{Graph, Weight};

/// Per-vertex state after a Dijkstra run, indexed by `vertex - 1`.
struct ShortestPaths {
    dist: DynamicArray<Option<Weight>>,
    parent: DynamicArray<Option<usize>>,
}

fn run(graph: &Graph, start: usize) -> Result<ShortestPaths> {
    require_non_negative(graph)?;
    validate_vertex(graph, start)?;

    let n = graph.vertex_count();
    let mut dist = DynamicArray::filled(None, n);
    let mut visited = DynamicArray::filled(false, n);
    let mut parent = DynamicArray::filled(None, n);
    let mut heap: PriorityQueue<usize, Weight> = PriorityQueue::new();

    dist[start - 1] = Some(0);
    heap.push(start, 0);

    while let Ok((current, current_dist)) = heap.dequeue().map(Pair::into_tuple) {
        if visited[current - 1] {
            continue;
        }
        visited[current - 1] = true;

        for edge in graph.adjacent(current)? {
            let (next, weight) = edge.into_tuple();
            let candidate = current_dist.saturating_add(weight);
            if dist[next - 1].map_or(true, |known| candidate < known) {
                dist[next - 1] = Some(candidate);
                parent[next - 1] = Some(current);
                heap.push(next, candidate);
            }
        }
    }

    Ok(ShortestPaths { dist, parent })
}

/// Builds the shortest-path tree rooted at `start`.
///
/// Each reachable vertex other than `start` receives the edge
/// `parent -> vertex` with the weight stored in the input graph. Unreachable
/// vertices stay isolated.
///
/// # Errors
/// - [`Error::NegativeWeight`] if any edge weight is negative,
/// - [`Error::VertexOutOfRange`] if `start` is not a vertex of `graph`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count()))
)]
pub fn dijkstra(graph: &Graph, start: usize) -> Result<Graph> {
    let paths = run(graph, start)?;
    let mut tree = Graph::new(graph.vertex_count());

    for vertex in graph.vertices() {
        if let Some(parent) = paths.parent[vertex - 1] {
            let weight = graph
                .edge_weight(parent, vertex)
                .ok_or(Error::EdgeNotFound {
                    src: parent,
                    dest: vertex,
                })?;
            tree.add_directed_edge(parent, vertex, weight)?;
        }
    }

    Ok(tree)
}

/// Returns the shortest distance from `start` to every vertex, indexed by
/// `vertex - 1`. Unreachable vertices map to `None`.
///
/// # Errors
/// Same as [`dijkstra`].
pub fn shortest_distances(graph: &Graph, start: usize) -> Result<DynamicArray<Option<Weight>>> {
    Ok(run(graph, start)?.dist)
}
