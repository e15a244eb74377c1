//! Minimum spanning trees: Prim (single tree from vertex 1) and Kruskal (forest).

use super::require_non_negative;
use super::sort::quicksort_by;
use crate::collections::{DisjointSet, DynamicArray, Pair, PriorityQueue};
use crate::error::{Error, Result};
use crate::graph::{Graph, Weight};

/// Builds a minimum spanning tree with Prim's algorithm, rooted at vertex 1.
///
/// `key[v]` is the lightest known edge weight connecting `v` to the tree. The
/// priority queue uses lazy deletion: entries for vertices already in the tree are
/// skipped when popped. Each vertex joining the tree (other than the root) brings
/// the edge `parent -> vertex` with the weight stored in the input graph.
///
/// On a disconnected graph only vertex 1's component is spanned; vertices outside
/// it are left isolated in the result.
///
/// # Errors
/// - [`Error::NegativeWeight`] if any edge weight is negative,
/// - [`Error::EmptyGraph`] if the graph has no vertices.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count()))
)]
pub fn prim(graph: &Graph) -> Result<Graph> {
    require_non_negative(graph)?;
    let n = graph.vertex_count();
    if n == 0 {
        return Err(Error::EmptyGraph);
    }

    let mut tree = Graph::new(n);
    let mut key: DynamicArray<Option<Weight>> = DynamicArray::filled(None, n);
    let mut in_mst = DynamicArray::filled(false, n);
    let mut parent: DynamicArray<Option<usize>> = DynamicArray::filled(None, n);
    let mut heap: PriorityQueue<usize, Weight> = PriorityQueue::new();

    key[0] = Some(0);
    heap.push(1, 0);

    while let Ok((current, _)) = heap.dequeue().map(Pair::into_tuple) {
        if in_mst[current - 1] {
            continue;
        }
        in_mst[current - 1] = true;

        if let Some(from) = parent[current - 1] {
            let weight = graph
                .edge_weight(from, current)
                .ok_or(Error::EdgeNotFound {
                    src: from,
                    dest: current,
                })?;
            tree.add_directed_edge(from, current, weight)?;
        }

        for edge in graph.adjacent(current)? {
            let (next, weight) = edge.into_tuple();
            if in_mst[next - 1] {
                continue;
            }
            if key[next - 1].map_or(true, |known| weight < known) {
                key[next - 1] = Some(weight);
                parent[next - 1] = Some(current);
                heap.push(next, weight);
            }
        }
    }

    #[cfg(feature = "tracing")]
    {
        let unreached = in_mst.iter().filter(|&&reached| !reached).count();
        if unreached > 0 {
            tracing::debug!(unreached, "graph is disconnected, unreached vertices left isolated");
        }
    }

    Ok(tree)
}

/// Builds a minimum spanning forest with Kruskal's algorithm.
///
/// Each undirected edge is collected once (from the endpoint with the smaller id),
/// the candidates are sorted by weight with [`quicksort_by`], and an edge
/// `u -> v` (`u < v`) is kept whenever `u` and `v` are still in different sets.
/// Ties between equal weights are broken arbitrarily.
///
/// # Errors
/// - [`Error::NegativeWeight`] if any edge weight is negative,
/// - [`Error::EmptyGraph`] if the graph has no vertices.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count()))
)]
pub fn kruskal(graph: &Graph) -> Result<Graph> {
    require_non_negative(graph)?;
    let n = graph.vertex_count();
    if n == 0 {
        return Err(Error::EmptyGraph);
    }

    let mut candidates: DynamicArray<Pair<(usize, usize), Weight>> = graph
        .edges()
        .filter(|&(src, dest, _)| src < dest)
        .map(|(src, dest, weight)| Pair::new((src, dest), weight))
        .collect();
    quicksort_by(candidates.as_mut_slice(), Pair::cmp_second);

    let mut tree = Graph::new(n);
    let mut sets = DisjointSet::new(n);
    let mut kept = 0;

    for candidate in &candidates {
        let ((src, dest), weight) = candidate.into_tuple();
        if sets.union_sets(src - 1, dest - 1)? {
            tree.add_directed_edge(src, dest, weight)?;
            kept += 1;
            if kept == n - 1 {
                break;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(kept, components = sets.set_count(), "spanning forest built");
    Ok(tree)
}
