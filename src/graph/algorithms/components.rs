//! Connected components via [`DisjointSet`].

use crate::collections::{DisjointSet, DynamicArray};
use crate::error::Result;
use crate::graph::Graph;

/// Computes the connected components of the graph, ignoring edge direction.
///
/// Returns an array where index `v - 1` holds the component label of vertex `v`.
/// The label is the smallest vertex id in that component, so labels do not depend
/// on the order in which edges were inserted.
pub fn connected_components(graph: &Graph) -> Result<DynamicArray<usize>> {
    let n = graph.vertex_count();
    let mut sets = DisjointSet::new(n);

    for (src, dest, _) in graph.edges() {
        sets.union_sets(src - 1, dest - 1)?;
    }

    // Smallest vertex id per root.
    let mut smallest = DynamicArray::filled(usize::MAX, n);
    for vertex in graph.vertices() {
        let root = sets.find(vertex - 1)?;
        smallest[root] = smallest[root].min(vertex);
    }

    let mut labels = DynamicArray::filled(0, n);
    for vertex in graph.vertices() {
        let root = sets.find(vertex - 1)?;
        labels[vertex - 1] = smallest[root];
    }
    Ok(labels)
}

/// Returns the number of connected components, ignoring edge direction.
pub fn component_count(graph: &Graph) -> Result<usize> {
    let mut sets = DisjointSet::new(graph.vertex_count());
    for (src, dest, _) in graph.edges() {
        sets.union_sets(src - 1, dest - 1)?;
    }
    Ok(sets.set_count())
}
