//! A weighted adjacency-list graph with vertices numbered `1..=N`.
//!
//! Each vertex owns a [`DynamicArray`] of `Pair<neighbor, weight>` entries, one per
//! outgoing edge. Undirected edges are stored as two directed entries.
//!
//! Invariants:
//! - no self-loops,
//! - at most one entry for any ordered pair `(src, dest)`,
//! - `add_edge` leaves entries in both lists, `add_directed_edge` only in `src`'s.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_edge` | \(O(\text{out-degree})\) | Checks for existence first |
//! | `remove_edge` | \(O(\text{out-degree})\) | Linear scan, then shift |
//! | `has_edge` | \(O(\text{out-degree})\) | Linear scan of adjacency list |
//! | `neighbors` | \(O(\text{out-degree})\) | Returns a copy |
//! | `adjacent` | \(O(1)\) | Borrowed view |

use crate::collections::{DynamicArray, Pair, Queue};
use crate::error::{Error, Result};
use core::fmt;

/// Edge weight type.
pub type Weight = i64;

/// One adjacency entry: `first` is the neighbor's vertex id, `second` the weight.
pub type Edge = Pair<usize, Weight>;

/// A weighted graph stored as adjacency lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    adjacency: DynamicArray<DynamicArray<Edge>>,
}

impl Graph {
    /// Weight used by [`Graph::add_unweighted_edge`] and
    /// [`Graph::add_unweighted_directed_edge`].
    pub const DEFAULT_WEIGHT: Weight = 1;

    /// Creates a graph with `vertex_count` vertices and zero edges.
    pub fn new(vertex_count: usize) -> Self {
        let mut adjacency = DynamicArray::new();
        for _ in 0..vertex_count {
            adjacency.push_back(DynamicArray::new());
        }
        Self { adjacency }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Iterates over the vertex ids `1..=N`.
    pub fn vertices(&self) -> core::ops::RangeInclusive<usize> {
        1..=self.vertex_count()
    }

    /// Returns the number of stored directed entries.
    ///
    /// An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(DynamicArray::len).sum()
    }

    /// Adds an undirected edge `src <-> dest`.
    ///
    /// If only one direction already exists, the missing one is added and a
    /// warning is logged.
    ///
    /// # Errors
    /// - [`Error::VertexOutOfRange`] if either id is outside `1..=N`,
    /// - [`Error::SelfLoop`] if `src == dest`,
    /// - [`Error::DuplicateEdge`] if both directions already exist.
    pub fn add_edge(&mut self, src: usize, dest: usize, weight: Weight) -> Result<()> {
        let (s, d) = self.check_endpoints(src, dest)?;
        let forward = self.has_edge(src, dest);
        let backward = self.has_edge(dest, src);

        match (forward, backward) {
            (true, true) => return Err(Error::DuplicateEdge { src, dest }),
            (true, false) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(src, dest, "edge only existed as {src}->{dest}, adding {dest}->{src}");
                self.adjacency[d].push_back(Pair::new(src, weight));
            }
            (false, true) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(src, dest, "edge only existed as {dest}->{src}, adding {src}->{dest}");
                self.adjacency[s].push_back(Pair::new(dest, weight));
            }
            (false, false) => {
                self.adjacency[s].push_back(Pair::new(dest, weight));
                self.adjacency[d].push_back(Pair::new(src, weight));
            }
        }
        Ok(())
    }

    /// Adds an undirected edge with weight [`Graph::DEFAULT_WEIGHT`].
    ///
    /// # Errors
    /// Same as [`Graph::add_edge`].
    pub fn add_unweighted_edge(&mut self, src: usize, dest: usize) -> Result<()> {
        self.add_edge(src, dest, Self::DEFAULT_WEIGHT)
    }

    /// Adds the directed edge `src -> dest`.
    ///
    /// # Errors
    /// - [`Error::VertexOutOfRange`] if either id is outside `1..=N`,
    /// - [`Error::SelfLoop`] if `src == dest`,
    /// - [`Error::DuplicateEdge`] if `src -> dest` already exists.
    pub fn add_directed_edge(&mut self, src: usize, dest: usize, weight: Weight) -> Result<()> {
        let (s, _) = self.check_endpoints(src, dest)?;
        if self.has_edge(src, dest) {
            return Err(Error::DuplicateEdge { src, dest });
        }
        self.adjacency[s].push_back(Pair::new(dest, weight));
        Ok(())
    }

    /// Adds a directed edge with weight [`Graph::DEFAULT_WEIGHT`].
    ///
    /// # Errors
    /// Same as [`Graph::add_directed_edge`].
    pub fn add_unweighted_directed_edge(&mut self, src: usize, dest: usize) -> Result<()> {
        self.add_directed_edge(src, dest, Self::DEFAULT_WEIGHT)
    }

    /// Removes the directed edge `src -> dest`.
    ///
    /// Only that direction is removed: if `dest -> src` exists it is left in place.
    ///
    /// # Errors
    /// - [`Error::VertexOutOfRange`] if either id is outside `1..=N`,
    /// - [`Error::EdgeNotFound`] if `src -> dest` does not exist.
    pub fn remove_edge(&mut self, src: usize, dest: usize) -> Result<Weight> {
        let s = self.index_of(src)?;
        self.index_of(dest)?;
        let pos = self.adjacency[s]
            .position(|e| *e.first() == dest)
            .ok_or(Error::EdgeNotFound { src, dest })?;
        let removed = self.adjacency[s].remove_at(pos)?;
        Ok(*removed.second())
    }

    /// Returns `true` if the directed edge `src -> dest` exists.
    ///
    /// Out-of-range ids simply yield `false`.
    pub fn has_edge(&self, src: usize, dest: usize) -> bool {
        self.edge_weight(src, dest).is_some()
    }

    /// Returns the weight of `src -> dest`, if that edge exists.
    pub fn edge_weight(&self, src: usize, dest: usize) -> Option<Weight> {
        let s = self.index_of(src).ok()?;
        self.adjacency[s]
            .iter()
            .find(|e| *e.first() == dest)
            .map(|e| *e.second())
    }

    /// Returns a copy of the adjacency list of `vertex`.
    ///
    /// # Errors
    /// Returns [`Error::VertexOutOfRange`] if `vertex` is outside `1..=N`.
    pub fn neighbors(&self, vertex: usize) -> Result<DynamicArray<Edge>> {
        self.adjacent(vertex).cloned()
    }

    /// Borrows the adjacency list of `vertex`.
    ///
    /// # Errors
    /// Returns [`Error::VertexOutOfRange`] if `vertex` is outside `1..=N`.
    pub fn adjacent(&self, vertex: usize) -> Result<&DynamicArray<Edge>> {
        let v = self.index_of(vertex)?;
        Ok(&self.adjacency[v])
    }

    /// Returns the out-degree of `vertex`.
    ///
    /// # Errors
    /// Returns [`Error::VertexOutOfRange`] if `vertex` is outside `1..=N`.
    pub fn neighbor_count(&self, vertex: usize) -> Result<usize> {
        Ok(self.adjacent(vertex)?.len())
    }

    /// Returns the `i`-th adjacency entry of `vertex`.
    ///
    /// # Errors
    /// - [`Error::VertexOutOfRange`] if `vertex` is outside `1..=N`,
    /// - [`Error::IndexOutOfRange`] if `i >= out-degree`.
    pub fn neighbor_at(&self, vertex: usize, i: usize) -> Result<Edge> {
        self.adjacent(vertex)?.get(i).copied()
    }

    /// Returns `true` if any stored edge has a negative weight.
    pub fn has_negative_edge(&self) -> bool {
        self.adjacency
            .iter()
            .any(|list| list.iter().any(|e| *e.second() < 0))
    }

    /// Sums the weights of every stored directed entry.
    ///
    /// The sum saturates at `Weight::MIN` / `Weight::MAX` instead of overflowing.
    pub fn total_weight(&self) -> Weight {
        self.edges()
            .fold(0, |total: Weight, (_, _, w)| total.saturating_add(w))
    }

    /// Iterates over every directed entry as `(src, dest, weight)`, in vertex order
    /// and then adjacency order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, list)| {
            list.iter().map(move |e| (i + 1, *e.first(), *e.second()))
        })
    }

    /// Returns `true` if `to` can be reached from `from` by following stored edges.
    ///
    /// Every vertex reaches itself. Out-of-range ids yield `false`.
    pub fn has_path(&self, from: usize, to: usize) -> bool {
        if self.index_of(from).is_err() || self.index_of(to).is_err() {
            return false;
        }
        if from == to {
            return true;
        }

        let mut visited = DynamicArray::filled(false, self.vertex_count());
        let mut queue = Queue::new();
        visited[from - 1] = true;
        queue.enqueue(from);

        while let Ok(current) = queue.dequeue() {
            for edge in &self.adjacency[current - 1] {
                let next = *edge.first();
                if next == to {
                    return true;
                }
                if !visited[next - 1] {
                    visited[next - 1] = true;
                    queue.enqueue(next);
                }
            }
        }
        false
    }

    /// Renders the graph in the `print_graph` text format.
    ///
    /// # Errors
    /// Returns [`Error::EmptyGraph`] if the graph has no vertices.
    pub fn render(&self) -> Result<String> {
        if self.vertex_count() == 0 {
            return Err(Error::EmptyGraph);
        }
        Ok(self.to_string())
    }

    /// Prints the graph to stdout, one line per vertex.
    ///
    /// # Errors
    /// Returns [`Error::EmptyGraph`] if the graph has no vertices.
    pub fn print_graph(&self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    /// Maps a vertex id to its adjacency slot.
    fn index_of(&self, vertex: usize) -> Result<usize> {
        if vertex == 0 || vertex > self.vertex_count() {
            return Err(Error::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            });
        }
        Ok(vertex - 1)
    }

    fn check_endpoints(&self, src: usize, dest: usize) -> Result<(usize, usize)> {
        let s = self.index_of(src)?;
        let d = self.index_of(dest)?;
        if s == d {
            return Err(Error::SelfLoop { vertex: src });
        }
        Ok((s, d))
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, list) in self.adjacency.iter().enumerate() {
            let src = i + 1;
            if list.is_empty() {
                writeln!(f, "Vertex {src} has no neighbors.")?;
                continue;
            }
            for (j, edge) in list.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{{{src}->{} ({})}}", edge.first(), edge.second())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_is_empty() {
        let g = Graph::new(4);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_add_edge_both_directions() {
        let mut g = Graph::new(3);
        g.add_edge(1, 2, 7).unwrap();
        assert!(g.has_edge(1, 2));
        assert!(g.has_edge(2, 1));
        assert_eq!(g.edge_weight(2, 1), Some(7));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_rejects_bad_arguments() {
        let mut g = Graph::new(3);
        assert_eq!(
            g.add_edge(0, 1, 1).unwrap_err(),
            Error::VertexOutOfRange {
                vertex: 0,
                vertex_count: 3
            }
        );
        assert!(g.add_edge(1, 4, 1).is_err());
        assert_eq!(g.add_edge(2, 2, 1).unwrap_err(), Error::SelfLoop { vertex: 2 });
        g.add_edge(1, 2, 1).unwrap();
        assert_eq!(
            g.add_edge(2, 1, 1).unwrap_err(),
            Error::DuplicateEdge { src: 2, dest: 1 }
        );
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_repairs_one_direction() {
        let mut g = Graph::new(3);
        g.add_directed_edge(1, 3, 4).unwrap();
        g.add_edge(1, 3, 4).unwrap();
        assert!(g.has_edge(3, 1));
        assert_eq!(g.neighbor_count(1).unwrap(), 1);

        let mut g = Graph::new(3);
        g.add_directed_edge(3, 1, 4).unwrap();
        g.add_edge(1, 3, 4).unwrap();
        assert!(g.has_edge(1, 3));
        assert_eq!(g.neighbor_count(3).unwrap(), 1);
    }

    #[test]
    fn test_directed_edge() {
        let mut g = Graph::new(2);
        g.add_unweighted_directed_edge(1, 2).unwrap();
        assert!(g.has_edge(1, 2));
        assert!(!g.has_edge(2, 1));
        assert_eq!(g.edge_weight(1, 2), Some(Graph::DEFAULT_WEIGHT));
        assert_eq!(
            g.add_directed_edge(1, 2, 5).unwrap_err(),
            Error::DuplicateEdge { src: 1, dest: 2 }
        );
        g.add_directed_edge(2, 1, 5).unwrap();
        assert_eq!(g.edge_weight(2, 1), Some(5));
    }

    #[test]
    fn test_remove_edge_one_direction() {
        let mut g = Graph::new(3);
        g.add_edge(1, 2, 3).unwrap();
        assert_eq!(g.remove_edge(1, 2).unwrap(), 3);
        assert!(!g.has_edge(1, 2));
        assert!(g.has_edge(2, 1));
        assert_eq!(
            g.remove_edge(1, 2).unwrap_err(),
            Error::EdgeNotFound { src: 1, dest: 2 }
        );
        assert!(g.remove_edge(1, 9).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_neighbors_is_a_copy() {
        let mut g = Graph::new(3);
        g.add_edge(1, 2, 1).unwrap();
        g.add_edge(1, 3, 2).unwrap();
        let mut copy = g.neighbors(1).unwrap();
        copy.push_back(Pair::new(2, 100));
        assert_eq!(g.neighbor_count(1).unwrap(), 2);
        assert_eq!(g.neighbor_at(1, 1).unwrap(), Pair::new(3, 2));
        assert!(g.neighbor_at(1, 2).unwrap_err().is_out_of_range());
        assert!(g.neighbors(4).is_err());
    }

    #[test]
    fn test_has_negative_edge() {
        let mut g = Graph::new(3);
        g.add_edge(1, 2, 0).unwrap();
        assert!(!g.has_negative_edge());
        g.add_directed_edge(2, 3, -1).unwrap();
        assert!(g.has_negative_edge());
    }

    #[test]
    fn test_has_path() {
        let mut g = Graph::new(5);
        g.add_unweighted_edge(1, 2).unwrap();
        g.add_unweighted_edge(2, 3).unwrap();
        g.add_unweighted_directed_edge(4, 5).unwrap();
        assert!(g.has_path(1, 3));
        assert!(g.has_path(3, 1));
        assert!(g.has_path(4, 5));
        assert!(!g.has_path(5, 4));
        assert!(!g.has_path(1, 4));
        assert!(g.has_path(2, 2));
        assert!(!g.has_path(0, 1));
    }

    #[test]
    fn test_display_format() {
        let mut g = Graph::new(3);
        g.add_edge(1, 2, 4).unwrap();
        g.add_directed_edge(1, 3, 1).unwrap();
        assert_eq!(
            g.to_string(),
            "{1->2 (4)}, {1->3 (1)}\n{2->1 (4)}\nVertex 3 has no neighbors.\n"
        );
    }

    #[test]
    fn test_render_empty_graph() {
        let g = Graph::new(0);
        assert_eq!(g.render().unwrap_err(), Error::EmptyGraph);
        assert!(g.print_graph().is_err());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut g = Graph::new(2);
        g.add_edge(1, 2, 1).unwrap();
        let copy = g.clone();
        g.remove_edge(1, 2).unwrap();
        assert!(copy.has_edge(1, 2));
        assert!(!g.has_edge(1, 2));
    }

    #[test]
    fn test_total_weight_and_edges() {
        let mut g = Graph::new(3);
        g.add_edge(1, 2, 2).unwrap();
        g.add_directed_edge(3, 1, 5).unwrap();
        assert_eq!(g.total_weight(), 9);
        assert_eq!(
            g.edges().collect::<Vec<_>>(),
            vec![(1, 2, 2), (2, 1, 2), (3, 1, 5)]
        );
    }

    #[test]
    fn test_total_weight_saturates() {
        let mut g = Graph::new(3);
        g.add_edge(1, 2, Weight::MAX).unwrap();
        assert_eq!(g.total_weight(), Weight::MAX);
        g.add_edge(2, 3, 1).unwrap();
        assert_eq!(g.total_weight(), Weight::MAX);

        let mut g = Graph::new(2);
        g.add_edge(1, 2, Weight::MIN).unwrap();
        assert_eq!(g.total_weight(), Weight::MIN);
    }
}
