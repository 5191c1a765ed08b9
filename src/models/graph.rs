//! Undirected simple graph model.
//!
//! A graph is a list of undirected edges over dense vertex ids `0..n`.
//! The vertex set is implied by the edges: a vertex exists iff it is an
//! endpoint of at least one edge.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An undirected edge between two vertex ids.
///
/// `(u, v)` and `(v, u)` denote the same edge.
pub type Edge = (usize, usize);

/// An undirected graph given by its edge list.
///
/// Construction does not check well-formedness; run
/// [`validate_graph`](crate::validation::validate_graph) (the minimization
/// driver does this for you) before searching.
///
/// # Example
/// ```
/// use u_chroma::models::Graph;
///
/// let triangle = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
/// assert_eq!(triangle.vertex_count(), 3);
/// assert_eq!(triangle.edge_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with no edges.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Creates a graph from an edge list, keeping the given order.
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        Self {
            edges: edges.into_iter().collect(),
        }
    }

    /// Adds an edge.
    pub fn with_edge(mut self, u: usize, v: usize) -> Self {
        self.edges.push((u, v));
        self
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges. Also the maximal fitness of any coloring.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Distinct endpoints across all edges.
    pub fn vertices(&self) -> BTreeSet<usize> {
        self.edges.iter().flat_map(|&(u, v)| [u, v]).collect()
    }

    /// Number of distinct vertices; the chromosome length.
    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Largest vertex id, `None` for an edgeless graph.
    pub fn max_vertex(&self) -> Option<usize> {
        self.edges.iter().map(|&(u, v)| u.max(v)).max()
    }

    /// Number of edges incident to `vertex`.
    pub fn degree(&self, vertex: usize) -> usize {
        self.edges
            .iter()
            .filter(|&&(u, v)| u == vertex || v == vertex)
            .count()
    }

    /// Largest vertex degree; `max_degree + 1` colors always suffice.
    pub fn max_degree(&self) -> usize {
        self.vertices()
            .into_iter()
            .map(|v| self.degree(v))
            .max()
            .unwrap_or(0)
    }
}

impl FromIterator<Edge> for Graph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_and_counts() {
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (1, 3)]);
        assert_eq!(g.vertices(), BTreeSet::from([0, 1, 2, 3]));
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.max_vertex(), Some(3));
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::new();
        assert!(g.is_empty());
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.max_vertex(), None);
    }

    #[test]
    fn test_builder_and_queries() {
        let g = Graph::new().with_edge(0, 1).with_edge(2, 1);
        assert_eq!(g.edges(), &[(0, 1), (2, 1)]);
        assert_eq!(g.degree(1), 2);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.max_degree(), 2);
        assert_eq!(Graph::new().max_degree(), 0);
    }

    #[test]
    fn test_collect_and_serde() {
        let g: Graph = vec![(0, 1), (1, 2)].into_iter().collect();
        let json = serde_json::to_string(&g).unwrap();
        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
