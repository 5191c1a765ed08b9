//! Input validation for coloring problems.
//!
//! Checks that a graph is well-formed before it is searched:
//! - No self-loops
//! - No edge listed twice, in either orientation
//! - Vertex ids cover the contiguous range `0..=max_vertex`
//!
//! Validation stops at the first violated condition.

use crate::models::Graph;
use std::collections::HashSet;
use std::fmt;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An edge joins a vertex to itself.
    SelfLoop,
    /// An edge appears twice, possibly reversed: `(u, v)` and `(v, u)`.
    DuplicateEdge,
    /// Some id in `0..=max_vertex` is not an endpoint of any edge.
    NonContiguousVertices,
    /// The graph has no edges, hence no vertex range.
    EmptyGraph,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a graph for coloring.
///
/// Checks, in order:
/// 1. The graph has at least one edge
/// 2. Per edge: no self-loop, and no earlier edge with the same endpoints
/// 3. Every id in `0..=max_vertex` is used
///
/// # Returns
/// `Ok(())` if the graph is well-formed, `Err` describing the first failure.
pub fn validate_graph(graph: &Graph) -> Result<(), ValidationError> {
    if graph.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyGraph,
            "Graph has no edges",
        ));
    }

    let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(graph.edge_count());
    let mut vertices: HashSet<usize> = HashSet::new();
    let mut max_vertex = 0;

    for &(u, v) in graph.edges() {
        if u == v {
            return Err(ValidationError::new(
                ValidationErrorKind::SelfLoop,
                format!("Vertex {u} has a self-loop"),
            ));
        }
        if !seen.insert((u.min(v), u.max(v))) {
            return Err(ValidationError::new(
                ValidationErrorKind::DuplicateEdge,
                format!("Edge ({u}, {v}) is listed more than once"),
            ));
        }
        vertices.insert(u);
        vertices.insert(v);
        max_vertex = max_vertex.max(u).max(v);
    }

    if let Some(missing) = (0..=max_vertex).find(|id| !vertices.contains(id)) {
        return Err(ValidationError::new(
            ValidationErrorKind::NonContiguousVertices,
            format!("Vertex {missing} is missing from the range 0..={max_vertex}"),
        ));
    }

    Ok(())
}

/// Whether a graph satisfies every well-formedness condition.
pub fn well_formed(graph: &Graph) -> bool {
    validate_graph(graph).is_ok()
}
