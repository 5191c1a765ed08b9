//! Coloring quality report.
//!
//! Summarizes a coloring against its graph, for logging and for consumers
//! that render the result.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Well-colored edges | Edges whose endpoints differ in color (the fitness) |
//! | Conflicting edges | Edges whose endpoints share a color |
//! | Colors used | Distinct colors in the chromosome |
//! | Class sizes | Vertices per color |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ga::ColoringChromosome;
use crate::models::{Edge, Graph};

/// Quality indicators of a coloring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringReport {
    /// Edges with differently colored endpoints.
    pub well_colored_edges: usize,
    /// Edges with same-colored endpoints, in graph order.
    pub conflicting_edges: Vec<Edge>,
    /// Distinct colors used.
    pub colors_used: usize,
    /// Color index → number of vertices with that color.
    pub class_sizes: BTreeMap<usize, usize>,
    /// Whether no edge is in conflict.
    pub is_proper: bool,
}

impl ColoringReport {
    /// Computes the report for a coloring.
    ///
    /// Edges touching a vertex the chromosome does not cover count as
    /// conflicts.
    pub fn calculate(graph: &Graph, chromosome: &ColoringChromosome) -> Self {
        let mut well_colored_edges = 0;
        let mut conflicting_edges = Vec::new();

        for &(u, v) in graph.edges() {
            match (chromosome.color_of(u), chromosome.color_of(v)) {
                (Some(cu), Some(cv)) if cu != cv => well_colored_edges += 1,
                _ => conflicting_edges.push((u, v)),
            }
        }

        let mut class_sizes = BTreeMap::new();
        for &color in &chromosome.genes {
            *class_sizes.entry(color).or_insert(0) += 1;
        }

        Self {
            well_colored_edges,
            is_proper: conflicting_edges.is_empty(),
            conflicting_edges,
            colors_used: class_sizes.len(),
            class_sizes,
        }
    }

    /// Number of conflicting edges.
    pub fn conflict_count(&self) -> usize {
        self.conflicting_edges.len()
    }

    /// Size of the largest color class.
    pub fn largest_class(&self) -> usize {
        self.class_sizes.values().copied().max().unwrap_or(0)
    }
}
