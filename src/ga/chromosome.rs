//! Positional coloring chromosome.
//!
//! # Encoding
//!
//! Gene `i` is the color index of vertex `i`. A chromosome for a graph with
//! `n` vertices has exactly `n` genes, each in `0..k` when searching with
//! `k` colors.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A candidate coloring: one color index per vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColoringChromosome {
    /// Color index per vertex id.
    pub genes: Vec<usize>,
}

impl ColoringChromosome {
    /// Wraps an explicit gene vector.
    pub fn new(genes: Vec<usize>) -> Self {
        Self { genes }
    }

    /// Creates a random chromosome of `len` genes drawn uniformly from `0..k`.
    ///
    /// `k` must be at least 1.
    pub fn random<R: Rng>(len: usize, k: usize, rng: &mut R) -> Self {
        let genes = (0..len).map(|_| rng.random_range(0..k)).collect();
        Self { genes }
    }

    /// Number of genes (vertices).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Color of a vertex.
    pub fn color_of(&self, vertex: usize) -> Option<usize> {
        self.genes.get(vertex).copied()
    }

    /// Number of distinct colors actually used.
    ///
    /// May be less than the `k` the chromosome was searched with.
    pub fn colors_used(&self) -> usize {
        self.genes.iter().collect::<BTreeSet<_>>().len()
    }

    /// Checks the encoding against a vertex count and color count.
    pub fn is_valid(&self, vertex_count: usize, k: usize) -> bool {
        self.genes.len() == vertex_count && self.genes.iter().all(|&c| c < k)
    }
}

impl From<Vec<usize>> for ColoringChromosome {
    fn from(genes: Vec<usize>) -> Self {
        Self::new(genes)
    }
}
