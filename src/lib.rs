//! Genetic-algorithm graph coloring for the U-Engine ecosystem.
//!
//! Searches for a proper k-coloring of an undirected graph with an
//! evolutionary algorithm, and scans k downward to estimate the smallest
//! number of colors the graph needs.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Graph`, `Edge`, `Palette`
//! - **`validation`**: Well-formedness checks (self-loops, duplicate edges,
//!   contiguous vertex ids)
//! - **`ga`**: Chromosome encoding, fitness, operators, and the generational loop
//! - **`driver`**: Minimal-coloring scan and coloring reports
//! - **`error`**: `ColoringError`
//!
//! # Example
//!
//! ```
//! use u_chroma::driver::minimal_coloring;
//! use u_chroma::ga::GaConfig;
//! use u_chroma::models::Graph;
//!
//! let triangle = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
//! let result = minimal_coloring(&triangle, &GaConfig::default().with_seed(7)).unwrap();
//! assert_eq!(result.colors, 3);
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"
//! - Jensen & Toft (1995), "Graph Coloring Problems"

pub mod driver;
pub mod error;
pub mod ga;
pub mod models;
pub mod validation;

pub use error::{ColoringError, Result};
