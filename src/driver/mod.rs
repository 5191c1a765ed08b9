//! Chromatic number estimation and coloring reports.
//!
//! # Algorithm
//!
//! [`minimal_coloring`] runs the genetic search for decreasing color counts
//! and keeps the last success. The result is a heuristic upper bound on the
//! chromatic number, not a proof of optimality.
//!
//! # Report
//!
//! [`ColoringReport`] summarizes a coloring: conflicts, colors used, and
//! color-class sizes.
//!
//! # References
//!
//! - Hindi & Yampolskiy (2012), "Genetic Algorithm Applied to the Graph Coloring Problem"
//! - Jensen & Toft (1995), "Graph Coloring Problems"

mod minimal;
mod report;

pub use minimal::{AttemptSummary, MinimalColoring, color_with, minimal_coloring};
pub use report::ColoringReport;
