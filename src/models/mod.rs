//! Graph coloring domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`Graph`] | Undirected simple graph over dense vertex ids `0..n` |
//! | [`Edge`] | Unordered vertex pair |
//! | [`Palette`] | Display tokens for color indices |

mod graph;
mod palette;

pub use graph::{Edge, Graph};
pub use palette::Palette;
