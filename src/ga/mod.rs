//! Genetic search for a k-coloring.
//!
//! # Encoding
//!
//! A chromosome is a vector of color indices, position `i` holding the color
//! of vertex `i`. Fitness is the number of well-colored edges, so the edge
//! count is the fitness of every proper coloring.
//!
//! # Submodules
//!
//! - [`operators`]: roulette selection, single-point crossover, hill-climb mutation
//!
//! # Reference
//! - Holland (1975), "Adaptation in Natural and Artificial Systems"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning", Ch. 3

mod chromosome;
mod config;
pub mod operators;
mod problem;
mod runner;

pub use chromosome::ColoringChromosome;
pub use config::GaConfig;
pub use operators::{
    crossover_point, hill_climb_mutation, resample, selection_probabilities,
    single_point_crossover,
};
pub use problem::ColoringProblem;
pub use runner::{ColoringRunner, SearchOutcome, SearchStats, TerminationReason};
