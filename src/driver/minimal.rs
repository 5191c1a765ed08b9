//! Minimal coloring scan.
//!
//! # Algorithm
//!
//! Starting from the palette size, the generational loop is run once per
//! color count `k`, decreasing. The scan stops at the first `k` without a
//! proper coloring and reports the last successful one.
//!
//! Every k-attempt owns a random generator derived from `(seed, k)`, so the
//! attempts are independent. The parallel scan runs them on the rayon pool
//! and then replays the sequential stopping rule over the results; with a
//! fixed seed both scans return the same coloring.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::report::ColoringReport;
use crate::error::{ColoringError, Result};
use crate::ga::{
    ColoringChromosome, ColoringProblem, ColoringRunner, GaConfig, SearchOutcome, SearchStats,
    TerminationReason,
};
use crate::models::{Graph, Palette};
use crate::validation::validate_graph;

/// Summary of one k-attempt of a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptSummary {
    /// Color count searched with.
    pub k: usize,
    /// Whether a proper coloring was found.
    pub solved: bool,
    /// Why the attempt gave up, for failed attempts.
    pub reason: Option<TerminationReason>,
    /// Attempt statistics.
    pub stats: SearchStats,
}

impl From<&SearchOutcome> for AttemptSummary {
    fn from(outcome: &SearchOutcome) -> Self {
        let reason = match outcome {
            SearchOutcome::Solved { .. } => None,
            SearchOutcome::NoSolutionFound { reason, .. } => Some(*reason),
        };
        Self {
            k: outcome.stats().k,
            solved: outcome.is_solved(),
            reason,
            stats: outcome.stats().clone(),
        }
    }
}

/// Result of a minimization scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimalColoring {
    /// Smallest color count for which a proper coloring was found.
    pub colors: usize,
    /// A proper coloring using at most `colors` colors.
    pub chromosome: ColoringChromosome,
    /// Every attempt of the scan, in the order the scan considered them.
    pub attempts: Vec<AttemptSummary>,
}

impl MinimalColoring {
    /// Display tokens of the witness coloring, vertex by vertex.
    ///
    /// Fails with [`ColoringError::ColorOutOfPalette`] if the palette is
    /// shorter than the scan's color range; [`GaConfig::validate_for`]
    /// rejects such a pairing before the scan.
    pub fn tokens<'p>(&self, palette: &'p Palette) -> Result<Vec<&'p str>> {
        palette.tokens_for(&self.chromosome)
    }

    /// Quality report of the witness coloring.
    pub fn report(&self, graph: &Graph) -> ColoringReport {
        ColoringReport::calculate(graph, &self.chromosome)
    }
}

/// Estimates the chromatic number of a graph.
///
/// Validates the graph, then scans `k = max_colors, max_colors - 1, …, 1`
/// until a k-attempt fails.
///
/// # Errors
/// - [`ColoringError::MalformedGraph`] if the graph is not well-formed
/// - [`ColoringError::InvalidConfig`] if the configuration is invalid
/// - [`ColoringError::NotColorable`] if even `max_colors` colors fail
///
/// # Example
/// ```
/// use u_chroma::driver::minimal_coloring;
/// use u_chroma::ga::GaConfig;
/// use u_chroma::models::Graph;
///
/// let square = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
/// let result = minimal_coloring(&square, &GaConfig::default().with_seed(42)).unwrap();
/// assert_eq!(result.colors, 2);
/// ```
pub fn minimal_coloring(graph: &Graph, config: &GaConfig) -> Result<MinimalColoring> {
    validate_graph(graph)?;
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        "Scanning {} vertices / {} edges (max degree {}) from k={} (parallel: {})",
        graph.vertex_count(),
        graph.edge_count(),
        graph.max_degree(),
        config.max_colors,
        config.parallel
    );

    let result = if config.parallel {
        scan_parallel(graph, config, seed)
    } else {
        scan_sequential(graph, config, seed)
    };

    match &result {
        Ok(found) => info!(
            "Minimal coloring uses {} colors ({} attempts, largest class {})",
            found.colors,
            found.attempts.len(),
            found.report(graph).largest_class()
        ),
        Err(err) => info!("Scan failed: {err}"),
    }
    result
}

/// Runs the generational loop for a single color count.
///
/// Validates the graph first; the random generator is derived from
/// `config.seed` and `k` exactly as in [`minimal_coloring`].
pub fn color_with(graph: &Graph, k: usize, config: &GaConfig) -> Result<SearchOutcome> {
    validate_graph(graph)?;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    run_attempt(graph, k, config, seed)
}

fn attempt_rng(seed: u64, k: usize) -> SmallRng {
    SmallRng::seed_from_u64(seed ^ (k as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn run_attempt(graph: &Graph, k: usize, config: &GaConfig, seed: u64) -> Result<SearchOutcome> {
    let problem = ColoringProblem::new(graph, k, config.max_colors)?;
    let mut rng = attempt_rng(seed, k);
    ColoringRunner::run(&problem, config, &mut rng)
}

fn scan_sequential(graph: &Graph, config: &GaConfig, seed: u64) -> Result<MinimalColoring> {
    let outcomes = (1..=config.max_colors)
        .rev()
        .map(|k| run_attempt(graph, k, config, seed));
    collect_scan(outcomes, config.max_colors)
}

fn scan_parallel(graph: &Graph, config: &GaConfig, seed: u64) -> Result<MinimalColoring> {
    let ks: Vec<usize> = (1..=config.max_colors).rev().collect();
    let outcomes: Vec<Result<SearchOutcome>> = ks
        .par_iter()
        .map(|&k| run_attempt(graph, k, config, seed))
        .collect();
    collect_scan(outcomes, config.max_colors)
}

/// Applies the stopping rule to outcomes ordered by decreasing `k`.
///
/// Outcomes are pulled lazily, so a sequential scan never runs past the
/// first failure.
fn collect_scan<I>(outcomes: I, max_colors: usize) -> Result<MinimalColoring>
where
    I: IntoIterator<Item = Result<SearchOutcome>>,
{
    let mut best: Option<(usize, ColoringChromosome)> = None;
    let mut attempts = Vec::new();

    for outcome in outcomes {
        let outcome = outcome?;
        let summary = AttemptSummary::from(&outcome);
        debug!(
            "k={}: {} after {} generations ({:?})",
            summary.k,
            if summary.solved { "solved" } else { "failed" },
            summary.stats.generations,
            summary.stats.elapsed
        );
        let k = summary.k;
        attempts.push(summary);

        match outcome.into_solution() {
            Some(chromosome) => best = Some((k, chromosome)),
            None => break,
        }
    }

    match best {
        Some((colors, chromosome)) => Ok(MinimalColoring {
            colors,
            chromosome,
            attempts,
        }),
        None => Err(ColoringError::NotColorable { max_colors }),
    }
}
