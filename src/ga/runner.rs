//! Generational loop for a fixed color count.
//!
//! Each generation: roulette-wheel selection, pairwise single-point
//! crossover, hill-climb mutation, then a stagnation check. The loop ends as
//! soon as a proper coloring is observed, or when the search is judged
//! hopeless at this `k`.

use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::chromosome::ColoringChromosome;
use super::config::GaConfig;
use super::operators::{
    crossover_point, hill_climb_mutation, resample, selection_probabilities,
    single_point_crossover,
};
use super::problem::ColoringProblem;
use crate::error::Result;

/// Why a k-attempt ended without a proper coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// Best fitness did not improve for more than `stagnation_limit` generations.
    Stagnation,
    /// Every individual scored zero and no score can ever be positive: the
    /// graph has no edges, or only one color is available.
    ZeroFitness,
    /// `max_generations` was reached.
    GenerationLimit,
    /// `time_limit` elapsed.
    TimeLimit,
}

/// Statistics of one k-attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Color count searched with.
    pub k: usize,
    /// Generations started (selection performed).
    pub generations: usize,
    /// Best fitness observed.
    pub best_fitness: usize,
    /// Fitness of a proper coloring (edge count).
    pub fitness_max: usize,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Result of a k-attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// A proper coloring with at most `k` colors was found.
    Solved {
        /// The proper coloring.
        chromosome: ColoringChromosome,
        /// Attempt statistics.
        stats: SearchStats,
    },
    /// The search gave up; `k` is treated as infeasible.
    NoSolutionFound {
        /// What stopped the search.
        reason: TerminationReason,
        /// Attempt statistics.
        stats: SearchStats,
    },
}

impl SearchOutcome {
    /// Whether a proper coloring was found.
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved { .. })
    }

    /// The proper coloring, if any.
    pub fn solution(&self) -> Option<&ColoringChromosome> {
        match self {
            SearchOutcome::Solved { chromosome, .. } => Some(chromosome),
            SearchOutcome::NoSolutionFound { .. } => None,
        }
    }

    /// Consumes the outcome, keeping the proper coloring if any.
    pub fn into_solution(self) -> Option<ColoringChromosome> {
        match self {
            SearchOutcome::Solved { chromosome, .. } => Some(chromosome),
            SearchOutcome::NoSolutionFound { .. } => None,
        }
    }

    /// Attempt statistics.
    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Solved { stats, .. } | SearchOutcome::NoSolutionFound { stats, .. } => {
                stats
            }
        }
    }
}

/// Runs the generational loop.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_chroma::ga::{ColoringProblem, ColoringRunner, GaConfig};
/// use u_chroma::models::Graph;
///
/// let triangle = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
/// let problem = ColoringProblem::new(&triangle, 3, 35).unwrap();
/// let mut rng = SmallRng::seed_from_u64(42);
///
/// let outcome = ColoringRunner::run(&problem, &GaConfig::default(), &mut rng).unwrap();
/// assert!(outcome.is_solved());
/// ```
pub struct ColoringRunner;

impl ColoringRunner {
    /// Searches for a proper coloring of `problem` with its `k` colors.
    ///
    /// A proper coloring is returned as soon as one appears, either as a
    /// crossover child or as a child after mutation. A generation whose
    /// individuals all score zero is resampled uniformly, unless no coloring
    /// can score above zero at all.
    ///
    /// Errors only on an invalid configuration or a broken crossover
    /// invariant; an unsuccessful search is
    /// [`SearchOutcome::NoSolutionFound`].
    pub fn run<R: Rng>(
        problem: &ColoringProblem<'_>,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<SearchOutcome> {
        config.validate()?;

        let start = Instant::now();
        let pop_size = config.population_size;
        let fitness_max = problem.fitness_max();

        let mut population = problem.init_population(pop_size, rng);
        let mut best_fitness = population.first().map_or(0, |c| problem.fitness(c));
        let mut stuck = 0usize;
        let mut generations = 0usize;

        let stats = |generations: usize, best_fitness: usize| SearchStats {
            k: problem.k(),
            generations,
            best_fitness,
            fitness_max,
            elapsed: start.elapsed(),
        };
        let give_up = |reason: TerminationReason, generations: usize, best_fitness: usize| {
            debug!(
                "k={}: no coloring after {} generations ({:?}, best {}/{})",
                problem.k(),
                generations,
                reason,
                best_fitness,
                fitness_max
            );
            SearchOutcome::NoSolutionFound {
                reason,
                stats: stats(generations, best_fitness),
            }
        };

        loop {
            if stuck > config.stagnation_limit {
                return Ok(give_up(TerminationReason::Stagnation, generations, best_fitness));
            }
            if config.max_generations.is_some_and(|max| generations >= max) {
                return Ok(give_up(
                    TerminationReason::GenerationLimit,
                    generations,
                    best_fitness,
                ));
            }
            if config.time_limit.is_some_and(|limit| start.elapsed() >= limit) {
                return Ok(give_up(TerminationReason::TimeLimit, generations, best_fitness));
            }

            // Selection
            let mut probabilities = selection_probabilities(problem, &population);
            if probabilities.is_empty() && fitness_max > 0 && problem.k() > 1 {
                trace!("k={}: generation {} all zero, uniform draw", problem.k(), generations);
                probabilities = vec![1.0; population.len()];
            }
            let Some(parents) = resample(&population, &probabilities, pop_size, rng) else {
                return Ok(give_up(TerminationReason::ZeroFitness, generations, best_fitness));
            };
            generations += 1;

            // Crossover
            let mut children = Vec::with_capacity(pop_size);
            for pair in parents.chunks_exact(2) {
                let point = crossover_point(pop_size, problem.vertex_count(), rng);
                let (c1, c2) = single_point_crossover(&pair[0], &pair[1], point)?;
                for child in [c1, c2] {
                    if problem.is_solution(&child) {
                        debug!("k={}: coloring found in generation {}", problem.k(), generations);
                        return Ok(SearchOutcome::Solved {
                            chromosome: child,
                            stats: stats(generations, fitness_max),
                        });
                    }
                    children.push(child);
                }
            }

            // Mutation
            for child in &mut children {
                if rng.random_bool(config.mutation_rate) {
                    hill_climb_mutation(child, problem, config.max_mutation_attempts, rng);
                }
            }

            // Convergence
            let scores: Vec<usize> = children.iter().map(|c| problem.fitness(c)).collect();
            if let Some(idx) = scores.iter().position(|&s| s == fitness_max) {
                debug!(
                    "k={}: coloring found by mutation in generation {}",
                    problem.k(),
                    generations
                );
                return Ok(SearchOutcome::Solved {
                    chromosome: children.swap_remove(idx),
                    stats: stats(generations, fitness_max),
                });
            }

            let new_best = scores.iter().copied().fold(best_fitness, usize::max);
            if new_best == best_fitness {
                stuck += 1;
            } else {
                trace!(
                    "k={}: generation {} improved best fitness {} -> {}",
                    problem.k(),
                    generations,
                    best_fitness,
                    new_best
                );
                best_fitness = new_best;
                stuck = 0;
            }

            population = children;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColoringError;
    use crate::models::Graph;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn triangle() -> Graph {
        Graph::from_edges([(0, 1), (1, 2), (2, 0)])
    }

    fn square() -> Graph {
        Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)])
    }

    /// Odd cycle: needs three colors.
    fn heptagon() -> Graph {
        Graph::from_edges((0..7).map(|i| (i, (i + 1) % 7)))
    }

    #[test]
    fn test_solves_feasible_k() {
        let g = square();
        let problem = ColoringProblem::new(&g, 2, 35).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = ColoringRunner::run(&problem, &GaConfig::default(), &mut rng).unwrap();
        let solution = outcome.solution().expect("square is 2-colorable");
        assert!(problem.is_solution(solution));
        assert!(solution.is_valid(4, 2));
        assert_eq!(outcome.stats().best_fitness, 4);
    }

    #[test]
    fn test_single_color_stops_immediately() {
        let g = triangle();
        let problem = ColoringProblem::new(&g, 1, 35).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = ColoringRunner::run(&problem, &GaConfig::default(), &mut rng).unwrap();
        match outcome {
            SearchOutcome::NoSolutionFound { reason, stats } => {
                assert_eq!(reason, TerminationReason::ZeroFitness);
                assert_eq!(stats.generations, 0);
                assert_eq!(stats.best_fitness, 0);
            }
            SearchOutcome::Solved { .. } => panic!("a triangle has no 1-coloring"),
        }
    }

    #[test]
    fn test_infeasible_k_terminates_by_stagnation() {
        let g = heptagon();
        let problem = ColoringProblem::new(&g, 2, 35).unwrap();
        let config = GaConfig::default().with_stagnation_limit(50);
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = ColoringRunner::run(&problem, &config, &mut rng).unwrap();
        match outcome {
            SearchOutcome::NoSolutionFound { reason, stats } => {
                assert_eq!(reason, TerminationReason::Stagnation);
                assert!(stats.generations > 50);
                assert!(stats.best_fitness < stats.fitness_max);
            }
            SearchOutcome::Solved { .. } => panic!("an odd cycle has no 2-coloring"),
        }
    }

    #[test]
    fn test_default_stagnation_bound_terminates() {
        // K4 cannot be colored with three colors.
        let g = Graph::from_edges([(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let problem = ColoringProblem::new(&g, 3, 35).unwrap();
        let mut rng = SmallRng::seed_from_u64(9);

        let outcome = ColoringRunner::run(&problem, &GaConfig::default(), &mut rng).unwrap();
        assert!(!outcome.is_solved());
        assert!(outcome.stats().best_fitness < 6);
    }

    #[test]
    fn test_generation_limit() {
        let g = heptagon();
        let problem = ColoringProblem::new(&g, 2, 35).unwrap();
        let config = GaConfig::default().with_max_generations(5);
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = ColoringRunner::run(&problem, &config, &mut rng).unwrap();
        match outcome {
            SearchOutcome::NoSolutionFound { reason, stats } => {
                assert_eq!(reason, TerminationReason::GenerationLimit);
                assert_eq!(stats.generations, 5);
            }
            SearchOutcome::Solved { .. } => panic!("an odd cycle has no 2-coloring"),
        }
    }

    #[test]
    fn test_time_limit() {
        let g = triangle();
        let problem = ColoringProblem::new(&g, 2, 35).unwrap();
        let config = GaConfig::default().with_time_limit(Duration::ZERO);
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = ColoringRunner::run(&problem, &config, &mut rng).unwrap();
        assert!(matches!(
            outcome,
            SearchOutcome::NoSolutionFound {
                reason: TerminationReason::TimeLimit,
                ..
            }
        ));
    }

    #[test]
    fn test_all_zero_generation_keeps_searching() {
        // [0,0] and [1,1] both score zero on a single edge; the pair also
        // breeds itself back under crossover at point 1.
        let g = Graph::from_edges([(0, 1)]);
        let problem = ColoringProblem::new(&g, 2, 35).unwrap();
        for seed in 0..200 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let outcome = ColoringRunner::run(&problem, &GaConfig::default(), &mut rng).unwrap();
            assert!(outcome.is_solved(), "seed {seed}: {outcome:?}");
        }
    }

    #[test]
    fn test_uniform_draw_from_zero_population() {
        let g = Graph::from_edges([(0, 1)]);
        let problem = ColoringProblem::new(&g, 2, 35).unwrap();
        let population = vec![
            ColoringChromosome::new(vec![0, 0]),
            ColoringChromosome::new(vec![1, 1]),
        ];
        assert!(selection_probabilities(&problem, &population).is_empty());

        let mut rng = SmallRng::seed_from_u64(42);
        let pool = resample(&population, &[1.0, 1.0], 4, &mut rng).unwrap();
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn test_empty_graph_has_nothing_to_rank() {
        let g = Graph::new();
        let problem = ColoringProblem::new(&g, 3, 35).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = ColoringRunner::run(&problem, &GaConfig::default(), &mut rng).unwrap();
        assert!(matches!(
            outcome,
            SearchOutcome::NoSolutionFound {
                reason: TerminationReason::ZeroFitness,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let g = triangle();
        let problem = ColoringProblem::new(&g, 3, 35).unwrap();
        let config = GaConfig::default().with_population_size(3);
        let mut rng = SmallRng::seed_from_u64(42);

        assert!(matches!(
            ColoringRunner::run(&problem, &config, &mut rng),
            Err(ColoringError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_deterministic_with_seed() {
        let g = Graph::from_edges([(0, 1), (0, 2), (1, 3), (2, 4), (3, 5), (4, 5)]);
        let problem = ColoringProblem::new(&g, 2, 35).unwrap();
        let config = GaConfig::default();

        let a = ColoringRunner::run(&problem, &config, &mut SmallRng::seed_from_u64(5)).unwrap();
        let b = ColoringRunner::run(&problem, &config, &mut SmallRng::seed_from_u64(5)).unwrap();
        assert_eq!(a.solution(), b.solution());
        assert_eq!(a.stats().generations, b.stats().generations);
    }
}
