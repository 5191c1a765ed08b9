//! Genetic operators for coloring chromosomes.
//!
//! - **Selection**: fitness-proportional (roulette-wheel) resampling
//! - **Crossover**: single-point recombination
//! - **Mutation**: single-locus hill climb that never lowers fitness

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use super::chromosome::ColoringChromosome;
use super::problem::ColoringProblem;
use crate::error::{ColoringError, Result};

// ======================== Selection ========================

/// Roulette-wheel weights: each individual's share of the total fitness.
///
/// Returned in population order. Empty when the total fitness is zero, in
/// which case nothing can be ranked. The loop then stops if no coloring can
/// score above zero, and draws uniformly otherwise.
pub fn selection_probabilities(
    problem: &ColoringProblem<'_>,
    population: &[ColoringChromosome],
) -> Vec<f64> {
    let scores: Vec<usize> = population.iter().map(|c| problem.fitness(c)).collect();
    let total: usize = scores.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    scores
        .into_iter()
        .map(|s| s as f64 / total as f64)
        .collect()
}

/// Draws `pop_size` individuals with replacement according to `probabilities`.
///
/// Strong individuals may be drawn several times, weak ones not at all.
/// Returns `None` if the weights cannot form a distribution (empty, length
/// mismatch, or all zero).
pub fn resample<R: Rng>(
    population: &[ColoringChromosome],
    probabilities: &[f64],
    pop_size: usize,
    rng: &mut R,
) -> Option<Vec<ColoringChromosome>> {
    if probabilities.is_empty() || probabilities.len() != population.len() {
        return None;
    }
    let wheel = WeightedIndex::<f64>::new(probabilities).ok()?;
    Some(
        (0..pop_size)
            .map(|_| population[wheel.sample(rng)].clone())
            .collect(),
    )
}

// ======================== Crossover ========================

/// Single-point crossover.
///
/// `child1 = p1[..point] ++ p2[point..]` and `child2 = p2[..point] ++ p1[point..]`.
///
/// Fails with [`ColoringError::InvalidCrossover`] if the parents differ in
/// length or `point` is not strictly inside `0..len`.
pub fn single_point_crossover(
    p1: &ColoringChromosome,
    p2: &ColoringChromosome,
    point: usize,
) -> Result<(ColoringChromosome, ColoringChromosome)> {
    if p1.len() != p2.len() {
        return Err(ColoringError::InvalidCrossover {
            reason: format!("parent lengths differ ({} vs {})", p1.len(), p2.len()),
        });
    }
    if point == 0 || point >= p1.len() {
        return Err(ColoringError::InvalidCrossover {
            reason: format!("point {point} is outside 1..{}", p1.len()),
        });
    }

    let (head1, tail1) = p1.genes.split_at(point);
    let (head2, tail2) = p2.genes.split_at(point);
    let child1 = ColoringChromosome::new([head1, tail2].concat());
    let child2 = ColoringChromosome::new([head2, tail1].concat());
    Ok((child1, child2))
}

/// Draws a crossover point for a generation of `pop_size` chromosomes of
/// length `len`.
///
/// Uniform over `1..=min(pop_size - 2, len - 1)`, with the upper bound
/// floored at 1, so the point is always valid for chromosomes of length ≥ 2.
pub fn crossover_point<R: Rng>(pop_size: usize, len: usize, rng: &mut R) -> usize {
    let upper = pop_size
        .saturating_sub(2)
        .min(len.saturating_sub(1))
        .max(1);
    rng.random_range(1..=upper)
}

// ======================== Mutation ========================

/// Hill-climb mutation on a single locus.
///
/// Proper colorings are left untouched. Otherwise one gene position is
/// chosen once, and its color is redrawn uniformly from `0..k` until the
/// fitness is no worse than before, or `max_attempts` redraws are spent, in
/// which case the original color is restored.
///
/// Returns `true` if the chromosome changed.
pub fn hill_climb_mutation<R: Rng>(
    chromosome: &mut ColoringChromosome,
    problem: &ColoringProblem<'_>,
    max_attempts: usize,
    rng: &mut R,
) -> bool {
    if chromosome.is_empty() {
        return false;
    }
    let original_fitness = problem.fitness(chromosome);
    if original_fitness == problem.fitness_max() {
        return false;
    }

    let locus = rng.random_range(0..chromosome.len());
    let original_color = chromosome.genes[locus];

    for _ in 0..max_attempts {
        chromosome.genes[locus] = rng.random_range(0..problem.k());
        if problem.fitness(chromosome) >= original_fitness {
            return chromosome.genes[locus] != original_color;
        }
    }

    chromosome.genes[locus] = original_color;
    false
}
