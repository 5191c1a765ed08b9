//! Coloring problem definition.
//!
//! Binds a graph to a color count `k` and provides fitness evaluation and
//! population initialization for the generational loop.

use rand::Rng;

use super::chromosome::ColoringChromosome;
use crate::error::{ColoringError, Result};
use crate::models::Graph;

/// A graph to be colored with at most `k` colors.
///
/// Fitness is the number of well-colored edges (endpoints of different
/// colors); higher is better, and [`fitness_max`](Self::fitness_max) marks a
/// proper coloring.
///
/// # Example
/// ```
/// use u_chroma::ga::{ColoringChromosome, ColoringProblem};
/// use u_chroma::models::Graph;
///
/// let square = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
/// let problem = ColoringProblem::new(&square, 2, 35).unwrap();
///
/// let alternating = ColoringChromosome::new(vec![0, 1, 0, 1]);
/// assert_eq!(problem.fitness(&alternating), 4);
/// assert!(problem.is_solution(&alternating));
/// ```
#[derive(Debug, Clone)]
pub struct ColoringProblem<'a> {
    graph: &'a Graph,
    k: usize,
    vertex_count: usize,
}

impl<'a> ColoringProblem<'a> {
    /// Creates a problem for `k` colors out of a palette of `max_colors`.
    ///
    /// Fails with [`ColoringError::InvalidColorCount`] unless
    /// `1 <= k <= max_colors`.
    pub fn new(graph: &'a Graph, k: usize, max_colors: usize) -> Result<Self> {
        if k == 0 || k > max_colors {
            return Err(ColoringError::InvalidColorCount { k, max: max_colors });
        }
        Ok(Self {
            graph,
            k,
            vertex_count: graph.vertex_count(),
        })
    }

    /// The graph being colored.
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// Number of colors available to the search.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Chromosome length.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of well-colored edges.
    pub fn fitness(&self, chromosome: &ColoringChromosome) -> usize {
        self.graph
            .edges()
            .iter()
            .filter(|&&(u, v)| chromosome.color_of(u) != chromosome.color_of(v))
            .count()
    }

    /// Best achievable fitness: every edge well-colored.
    pub fn fitness_max(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether a chromosome is a proper coloring.
    pub fn is_solution(&self, chromosome: &ColoringChromosome) -> bool {
        self.fitness(chromosome) == self.fitness_max()
    }

    /// Creates one random individual.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> ColoringChromosome {
        ColoringChromosome::random(self.vertex_count, self.k, rng)
    }

    /// Creates `pop_size` random individuals.
    pub fn init_population<R: Rng>(
        &self,
        pop_size: usize,
        rng: &mut R,
    ) -> Vec<ColoringChromosome> {
        (0..pop_size).map(|_| self.create_individual(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn triangle() -> Graph {
        Graph::from_edges([(0, 1), (1, 2), (2, 0)])
    }

    #[test]
    fn test_color_count_bounds() {
        let g = triangle();
        assert!(ColoringProblem::new(&g, 1, 35).is_ok());
        assert!(ColoringProblem::new(&g, 35, 35).is_ok());
        assert_eq!(
            ColoringProblem::new(&g, 0, 35).unwrap_err(),
            ColoringError::InvalidColorCount { k: 0, max: 35 }
        );
        assert!(ColoringProblem::new(&g, 36, 35).is_err());
    }

    #[test]
    fn test_fitness_counts_well_colored_edges() {
        let g = triangle();
        let problem = ColoringProblem::new(&g, 3, 35).unwrap();

        assert_eq!(problem.fitness_max(), 3);
        assert_eq!(problem.fitness(&ColoringChromosome::new(vec![0, 0, 0])), 0);
        assert_eq!(problem.fitness(&ColoringChromosome::new(vec![0, 1, 1])), 2);
        assert_eq!(problem.fitness(&ColoringChromosome::new(vec![0, 1, 2])), 3);
        assert!(problem.is_solution(&ColoringChromosome::new(vec![2, 0, 1])));
    }

    #[test]
    fn test_fitness_never_exceeds_max() {
        let g = Graph::from_edges([
            (0, 1), (2, 0), (3, 2), (5, 2), (6, 7), (1, 7), (4, 3), (4, 6),
        ]);
        let problem = ColoringProblem::new(&g, 3, 35).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..200 {
            let ch = problem.create_individual(&mut rng);
            let fitness = problem.fitness(&ch);
            assert!(fitness <= problem.fitness_max());
            // Equality iff no edge is monochromatic.
            let proper = g
                .edges()
                .iter()
                .all(|&(u, v)| ch.genes[u] != ch.genes[v]);
            assert_eq!(fitness == problem.fitness_max(), proper);
        }
    }

    #[test]
    fn test_init_population() {
        let g = triangle();
        let problem = ColoringProblem::new(&g, 2, 35).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let population = problem.init_population(6, &mut rng);
        assert_eq!(population.len(), 6);
        assert!(population.iter().all(|c| c.is_valid(3, 2)));
    }
}
