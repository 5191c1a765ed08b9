//! Search configuration.
//!
//! [`GaConfig`] holds every parameter of the generational loop and the
//! minimization scan.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ColoringError, Result};
use crate::models::Palette;

/// Configuration for the coloring search.
///
/// # Defaults
///
/// ```
/// use u_chroma::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 4);
/// assert_eq!(config.stagnation_limit, 1000);
/// assert_eq!(config.max_colors, 35);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_chroma::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_stagnation_limit(200)
///     .with_mutation_rate(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of individuals per generation. Must be even and at least 2.
    pub population_size: usize,

    /// Generations without improvement of the best fitness before a
    /// k-attempt gives up.
    pub stagnation_limit: usize,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Random redraws of the mutated gene before the mutation is abandoned.
    pub max_mutation_attempts: usize,

    /// Hard ceiling on generations per k-attempt. `None` = stagnation only.
    pub max_generations: Option<usize>,

    /// Wall-clock ceiling per k-attempt. `None` = no limit.
    pub time_limit: Option<Duration>,

    /// Largest color count the minimization scan starts from.
    ///
    /// The palette that renders the result must have at least this many
    /// tokens; see [`GaConfig::validate_for`].
    pub max_colors: usize,

    /// Whether the minimization scan runs its k-attempts on the rayon pool.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 4,
            stagnation_limit: 1000,
            mutation_rate: 0.5,
            max_mutation_attempts: 1000,
            max_generations: None,
            time_limit: None,
            max_colors: Palette::default().len(),
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of redraws allowed per mutation.
    pub fn with_max_mutation_attempts(mut self, attempts: usize) -> Self {
        self.max_mutation_attempts = attempts;
        self
    }

    /// Sets a generation ceiling per k-attempt.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets a wall-clock ceiling per k-attempt.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Sets the largest color count to try.
    pub fn with_max_colors(mut self, n: usize) -> Self {
        self.max_colors = n;
        self
    }

    /// Takes the largest color count from a palette.
    pub fn with_palette(self, palette: &Palette) -> Self {
        self.with_max_colors(palette.len())
    }

    /// Enables or disables the parallel scan.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`ColoringError::InvalidConfig`] describing the first
    /// parameter out of range.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(ColoringError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(ColoringError::InvalidConfig(
                "population_size must be even".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ColoringError::InvalidConfig(
                "mutation_rate must be within 0.0..=1.0".into(),
            ));
        }
        if self.max_mutation_attempts == 0 {
            return Err(ColoringError::InvalidConfig(
                "max_mutation_attempts must be at least 1".into(),
            ));
        }
        if self.max_generations == Some(0) {
            return Err(ColoringError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.max_colors == 0 {
            return Err(ColoringError::InvalidConfig(
                "max_colors must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Validates the configuration and checks that `palette` can render
    /// every color the scan may use.
    pub fn validate_for(&self, palette: &Palette) -> Result<()> {
        self.validate()?;
        if self.max_colors > palette.len() {
            return Err(ColoringError::InvalidConfig(format!(
                "max_colors {} exceeds palette of {} tokens",
                self.max_colors,
                palette.len()
            )));
        }
        Ok(())
    }
}
