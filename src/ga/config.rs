//! GA configuration.
//!
//! [`TspGaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::selection_count;
use crate::error::{TspError, TspResult};

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_tspga::ga::TspGaConfig;
///
/// let config = TspGaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tspga::ga::TspGaConfig;
///
/// let config = TspGaConfig::default()
///     .with_population_size(40)
///     .with_generation_gap(0.8)
///     .with_mutation_rate(0.1)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspGaConfig {
    /// Number of individuals in the population (NIND).
    pub population_size: usize,

    /// Number of generations to run (MAXGEN). There is no early stop.
    pub max_generations: usize,

    /// Probability of applying order crossover to an adjacent pair (Pc).
    pub crossover_rate: f64,

    /// Probability of swapping two cities in an offspring (Pm).
    pub mutation_rate: f64,

    /// Fraction of the population replaced by offspring each generation
    /// (GGAP), in `(0, 1]`.
    pub generation_gap: f64,

    /// Linear ranking pressure in `(1, 2)`.
    ///
    /// The best individual gets fitness `selective_pressure`, the worst
    /// `2 - selective_pressure`.
    pub selective_pressure: f64,

    /// Whether offspring go through the reversal improvement step.
    pub local_search: bool,

    /// Reversal attempts per offspring per generation.
    pub reversal_attempts: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for TspGaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 200,
            crossover_rate: 0.9,
            mutation_rate: 0.05,
            generation_gap: 0.9,
            selective_pressure: 1.9,
            local_search: true,
            reversal_attempts: 1,
            seed: None,
        }
    }
}

impl TspGaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the generation gap. Not clamped: `0` is rejected by
    /// [`validate`](Self::validate).
    pub fn with_generation_gap(mut self, gap: f64) -> Self {
        self.generation_gap = gap;
        self
    }

    /// Sets the ranking selective pressure.
    pub fn with_selective_pressure(mut self, sp: f64) -> Self {
        self.selective_pressure = sp;
        self
    }

    /// Enables or disables the reversal improvement step.
    pub fn with_local_search(mut self, enabled: bool) -> Self {
        self.local_search = enabled;
        self
    }

    /// Sets the number of reversal attempts per offspring.
    pub fn with_reversal_attempts(mut self, attempts: usize) -> Self {
        self.reversal_attempts = attempts;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of offspring bred per generation:
    /// `max(round(population_size * generation_gap), 1)`.
    pub fn offspring_count(&self) -> usize {
        selection_count(self.population_size, self.generation_gap)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> TspResult<()> {
        if self.population_size < 1 {
            return Err(TspError::invalid(
                "population_size",
                "must be at least 1",
            ));
        }
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.mutation_rate)?;
        if !(self.generation_gap > 0.0 && self.generation_gap <= 1.0) {
            return Err(TspError::invalid(
                "generation_gap",
                format!("must be in (0, 1], got {}", self.generation_gap),
            ));
        }
        if !(self.selective_pressure > 1.0 && self.selective_pressure < 2.0) {
            return Err(TspError::invalid(
                "selective_pressure",
                format!("must be in (1, 2), got {}", self.selective_pressure),
            ));
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, p: f64) -> TspResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(TspError::invalid(name, format!("must be in [0, 1], got {p}")))
    }
}
