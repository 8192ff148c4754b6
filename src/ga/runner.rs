//! GA evolutionary loop execution.
//!
//! [`TspGaRunner`] drives a [`GenerationState`] through a fixed number of
//! generations: evaluate → select → recombine → mutate → improve →
//! reinsert. Each [`GenerationState::step`] consumes the current state and
//! returns the next one; no state lives outside the value.

use super::config::TspGaConfig;
use super::fitness::{best_index, evaluate_objectives, linear_ranking, mean};
use super::operators::{improve, mutate, recombine};
use super::reinsertion::reinsert;
use super::selection::select;
use super::types::{random_population, Tour};
use crate::error::TspResult;
use crate::geometry::{City, DistanceMatrix};
use crate::random::{create_rng, fresh_seed};
use rand::Rng;
use tracing::instrument;

/// Snapshot of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index; `0` is the initial population.
    pub generation: usize,

    /// Best length found up to and including this generation.
    pub best_length: f64,

    /// Mean length of this generation's population.
    pub mean_length: f64,
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspGaResult {
    /// Shortest tour found during the entire run.
    pub best: Tour,

    /// Length of `best`.
    pub best_length: f64,

    /// Shortest length in the initial random population.
    pub initial_best_length: f64,

    /// Number of generations executed (always `max_generations`).
    pub generations: usize,

    /// Seed the run used; pass it back through
    /// [`TspGaConfig::with_seed`] to reproduce the run.
    pub seed: u64,

    /// Best length so far, one entry for the initial population and one
    /// per generation.
    pub history: Vec<f64>,

    /// Per-generation statistics aligned with `history`.
    pub stats: Vec<GenerationStats>,
}

/// State threaded through the generational loop.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationState {
    /// Number of completed generations.
    pub generation: usize,

    /// Current population.
    pub population: Vec<Tour>,

    /// Tour lengths aligned with `population`.
    pub objectives: Vec<f64>,

    /// Best tour seen so far.
    pub best: Tour,

    /// Length of `best`.
    pub best_length: f64,
}

impl GenerationState {
    /// Creates a random initial population and evaluates it.
    ///
    /// The configuration must already be validated.
    pub fn initial<R: Rng>(matrix: &DistanceMatrix, config: &TspGaConfig, rng: &mut R) -> Self {
        let population = random_population(config.population_size, matrix.len(), rng);
        let objectives = evaluate_objectives(&population, matrix);
        let idx = best_index(&objectives);

        Self {
            generation: 0,
            best: population[idx].clone(),
            best_length: objectives[idx],
            population,
            objectives,
        }
    }

    /// `true` once `max_generations` generations have run.
    pub fn is_terminal(&self, config: &TspGaConfig) -> bool {
        self.generation >= config.max_generations
    }

    /// Mean tour length of the current population.
    pub fn mean_length(&self) -> f64 {
        mean(&self.objectives)
    }

    /// Runs one generation and returns the next state.
    ///
    /// # Errors
    ///
    /// Propagates [`TspError::DegenerateFitness`](crate::TspError) from
    /// selection.
    #[instrument(level = "trace", skip_all, fields(generation = self.generation))]
    pub fn step<R: Rng>(
        self,
        matrix: &DistanceMatrix,
        config: &TspGaConfig,
        rng: &mut R,
    ) -> TspResult<Self> {
        let fitness = linear_ranking(&self.objectives, config.selective_pressure);
        let chosen = select(&fitness, config.generation_gap, rng)?;

        let offspring: Vec<Tour> = chosen
            .iter()
            .map(|&i| self.population[i].clone())
            .collect();
        let mut offspring = recombine(offspring, config.crossover_rate, rng);
        mutate(&mut offspring, config.mutation_rate, rng);

        let offspring_objectives = if config.local_search {
            improve(&mut offspring, matrix, config.reversal_attempts, rng)
        } else {
            evaluate_objectives(&offspring, matrix)
        };

        let (population, objectives) = reinsert(
            self.population,
            &self.objectives,
            offspring,
            &offspring_objectives,
        );

        let idx = best_index(&objectives);
        let (best, best_length) = if objectives[idx] < self.best_length {
            (population[idx].clone(), objectives[idx])
        } else {
            (self.best, self.best_length)
        };

        Ok(Self {
            generation: self.generation + 1,
            population,
            objectives,
            best,
            best_length,
        })
    }

    fn stats(&self) -> GenerationStats {
        GenerationStats {
            generation: self.generation,
            best_length: self.best_length,
            mean_length: self.mean_length(),
        }
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_tspga::ga::{TspGaConfig, TspGaRunner};
/// use u_tspga::instances;
///
/// let config = TspGaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50)
///     .with_seed(42);
/// let result = TspGaRunner::run(&instances::unit_square(), &config).unwrap();
/// assert!((result.best_length - 4.0).abs() < 1e-6);
/// ```
pub struct TspGaRunner;

impl TspGaRunner {
    /// Builds the distance matrix for `cities` and runs the GA.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidParameter`](crate::TspError) for an invalid
    /// configuration or fewer than two cities; selection errors otherwise.
    pub fn run(cities: &[City], config: &TspGaConfig) -> TspResult<TspGaResult> {
        config.validate()?;
        let matrix = DistanceMatrix::from_cities(cities)?;
        Self::run_with_matrix(&matrix, config)
    }

    /// Runs the GA on a prebuilt distance matrix.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            cities = matrix.len(),
            population = config.population_size,
            generations = config.max_generations
        )
    )]
    pub fn run_with_matrix(matrix: &DistanceMatrix, config: &TspGaConfig) -> TspResult<TspGaResult> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(fresh_seed);
        let mut rng = create_rng(seed);

        let mut state = GenerationState::initial(matrix, config, &mut rng);
        let initial_best_length = state.best_length;

        let mut history = Vec::with_capacity(config.max_generations + 1);
        let mut stats = Vec::with_capacity(config.max_generations + 1);
        history.push(state.best_length);
        stats.push(state.stats());

        while !state.is_terminal(config) {
            state = state.step(matrix, config, &mut rng)?;

            let snapshot = state.stats();
            tracing::debug!(
                generation = snapshot.generation,
                best_length = snapshot.best_length,
                mean_length = snapshot.mean_length,
                "generation complete"
            );
            history.push(snapshot.best_length);
            stats.push(snapshot);
        }

        tracing::info!(
            seed,
            generations = state.generation,
            initial_best_length,
            best_length = state.best_length,
            "ga finished"
        );

        Ok(TspGaResult {
            best: state.best,
            best_length: state.best_length,
            initial_best_length,
            generations: state.generation,
            seed,
            history,
            stats,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;
    use crate::ga::types::is_permutation;
    use crate::instances;

    fn small_config() -> TspGaConfig {
        TspGaConfig::default()
            .with_population_size(30)
            .with_max_generations(60)
            .with_seed(42)
    }

    #[test]
    fn test_unit_square_converges() {
        let config = TspGaConfig::default()
            .with_population_size(20)
            .with_max_generations(50)
            .with_seed(42);
        let result = TspGaRunner::run(&instances::unit_square(), &config).unwrap();
        assert!((result.best_length - 4.0).abs() < 1e-6, "got {}", result.best_length);
        assert!(is_permutation(result.best.cities()));
    }

    #[test]
    fn test_history_length_and_monotonic() {
        let result = TspGaRunner::run(&instances::burma14(), &small_config()).unwrap();
        assert_eq!(result.history.len(), 61);
        assert_eq!(result.stats.len(), 61);
        assert_eq!(result.generations, 60);
        for window in result.history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best length should never increase: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.history[0], result.initial_best_length);
        assert_eq!(*result.history.last().unwrap(), result.best_length);
    }

    #[test]
    fn test_improves_on_random_start() {
        let config = small_config().with_max_generations(150);
        let result = TspGaRunner::run(&instances::burma14(), &config).unwrap();
        assert!(result.best_length < result.initial_best_length);
    }

    #[test]
    fn test_best_length_matches_tour() {
        let cities = instances::burma14();
        let matrix = DistanceMatrix::from_cities(&cities).unwrap();
        let result = TspGaRunner::run_with_matrix(&matrix, &small_config()).unwrap();
        assert!((result.best.length(&matrix) - result.best_length).abs() < 1e-9);
    }

    #[test]
    fn test_stats_mean_not_below_best() {
        let result = TspGaRunner::run(&instances::burma14(), &small_config()).unwrap();
        for s in &result.stats {
            assert!(s.mean_length + 1e-9 >= s.best_length);
        }
    }

    #[test]
    fn test_zero_generations() {
        let config = small_config().with_max_generations(0);
        let result = TspGaRunner::run(&instances::burma14(), &config).unwrap();
        assert_eq!(result.generations, 0);
        assert_eq!(result.history.len(), 1);
        assert_eq!(result.best_length, result.initial_best_length);
    }

    #[test]
    fn test_single_individual_population() {
        let config = small_config().with_population_size(1);
        let result = TspGaRunner::run(&instances::burma14(), &config).unwrap();
        assert_eq!(result.history.len(), 61);
        assert!(result.best_length <= result.initial_best_length);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = small_config().with_generation_gap(0.0);
        let err = TspGaRunner::run(&instances::burma14(), &config).unwrap_err();
        assert!(matches!(
            err,
            TspError::InvalidParameter {
                name: "generation_gap",
                ..
            }
        ));
    }

    #[test]
    fn test_too_few_cities_rejected() {
        let err = TspGaRunner::run(&[City::new(0.0, 0.0)], &small_config()).unwrap_err();
        assert!(matches!(err, TspError::InvalidParameter { name: "cities", .. }));
    }

    #[test]
    fn test_seed_reported_and_reproducible() {
        let config = small_config();
        let a = TspGaRunner::run(&instances::burma14(), &config).unwrap();
        assert_eq!(a.seed, 42);

        let unseeded = TspGaConfig {
            seed: None,
            ..config
        };
        let b = TspGaRunner::run(&instances::burma14(), &unseeded).unwrap();
        let replay = TspGaRunner::run(&instances::burma14(), &unseeded.with_seed(b.seed)).unwrap();
        assert_eq!(b.best, replay.best);
        assert_eq!(b.history, replay.history);
    }

    #[test]
    fn test_step_preserves_population_size() {
        let matrix = DistanceMatrix::from_cities(&instances::circle(9, 1.0)).unwrap();
        let config = small_config().with_population_size(11).with_generation_gap(0.7);
        let mut rng = create_rng(5);
        let mut state = GenerationState::initial(&matrix, &config, &mut rng);
        for g in 1..=20 {
            state = state.step(&matrix, &config, &mut rng).unwrap();
            assert_eq!(state.generation, g);
            assert_eq!(state.population.len(), 11);
            assert_eq!(state.objectives.len(), 11);
            assert!(state.population.iter().all(|t| is_permutation(t.cities())));
        }
    }
}
