//! Genetic algorithm for the symmetric Euclidean Traveling Salesman Problem.
//!
//! Cities are points in the plane; a tour is a permutation of city indices
//! with an implicit return edge. The solver evolves a population of tours:
//!
//! 1. **Ranking**: tour lengths become strictly positive linear-rank fitness
//! 2. **Selection**: stochastic universal sampling picks `GGAP * NIND` breeders
//! 3. **Crossover**: order crossover (OX) on adjacent pairs with probability Pc
//! 4. **Mutation**: swap of two distinct cities with probability Pm
//! 5. **Reversal**: one greedy segment reversal, kept only if it shortens the tour
//! 6. **Reinsertion**: offspring replace the worst parents; the best survive
//!
//! The loop runs for exactly `max_generations` generations. All randomness
//! comes from one seedable generator, so a fixed seed reproduces a run.
//!
//! # Example
//!
//! ```
//! use u_tspga::ga::{TspGaConfig, TspGaRunner};
//! use u_tspga::instances;
//!
//! let config = TspGaConfig::default()
//!     .with_population_size(60)
//!     .with_max_generations(100)
//!     .with_seed(7);
//! let result = TspGaRunner::run(&instances::burma14(), &config).unwrap();
//! println!("{} (length {:.3})", result.best, result.best_length);
//! ```

pub mod error;
pub mod ga;
pub mod geometry;
pub mod instances;
pub mod random;

pub use error::{TspError, TspResult};
pub use geometry::{City, DistanceMatrix};
