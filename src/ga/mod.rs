//! Genetic Algorithm for the TSP.
//!
//! A generational GA over permutation-encoded tours, following the
//! classic ranking / SUS / reinsertion pipeline.
//!
//! # Key Types
//!
//! - [`TspGaConfig`]: Algorithm parameters (NIND, MAXGEN, Pc, Pm, GGAP)
//! - [`TspGaRunner`]: Executes the evolutionary loop
//! - [`GenerationState`]: The value threaded from one generation to the next
//! - [`TspGaResult`]: Best tour, its length, and the per-generation trace
//!
//! # Submodules
//!
//! - [`fitness`]: Objective evaluation and linear ranking
//! - [`selection`]: Stochastic universal sampling
//! - [`operators`]: Order crossover, swap mutation, reversal improvement
//! - [`reinsertion`]: Elitist replacement of the worst parents
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Pohlheim, *GEATbx: Genetic and Evolutionary Algorithm Toolbox*

mod config;
pub mod fitness;
pub mod operators;
pub mod reinsertion;
mod runner;
pub mod selection;
mod types;

pub use config::TspGaConfig;
pub use runner::{GenerationState, GenerationStats, TspGaResult, TspGaRunner};
pub use types::{is_permutation, random_population, Population, Tour};
