//! Error types for the TSP solver.
//!
//! Every fallible operation returns [`TspResult`]. Parameter problems are
//! reported before any computation starts; there is no partial-result
//! path once a run has begun.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type TspResult<T> = Result<T, TspError>;

/// Unified error type for solver operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// A parameter or input is outside its valid domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Selection was asked to sample from a fitness vector whose total is
    /// not strictly positive.
    #[error("degenerate fitness: total fitness {total} must be positive and finite")]
    DegenerateFitness {
        /// Sum of the fitness vector.
        total: f64,
    },

    /// A city sequence is not a permutation of `0..n`.
    #[error("invalid tour: {reason}")]
    InvalidTour {
        /// Description of the violation.
        reason: String,
    },
}

impl TspError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        TspError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
