//! Objective evaluation and rank-based fitness.
//!
//! The objective of a tour is its closed length (lower is better). Selection
//! needs the opposite orientation and strictly positive weights, so
//! objectives are mapped to fitness by linear ranking.
//!
//! # References
//!
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use super::types::Tour;
use crate::geometry::DistanceMatrix;

/// Closed tour length of every individual, in population order.
pub fn evaluate_objectives(population: &[Tour], matrix: &DistanceMatrix) -> Vec<f64> {
    population.iter().map(|t| t.length(matrix)).collect()
}

/// Linear ranking fitness for minimization.
///
/// Individuals are ranked from worst (`r = 0`) to best (`r = n - 1`) and get
///
/// ```text
/// fitness(r) = (2 - sp) + 2 (sp - 1) r / (n - 1)
/// ```
///
/// so the worst keeps the positive baseline `2 - sp` and the best gets `sp`.
/// Equal objectives share the mean fitness of the ranks they span. A single
/// individual gets `1.0`.
///
/// `selective_pressure` must lie in `(1, 2)`; the caller validates it.
///
/// # Complexity
/// O(n log n)
pub fn linear_ranking(objectives: &[f64], selective_pressure: f64) -> Vec<f64> {
    let n = objectives.len();
    if n <= 1 {
        return vec![1.0; n];
    }

    let sp = selective_pressure;
    let step = 2.0 * (sp - 1.0) / (n - 1) as f64;
    let at_rank = |r: f64| (2.0 - sp) + step * r;

    // Worst (longest) first.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| objectives[b].total_cmp(&objectives[a]));

    let mut fitness = vec![0.0; n];
    let mut start = 0;
    while start < n {
        let value = objectives[order[start]];
        let mut end = start + 1;
        while end < n && objectives[order[end]] == value {
            end += 1;
        }
        let shared = at_rank((start + end - 1) as f64 / 2.0);
        for &idx in &order[start..end] {
            fitness[idx] = shared;
        }
        start = end;
    }

    fitness
}

/// Arithmetic mean of `values`; `0.0` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Index of the smallest objective (the first one on ties).
///
/// # Panics
/// Panics if `objectives` is empty.
pub(crate) fn best_index(objectives: &[f64]) -> usize {
    objectives
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .expect("population must not be empty")
}
