//! Stochastic universal sampling.
//!
//! SUS draws all breeders in one spin: a single random offset places
//! `n_sel` equally spaced pointers over the cumulative fitness, and each
//! pointer picks the individual whose interval contains it. Every
//! individual is selected either `floor` or `ceil` of its expected count,
//! which gives the minimum spread of any fitness-proportional scheme.
//!
//! # References
//!
//! - Baker (1987), "Reducing Bias and Inefficiency in the Selection Algorithm"

use crate::error::{TspError, TspResult};
use crate::random::shuffle;
use rand::Rng;

/// Number of breeders drawn per generation:
/// `max(round(population_size * generation_gap), 1)`.
pub fn selection_count(population_size: usize, generation_gap: f64) -> usize {
    ((population_size as f64 * generation_gap).round() as usize).max(1)
}

/// Selects [`selection_count`] breeders by SUS.
///
/// # Errors
///
/// See [`stochastic_universal_sampling`].
pub fn select<R: Rng>(fitness: &[f64], generation_gap: f64, rng: &mut R) -> TspResult<Vec<usize>> {
    let n_sel = selection_count(fitness.len(), generation_gap);
    stochastic_universal_sampling(fitness, n_sel, rng)
}

/// Draws `n_sel` indices into `fitness` with SUS, then shuffles them.
///
/// Pointer `k` sits at `(offset + k) / n_sel * total` with one uniform
/// `offset` in `[0, 1)`. Individual `i` owns the interval
/// `(cum[i - 1], cum[i]]`.
///
/// # Errors
///
/// - [`TspError::InvalidParameter`] if `fitness` is empty or `n_sel` is 0.
/// - [`TspError::DegenerateFitness`] if any weight is negative or not
///   finite, or the weights sum to zero.
///
/// # Complexity
/// O(n + n_sel log n)
pub fn stochastic_universal_sampling<R: Rng>(
    fitness: &[f64],
    n_sel: usize,
    rng: &mut R,
) -> TspResult<Vec<usize>> {
    if fitness.is_empty() {
        return Err(TspError::invalid("fitness", "cannot select from an empty population"));
    }
    if n_sel == 0 {
        return Err(TspError::invalid("n_sel", "must select at least one individual"));
    }

    let mut cumulative = Vec::with_capacity(fitness.len());
    let mut total = 0.0;
    for &f in fitness {
        if !f.is_finite() || f < 0.0 {
            return Err(TspError::DegenerateFitness { total: f });
        }
        total += f;
        cumulative.push(total);
    }
    if !(total > 0.0 && total.is_finite()) {
        return Err(TspError::DegenerateFitness { total });
    }

    let last = fitness.len() - 1;
    let offset: f64 = rng.random();
    let spacing = total / n_sel as f64;

    let mut chosen: Vec<usize> = (0..n_sel)
        .map(|k| {
            let pointer = (offset + k as f64) * spacing;
            cumulative.partition_point(|&c| c < pointer).min(last)
        })
        .collect();

    shuffle(&mut chosen, rng);
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_selection_count() {
        assert_eq!(selection_count(100, 0.9), 90);
        assert_eq!(selection_count(20, 1.0), 20);
        assert_eq!(selection_count(5, 0.01), 1);
        assert_eq!(selection_count(3, 0.5), 2);
    }

    #[test]
    fn test_counts_are_floor_or_ceil_of_expectation() {
        let fitness = [0.1, 0.55, 1.0, 1.45, 1.9];
        let total: f64 = fitness.iter().sum();
        let n_sel = 7;
        let mut rng = create_rng(42);

        for _ in 0..200 {
            let chosen = stochastic_universal_sampling(&fitness, n_sel, &mut rng).unwrap();
            assert_eq!(chosen.len(), n_sel);
            for (i, &f) in fitness.iter().enumerate() {
                let expected = n_sel as f64 * f / total;
                let count = chosen.iter().filter(|&&c| c == i).count() as f64;
                assert!(
                    count >= expected.floor() - 1e-9 && count <= expected.ceil() + 1e-9,
                    "individual {i}: count {count}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn test_frequency_converges_to_fitness_share() {
        let fitness = [1.0, 2.0, 3.0, 4.0];
        let total: f64 = fitness.iter().sum();
        let mut rng = create_rng(7);
        let mut counts = [0usize; 4];
        let trials = 5000;
        let n_sel = 3;

        for _ in 0..trials {
            for i in stochastic_universal_sampling(&fitness, n_sel, &mut rng).unwrap() {
                counts[i] += 1;
            }
        }

        let draws = (trials * n_sel) as f64;
        for (i, &f) in fitness.iter().enumerate() {
            let observed = counts[i] as f64 / draws;
            let expected = f / total;
            assert!(
                (observed - expected).abs() < 0.01,
                "individual {i}: observed {observed}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(42);
        let chosen = stochastic_universal_sampling(&[0.3], 4, &mut rng).unwrap();
        assert_eq!(chosen, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_output_is_shuffled() {
        // Without the shuffle, SUS output is sorted by index.
        let fitness = vec![1.0; 30];
        let mut rng = create_rng(11);
        let chosen = stochastic_universal_sampling(&fitness, 30, &mut rng).unwrap();
        let mut sorted = chosen.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..30).collect::<Vec<_>>());
        assert_ne!(chosen, sorted);
    }

    #[test]
    fn test_zero_total_is_degenerate() {
        let mut rng = create_rng(42);
        let err = stochastic_universal_sampling(&[0.0, 0.0], 2, &mut rng).unwrap_err();
        assert!(matches!(err, TspError::DegenerateFitness { .. }));
    }

    #[test]
    fn test_negative_weight_is_degenerate() {
        let mut rng = create_rng(42);
        let err = stochastic_universal_sampling(&[1.0, -2.0], 2, &mut rng).unwrap_err();
        assert!(matches!(err, TspError::DegenerateFitness { .. }));
    }

    #[test]
    fn test_invalid_sizes() {
        let mut rng = create_rng(42);
        assert!(matches!(
            stochastic_universal_sampling(&[], 1, &mut rng),
            Err(TspError::InvalidParameter { .. })
        ));
        assert!(matches!(
            stochastic_universal_sampling(&[1.0], 0, &mut rng),
            Err(TspError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_select_uses_generation_gap() {
        let mut rng = create_rng(42);
        let fitness = vec![1.0; 10];
        assert_eq!(select(&fitness, 0.6, &mut rng).unwrap().len(), 6);
    }
}
