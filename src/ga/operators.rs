//! Permutation operators for tour chromosomes.
//!
//! Crossover, mutation and the reversal improvement step. The slice-level
//! operators work on `&[usize]` orders; the population-level functions
//! apply them with the configured probabilities.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): Davis (1985), preserves relative order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct positions, O(1)
//!
//! # Local improvement
//!
//! - [`reverse_if_shorter`]: reverse a random segment, keep it only if the
//!   tour gets strictly shorter (one 2-opt move), O(n)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"

use super::types::Tour;
use crate::geometry::DistanceMatrix;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) for permutations.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Select a random segment `[start, end]`
/// 2. Child 1 keeps parent 1's segment at the same positions
/// 3. The remaining positions are filled with parent 2's cities in their
///    order, starting after the segment and wrapping around
///
/// Child 2 is built the same way with the parents' roles swapped.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (start, end) = random_segment(n, rng);

    (
        ox_build_child(parent1, parent2, start, end),
        ox_build_child(parent2, parent1, start, end),
    )
}

/// Build one OX child: keep `template`'s segment, fill from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let city = donor[(end + 1 + offset) % n];
        if !in_segment[city] {
            child[pos] = city;
            pos = (pos + 1) % n;
        }
    }

    child
}

/// Applies [`order_crossover`] to each adjacent pair `(0, 1), (2, 3), ...`
/// with probability `crossover_rate`. Pairs that are not crossed, and an
/// odd trailing individual, pass through unchanged.
pub fn recombine<R: Rng>(mut population: Vec<Tour>, crossover_rate: f64, rng: &mut R) -> Vec<Tour> {
    for pair in population.chunks_exact_mut(2) {
        if rng.random_range(0.0..1.0) < crossover_rate {
            let (c1, c2) = order_crossover(pair[0].cities(), pair[1].cities(), rng);
            pair[0] = Tour::from_permutation(c1);
            pair[1] = Tour::from_permutation(c2);
        }
    }
    population
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange the cities at two distinct random positions.
///
/// No-op for fewer than two cities.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let (i, j) = distinct_pair(n, rng);
    perm.swap(i, j);
}

/// Applies [`swap_mutation`] to each individual with probability
/// `mutation_rate`.
pub fn mutate<R: Rng>(population: &mut [Tour], mutation_rate: f64, rng: &mut R) {
    for tour in population.iter_mut() {
        if rng.random_range(0.0..1.0) < mutation_rate {
            swap_mutation(tour.cities_mut(), rng);
        }
    }
}

// ============================================================================
// Reversal improvement
// ============================================================================

/// Tries one segment reversal on `tour` and keeps it only if the closed
/// length drops below `length`. Returns the (possibly unchanged) length.
///
/// The segment is `[lo, hi]` for two distinct uniform positions. Tours of
/// fewer than four cities are never changed: every ordering of three
/// cities has the same closed length.
pub fn reverse_if_shorter<R: Rng>(
    tour: &mut Tour,
    length: f64,
    matrix: &DistanceMatrix,
    rng: &mut R,
) -> f64 {
    let n = tour.len();
    if n < 4 {
        return length;
    }

    let (lo, hi) = distinct_pair(n, rng);
    if hi - lo + 1 == n {
        // reversing the whole cycle only changes direction
        return length;
    }

    let mut candidate = tour.cities().to_vec();
    candidate[lo..=hi].reverse();
    let candidate_length = matrix.tour_length(&candidate);

    if candidate_length < length {
        *tour = Tour::from_permutation(candidate);
        candidate_length
    } else {
        length
    }
}

/// Runs `attempts` rounds of [`reverse_if_shorter`] on every individual
/// and returns the resulting objective values in population order.
pub fn improve<R: Rng>(
    population: &mut [Tour],
    matrix: &DistanceMatrix,
    attempts: usize,
    rng: &mut R,
) -> Vec<f64> {
    population
        .iter_mut()
        .map(|tour| {
            let mut length = tour.length(matrix);
            for _ in 0..attempts {
                length = reverse_if_shorter(tour, length, matrix, rng);
            }
            length
        })
        .collect()
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Two distinct positions in `0..n`, ordered. Requires `n >= 2`.
fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
