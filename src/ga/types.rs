//! Chromosome representation.
//!
//! A [`Tour`] is a permutation of city indices. The permutation property is
//! checked at the public boundary ([`Tour::new`]); the genetic operators
//! preserve it by construction and build tours through
//! [`Tour::from_permutation`].

use crate::error::{TspError, TspResult};
use crate::geometry::DistanceMatrix;
use crate::random::shuffle;
use rand::Rng;
use std::fmt;

/// A closed tour visiting every city exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Tour(Vec<usize>);

/// A generation's worth of tours.
pub type Population = Vec<Tour>;

impl Tour {
    /// Wraps `order` after checking it is a permutation of `0..order.len()`.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidTour`] on an out-of-range or repeated city.
    pub fn new(order: Vec<usize>) -> TspResult<Self> {
        let n = order.len();
        let mut seen = vec![false; n];
        for &city in &order {
            if city >= n {
                return Err(TspError::InvalidTour {
                    reason: format!("city {city} out of range for {n} cities"),
                });
            }
            if std::mem::replace(&mut seen[city], true) {
                return Err(TspError::InvalidTour {
                    reason: format!("city {city} visited twice"),
                });
            }
        }
        Ok(Self(order))
    }

    /// A uniformly random tour over `n` cities.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        shuffle(&mut order, rng);
        Self(order)
    }

    pub(crate) fn from_permutation(order: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&order));
        Self(order)
    }

    /// City indices in visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.0
    }

    pub(crate) fn cities_mut(&mut self) -> &mut [usize] {
        &mut self.0
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for the zero-city tour.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Closed tour length under `matrix`.
    pub fn length(&self, matrix: &DistanceMatrix) -> f64 {
        matrix.tour_length(&self.0)
    }

    /// Consumes the tour, returning the city order.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = TspError;

    fn try_from(order: Vec<usize>) -> TspResult<Self> {
        Tour::new(order)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.0
    }
}

/// Route notation, closing back at the first city: `0 -> 2 -> 1 -> 0`.
impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.0.first() else {
            return Ok(());
        };
        for city in &self.0 {
            write!(f, "{city} -> ")?;
        }
        write!(f, "{first}")
    }
}

/// `size` independent uniformly random tours over `n` cities.
pub fn random_population<R: Rng>(size: usize, n: usize, rng: &mut R) -> Population {
    (0..size).map(|_| Tour::random(n, rng)).collect()
}

/// `true` if `order` is a permutation of `0..order.len()`.
pub fn is_permutation(order: &[usize]) -> bool {
    let n = order.len();
    let mut seen = vec![false; n];
    order
        .iter()
        .all(|&c| c < n && !std::mem::replace(&mut seen[c], true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_new_accepts_permutation() {
        let tour = Tour::new(vec![2, 0, 1]).unwrap();
        assert_eq!(tour.cities(), &[2, 0, 1]);
        assert_eq!(tour.len(), 3);
    }

    #[test]
    fn test_new_rejects_duplicate() {
        let err = Tour::new(vec![0, 1, 1]).unwrap_err();
        assert!(matches!(err, TspError::InvalidTour { .. }));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Tour::try_from(vec![0, 3, 1]).is_err());
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let tour = Tour::random(15, &mut rng);
            assert!(is_permutation(tour.cities()));
            assert_eq!(tour.len(), 15);
        }
    }

    #[test]
    fn test_random_tours_differ() {
        let mut rng = create_rng(1);
        let a = Tour::random(20, &mut rng);
        let b = Tour::random(20, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_random_population_shape() {
        let mut rng = create_rng(3);
        let pop = random_population(25, 9, &mut rng);
        assert_eq!(pop.len(), 25);
        assert!(pop.iter().all(|t| t.len() == 9 && is_permutation(t.cities())));
    }

    #[test]
    fn test_display_route() {
        let tour = Tour::new(vec![0, 3, 1, 2]).unwrap();
        assert_eq!(tour.to_string(), "0 -> 3 -> 1 -> 2 -> 0");
        assert_eq!(Tour::new(vec![]).unwrap().to_string(), "");
    }
}
