//! Cities and the Euclidean distance matrix.
//!
//! The matrix is built once per run and only read afterwards. It is stored
//! row-major in a flat buffer so a lookup is a single index computation.

use crate::error::{TspError, TspResult};

/// A city in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Symmetric matrix of pairwise city distances with a zero diagonal.
///
/// # Examples
///
/// ```
/// use u_tspga::{City, DistanceMatrix};
///
/// let cities = [City::new(0.0, 0.0), City::new(3.0, 4.0)];
/// let m = DistanceMatrix::from_cities(&cities).unwrap();
/// assert_eq!(m.get(0, 1), 5.0);
/// assert_eq!(m.get(1, 0), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix from city coordinates.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidParameter`] if fewer than two cities are given or
    /// a coordinate is not finite.
    pub fn from_cities(cities: &[City]) -> TspResult<Self> {
        let n = cities.len();
        if n < 2 {
            return Err(TspError::invalid(
                "cities",
                format!("at least 2 cities are required, got {n}"),
            ));
        }
        if let Some(i) = cities
            .iter()
            .position(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(TspError::invalid(
                "cities",
                format!("city {i} has a non-finite coordinate"),
            ));
        }

        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        Ok(Self { n, data })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`; a matrix holds at least two cities.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between cities `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "city index out of range");
        self.data[i * self.n + j]
    }

    /// Length of the closed tour visiting `order`, including the edge from
    /// the last city back to the first.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        match order.len() {
            0 | 1 => 0.0,
            len => {
                let open: f64 = order.windows(2).map(|w| self.get(w[0], w[1])).sum();
                open + self.get(order[len - 1], order[0])
            }
        }
    }
}
