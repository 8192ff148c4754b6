//! Bundled TSP instances.
//!
//! Small coordinate sets used by tests, benchmarks and quick experiments.

use crate::geometry::City;
use std::f64::consts::PI;

/// The 14-city Burma instance (TSPLIB `burma14`, geographic coordinates
/// treated as planar points).
pub fn burma14() -> Vec<City> {
    [
        (16.47, 96.10),
        (16.47, 94.44),
        (20.09, 92.54),
        (22.39, 93.37),
        (25.23, 97.24),
        (22.00, 96.05),
        (20.47, 97.02),
        (17.20, 96.29),
        (16.30, 97.38),
        (14.05, 98.12),
        (16.53, 97.38),
        (21.52, 95.59),
        (19.41, 97.13),
        (20.09, 92.55),
    ]
    .into_iter()
    .map(City::from)
    .collect()
}

/// Corners of the unit square. The optimal tour is the perimeter, length 4.
pub fn unit_square() -> Vec<City> {
    vec![
        City::new(0.0, 0.0),
        City::new(0.0, 1.0),
        City::new(1.0, 1.0),
        City::new(1.0, 0.0),
    ]
}

/// `n` points evenly spaced on a circle of `radius` around the origin.
///
/// The optimal tour follows the circle; see [`circle_optimum`].
pub fn circle(n: usize, radius: f64) -> Vec<City> {
    (0..n)
        .map(|k| {
            let theta = 2.0 * PI * k as f64 / n as f64;
            City::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// Perimeter of the regular `n`-gon inscribed in a circle of `radius`.
pub fn circle_optimum(n: usize, radius: f64) -> f64 {
    2.0 * n as f64 * radius * (PI / n as f64).sin()
}
