//! Brute-force reference for the penalized lattice search.
//!
//! Builds the full demand x candidate matrix, adds the penalty to every
//! row of an excluded column, sums columns and takes the first minimum.
//! Slow and allocation heavy; only for cross-checking.

use siteforge_core::Location;

fn lattice(resolution: u32) -> Vec<Location> {
    let step = resolution as f64;
    (0..=resolution)
        .flat_map(|i| {
            (0..=resolution).map(move |j| Location::new_unchecked(i as f64 / step, j as f64 / step))
        })
        .collect()
}

/// Column sums of the penalized weighted-distance matrix.
pub fn reference_costs(
    points: &[Location],
    weights: &[f64],
    facilities: &[Location],
    resolution: u32,
    min_distance: f64,
    penalty: f64,
) -> Vec<f64> {
    let grid = lattice(resolution);
    let mut matrix: Vec<Vec<f64>> = points
        .iter()
        .zip(weights)
        .map(|(point, weight)| {
            let scaled = weight * 0.01;
            grid.iter().map(|site| scaled * point.distance_to(site)).collect()
        })
        .collect();

    for facility in facilities {
        for (column, site) in grid.iter().enumerate() {
            if site.distance_to(facility) < min_distance {
                for row in matrix.iter_mut() {
                    row[column] += penalty;
                }
            }
        }
    }

    (0..grid.len())
        .map(|column| matrix.iter().map(|row| row[column]).sum())
        .collect()
}

/// First minimum of [`reference_costs`], as a location.
pub fn reference_suggestion(
    points: &[Location],
    weights: &[f64],
    facilities: &[Location],
    resolution: u32,
    min_distance: f64,
    penalty: f64,
) -> Location {
    let costs = reference_costs(points, weights, facilities, resolution, min_distance, penalty);
    let mut best = 0;
    for (index, &cost) in costs.iter().enumerate() {
        if cost < costs[best] {
            best = index;
        }
    }
    lattice(resolution)[best]
}
