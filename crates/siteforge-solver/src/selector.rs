//! Deterministic minimum selection.

use std::cmp::Ordering;

/// Returns the index of the minimum cost, or `None` for an empty slice.
///
/// Equal minima resolve to the lowest index, which on a candidate lattice
/// means lowest `i` (x) first, then lowest `j` (y). `-0.0` and `0.0`
/// compare equal.
///
/// # Examples
///
/// ```
/// use siteforge_solver::select_minimum;
///
/// assert_eq!(select_minimum(&[3.0, 1.0, 1.0, 2.0]), Some(1));
/// assert_eq!(select_minimum(&[]), None);
/// ```
pub fn select_minimum(costs: &[f64]) -> Option<usize> {
    costs
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .map(|(index, _)| index)
}
