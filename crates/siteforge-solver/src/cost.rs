//! Weighted-distance cost model.

use siteforge_core::{Location, Result, SiteForgeError};

pub use siteforge_core::WEIGHT_SCALE;

use crate::lattice::CandidateLattice;
use crate::parallel::EvaluationPool;

/// Computes `sum_i (weight_i * scale) * distance(point_i, site)` per candidate.
///
/// # Examples
///
/// ```
/// use siteforge_core::Location;
/// use siteforge_solver::{CandidateLattice, WeightedCostModel};
///
/// let lattice = CandidateLattice::standard();
/// let points = [Location::new(0.5, 0.5).unwrap()];
/// let costs = WeightedCostModel::default().evaluate(&points, &[5.0], &lattice).unwrap();
///
/// assert_eq!(costs.len(), lattice.len());
/// assert_eq!(costs[lattice.index_of(50, 50)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedCostModel {
    scale: f64,
}

impl Default for WeightedCostModel {
    fn default() -> Self {
        Self::new(WEIGHT_SCALE)
    }
}

impl WeightedCostModel {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Cost of a single site.
    ///
    /// Terms are accumulated in demand-point order.
    #[inline]
    pub fn site_cost(&self, points: &[Location], weights: &[f64], site: &Location) -> f64 {
        points
            .iter()
            .zip(weights)
            .map(|(point, weight)| (weight * self.scale) * point.distance_to(site))
            .sum()
    }

    /// Costs for every lattice site, in lattice order.
    pub fn evaluate(
        &self,
        points: &[Location],
        weights: &[f64],
        lattice: &CandidateLattice,
    ) -> Result<Vec<f64>> {
        self.evaluate_in(points, weights, lattice, &EvaluationPool::Sequential)
    }

    /// Like [`evaluate`](Self::evaluate), running on `pool`.
    pub fn evaluate_in(
        &self,
        points: &[Location],
        weights: &[f64],
        lattice: &CandidateLattice,
        pool: &EvaluationPool,
    ) -> Result<Vec<f64>> {
        check_inputs(points, weights)?;
        Ok(pool.map_sites(lattice.sites(), |site| {
            self.site_cost(points, weights, site)
        }))
    }
}

fn check_inputs(points: &[Location], weights: &[f64]) -> Result<()> {
    if points.len() != weights.len() {
        return Err(SiteForgeError::InvalidInput(format!(
            "{} demand points but {} weights",
            points.len(),
            weights.len()
        )));
    }
    if points.is_empty() {
        return Err(SiteForgeError::InvalidInput(
            "no demand points to evaluate".to_string(),
        ));
    }
    Ok(())
}
