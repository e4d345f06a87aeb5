//! Exclusion penalty around committed facilities.

use siteforge_config::SitingConfig;
use siteforge_core::{Location, Result, SiteForgeError};

use crate::lattice::CandidateLattice;

/// Inflates the cost of candidates closer than `min_distance` to a
/// committed facility.
///
/// The penalty is charged once per demand point and once per violated
/// facility: a candidate within range of two facilities with three demand
/// points gains `2 * 3 * penalty`. Scaling by the demand point count keeps
/// excluded candidates above any reachable weighted-distance cost.
///
/// # Examples
///
/// ```
/// use siteforge_core::Location;
/// use siteforge_solver::{CandidateLattice, ExclusionPenalty};
///
/// let lattice = CandidateLattice::new(10);
/// let mut costs = vec![0.0; lattice.len()];
/// let facility = [Location::new(0.0, 0.0).unwrap()];
///
/// let excluded = ExclusionPenalty::new(0.15, 1e6)
///     .apply(&mut costs, &lattice, &facility, 2)
///     .unwrap();
///
/// // (0, 0), (0, 0.1) and (0.1, 0) and (0.1, 0.1) are within 0.15
/// assert_eq!(excluded, 4);
/// assert_eq!(costs[0], 2e6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExclusionPenalty {
    min_distance: f64,
    penalty: f64,
}

impl ExclusionPenalty {
    pub fn new(min_distance: f64, penalty: f64) -> Self {
        Self {
            min_distance,
            penalty,
        }
    }

    pub fn from_config(config: &SitingConfig) -> Self {
        Self::new(config.min_distance, config.penalty)
    }

    #[inline]
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    #[inline]
    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Whether `site` lies strictly inside the exclusion zone of `facility`.
    #[inline]
    pub fn excludes(&self, site: &Location, facility: &Location) -> bool {
        site.distance_to(facility) < self.min_distance
    }

    /// Adds penalties to `costs` in place.
    ///
    /// Returns the number of candidates that received at least one penalty.
    pub fn apply(
        &self,
        costs: &mut [f64],
        lattice: &CandidateLattice,
        facilities: &[Location],
        num_points: usize,
    ) -> Result<usize> {
        if costs.len() != lattice.len() {
            return Err(SiteForgeError::InvalidInput(format!(
                "{} costs for {} candidate sites",
                costs.len(),
                lattice.len()
            )));
        }

        let per_facility = self.penalty * num_points as f64;
        let mut excluded = 0;
        for (cost, site) in costs.iter_mut().zip(lattice.sites()) {
            let violations = facilities
                .iter()
                .filter(|facility| self.excludes(site, facility))
                .count();
            if violations > 0 {
                *cost += per_facility * violations as f64;
                excluded += 1;
            }
        }
        Ok(excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(x: f64, y: f64) -> Location {
        Location::new(x, y).unwrap()
    }

    #[test]
    fn test_no_facilities_no_penalty() {
        let lattice = CandidateLattice::new(10);
        let mut costs = vec![1.0; lattice.len()];
        let excluded = ExclusionPenalty::new(0.2, 1e6)
            .apply(&mut costs, &lattice, &[], 5)
            .unwrap();
        assert_eq!(excluded, 0);
        assert!(costs.iter().all(|&c| c == 1.0));
    }

    #[test]
    fn test_penalty_scales_with_point_count() {
        let lattice = CandidateLattice::standard();
        let center = lattice.index_of(50, 50);
        let facilities = [loc(0.5, 0.5)];

        let mut one = vec![0.0; lattice.len()];
        ExclusionPenalty::new(0.2, 1e6)
            .apply(&mut one, &lattice, &facilities, 1)
            .unwrap();
        let mut three = vec![0.0; lattice.len()];
        ExclusionPenalty::new(0.2, 1e6)
            .apply(&mut three, &lattice, &facilities, 3)
            .unwrap();

        assert_eq!(one[center], 1e6);
        assert_eq!(three[center], 3e6);
    }

    #[test]
    fn test_overlapping_zones_accumulate() {
        let lattice = CandidateLattice::standard();
        let facilities = [loc(0.5, 0.5), loc(0.6, 0.5)];
        let mut costs = vec![0.0; lattice.len()];
        ExclusionPenalty::new(0.2, 1e6)
            .apply(&mut costs, &lattice, &facilities, 2)
            .unwrap();

        // Inside both zones
        assert_eq!(costs[lattice.index_of(55, 50)], 4e6);
        // Inside only the first
        assert_eq!(costs[lattice.index_of(35, 50)], 2e6);
        // Outside both
        assert_eq!(costs[lattice.index_of(0, 0)], 0.0);
    }

    #[test]
    fn test_boundary_is_not_excluded() {
        let penalty = ExclusionPenalty::new(0.5, 1e6);
        let facility = loc(0.0, 0.0);
        assert!(!penalty.excludes(&loc(0.5, 0.0), &facility));
        assert!(penalty.excludes(&loc(0.49, 0.0), &facility));
    }

    #[test]
    fn test_length_mismatch() {
        let lattice = CandidateLattice::new(4);
        let mut costs = vec![0.0; 3];
        let err = ExclusionPenalty::new(0.2, 1e6)
            .apply(&mut costs, &lattice, &[loc(0.5, 0.5)], 1)
            .unwrap_err();
        assert!(matches!(err, SiteForgeError::InvalidInput(_)));
    }
}
