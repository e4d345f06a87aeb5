//! Penalized cost surface over the candidate lattice.

use std::sync::Arc;

use siteforge_core::Location;

use crate::lattice::CandidateLattice;
use crate::selector::select_minimum;

/// The best candidate of a cost surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    /// Suggested site.
    pub location: Location,
    /// Index of the site in lattice order.
    pub index: usize,
    /// Penalized total cost of the site.
    pub cost: f64,
}

/// Per-candidate penalized costs in lattice order.
#[derive(Debug, Clone)]
pub struct CostSurface {
    lattice: Arc<CandidateLattice>,
    costs: Vec<f64>,
    excluded: usize,
}

impl CostSurface {
    pub(crate) fn new(lattice: Arc<CandidateLattice>, costs: Vec<f64>, excluded: usize) -> Self {
        debug_assert_eq!(lattice.len(), costs.len());
        Self {
            lattice,
            costs,
            excluded,
        }
    }

    #[inline]
    pub fn lattice(&self) -> &CandidateLattice {
        &self.lattice
    }

    #[inline]
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Cost at grid coordinates `(i, j)`.
    pub fn cost_at(&self, i: usize, j: usize) -> f64 {
        self.costs[self.lattice.index_of(i, j)]
    }

    /// Number of candidates inside at least one exclusion zone.
    #[inline]
    pub fn excluded_count(&self) -> usize {
        self.excluded
    }

    /// Whether every candidate lies inside some exclusion zone.
    #[inline]
    pub fn all_excluded(&self) -> bool {
        self.excluded == self.costs.len()
    }

    /// The minimum-cost candidate, ties going to the lowest lattice index.
    pub fn best(&self) -> Option<Suggestion> {
        select_minimum(&self.costs).map(|index| Suggestion {
            location: self.lattice.site(index),
            index,
            cost: self.costs[index],
        })
    }
}
