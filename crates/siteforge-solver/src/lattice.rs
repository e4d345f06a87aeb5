//! Fixed discretization of the unit square.

use std::sync::{Arc, OnceLock};

use siteforge_config::{DEFAULT_RESOLUTION, MAX_RESOLUTION};
use siteforge_core::Location;

static STANDARD: OnceLock<Arc<CandidateLattice>> = OnceLock::new();

/// The ordered set of candidate sites searched on every suggestion.
///
/// Sites are `(i / resolution, j / resolution)` for `i, j` in
/// `0..=resolution`, enumerated with `i` (x) as the outer loop and `j` (y)
/// as the inner loop. The enumeration order decides ties, so
/// `index = i * sites_per_axis + j` is part of the contract.
///
/// # Examples
///
/// ```
/// use siteforge_solver::CandidateLattice;
///
/// let lattice = CandidateLattice::standard();
/// assert_eq!(lattice.len(), 10_201);
///
/// let site = lattice.site(lattice.index_of(50, 25));
/// assert_eq!((site.x(), site.y()), (0.5, 0.25));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateLattice {
    resolution: u32,
    sites: Vec<Location>,
}

impl CandidateLattice {
    /// Builds a lattice with `resolution + 1` sites per axis.
    ///
    /// # Panics
    ///
    /// Panics if `resolution` is zero or above [`MAX_RESOLUTION`].
    pub fn new(resolution: u32) -> Self {
        assert!(resolution > 0, "lattice resolution must be at least 1");
        assert!(
            resolution <= MAX_RESOLUTION,
            "lattice resolution must be at most {MAX_RESOLUTION}"
        );
        let per_axis = resolution as usize + 1;
        let step = resolution as f64;
        let mut sites = Vec::with_capacity(per_axis * per_axis);
        for i in 0..per_axis {
            for j in 0..per_axis {
                sites.push(Location::new_unchecked(i as f64 / step, j as f64 / step));
            }
        }
        Self { resolution, sites }
    }

    /// The shared 101 x 101 lattice, built once per process.
    pub fn standard() -> Arc<CandidateLattice> {
        STANDARD
            .get_or_init(|| Arc::new(CandidateLattice::new(DEFAULT_RESOLUTION)))
            .clone()
    }

    /// Returns the shared lattice for the default resolution, a fresh one otherwise.
    pub fn with_resolution(resolution: u32) -> Arc<CandidateLattice> {
        if resolution == DEFAULT_RESOLUTION {
            Self::standard()
        } else {
            Arc::new(Self::new(resolution))
        }
    }

    #[inline]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    #[inline]
    pub fn sites_per_axis(&self) -> usize {
        self.resolution as usize + 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// All sites in enumeration order.
    #[inline]
    pub fn sites(&self) -> &[Location] {
        &self.sites
    }

    #[inline]
    pub fn site(&self, index: usize) -> Location {
        self.sites[index]
    }

    /// Lattice index of grid coordinates `(i, j)`.
    #[inline]
    pub fn index_of(&self, i: usize, j: usize) -> usize {
        let per_axis = self.sites_per_axis();
        debug_assert!(
            i < per_axis && j < per_axis,
            "grid position ({i}, {j}) outside a {per_axis} x {per_axis} lattice"
        );
        i * per_axis + j
    }

    /// Grid coordinates `(i, j)` of a lattice index.
    #[inline]
    pub fn grid_position(&self, index: usize) -> (usize, usize) {
        let per_axis = self.sites_per_axis();
        (index / per_axis, index % per_axis)
    }
}
