//! Domain types for facility siting.

use crate::error::{Result, SiteForgeError};
use crate::geometry::Location;

/// Smallest accepted demand weight.
pub const MIN_WEIGHT: f64 = 0.0;

/// Largest accepted demand weight.
pub const MAX_WEIGHT: f64 = 10.0;

/// Calibration applied to demand weights so 0-10 weights stay comparable
/// with unit-square distances.
pub const WEIGHT_SCALE: f64 = 0.01;

/// A weighted location representing aggregated need.
///
/// # Examples
///
/// ```
/// use siteforge_core::{DemandPoint, Location};
///
/// let p = DemandPoint::new(Location::new(0.5, 0.5).unwrap(), 5.0).unwrap();
/// assert_eq!(p.weight(), 5.0);
///
/// assert!(DemandPoint::from_percent(50, 50, 11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDemandPoint"))]
pub struct DemandPoint {
    location: Location,
    weight: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDemandPoint {
    location: Location,
    weight: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDemandPoint> for DemandPoint {
    type Error = SiteForgeError;

    fn try_from(raw: RawDemandPoint) -> Result<Self> {
        DemandPoint::new(raw.location, raw.weight)
    }
}

impl DemandPoint {
    /// Creates a demand point, rejecting weights outside `[0, 10]`.
    pub fn new(location: Location, weight: f64) -> Result<Self> {
        let weight = SiteForgeError::check_range("weight", weight, MIN_WEIGHT, MAX_WEIGHT)?;
        Ok(Self { location, weight })
    }

    /// Creates a demand point from percent coordinates and an integer weight.
    pub fn from_percent(x: u32, y: u32, weight: u32) -> Result<Self> {
        Self::new(Location::from_percent(x, y)?, weight as f64)
    }

    #[inline]
    pub const fn location(&self) -> Location {
        self.location
    }

    #[inline]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

/// How a facility entered the committed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FacilityKind {
    /// Placed directly by the user.
    Manual,
    /// Suggested by the optimizer and later committed.
    Algorithmic,
}

/// A decided site.
///
/// Deserializing validates the location the same way [`Location::new`] does.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facility {
    location: Location,
    kind: FacilityKind,
}

impl Facility {
    pub const fn manual(location: Location) -> Self {
        Self {
            location,
            kind: FacilityKind::Manual,
        }
    }

    pub const fn algorithmic(location: Location) -> Self {
        Self {
            location,
            kind: FacilityKind::Algorithmic,
        }
    }

    #[inline]
    pub const fn location(&self) -> Location {
        self.location
    }

    #[inline]
    pub const fn kind(&self) -> FacilityKind {
        self.kind
    }

    #[inline]
    pub fn is_manual(&self) -> bool {
        self.kind == FacilityKind::Manual
    }
}
