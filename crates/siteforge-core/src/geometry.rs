//! Normalized planar geometry.
//!
//! Every location handled by SiteForge lives on the closed unit square
//! `[0, 1] x [0, 1]`. Presentation layers usually work in integer
//! percent units (0-100); [`Location::from_percent`] converts those.

use std::fmt;

use crate::error::{Result, SiteForgeError};

/// Number of UI units per normalized unit.
pub const PERCENT_SCALE: u32 = 100;

/// A point on the unit square.
///
/// # Examples
///
/// ```
/// use siteforge_core::Location;
///
/// let a = Location::new(0.0, 0.0).unwrap();
/// let b = Location::from_percent(30, 40).unwrap();
///
/// assert_eq!(b.x(), 0.3);
/// assert!((a.distance_to(&b) - 0.5).abs() < 1e-12);
/// assert!(Location::new(1.2, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLocation"))]
pub struct Location {
    x: f64,
    y: f64,
}

// Unvalidated wire form; deserialization goes through `Location::new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLocation {
    x: f64,
    y: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLocation> for Location {
    type Error = SiteForgeError;

    fn try_from(raw: RawLocation) -> Result<Self> {
        Location::new(raw.x, raw.y)
    }
}

impl Location {
    /// Creates a location, rejecting coordinates outside `[0, 1]`.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        let x = SiteForgeError::check_range("x", x, 0.0, 1.0)?;
        let y = SiteForgeError::check_range("y", y, 0.0, 1.0)?;
        Ok(Self { x, y })
    }

    /// Creates a location without range checks.
    ///
    /// Callers must guarantee both coordinates are within `[0, 1]`.
    #[inline]
    pub const fn new_unchecked(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a location from integer percent units (0-100 per axis).
    pub fn from_percent(x: u32, y: u32) -> Result<Self> {
        let max = PERCENT_SCALE as f64;
        let x = SiteForgeError::check_range("x", x as f64, 0.0, max)?;
        let y = SiteForgeError::check_range("y", y as f64, 0.0, max)?;
        Ok(Self::new_unchecked(x / max, y / max))
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns the coordinates in percent units, rounded to the nearest unit.
    pub fn to_percent(&self) -> (u32, u32) {
        let max = PERCENT_SCALE as f64;
        ((self.x * max).round() as u32, (self.y * max).round() as u32)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Location::new(-0.01, 0.5).is_err());
        assert!(Location::new(0.5, 1.01).is_err());
        assert!(Location::new(f64::NAN, 0.5).is_err());
        assert!(Location::new(1.0, 0.0).is_ok());
    }

    #[test]
    fn test_from_percent() {
        let loc = Location::from_percent(50, 100).unwrap();
        assert_eq!(loc.x(), 0.5);
        assert_eq!(loc.y(), 1.0);
        assert_eq!(loc.to_percent(), (50, 100));

        let err = Location::from_percent(101, 0).unwrap_err();
        assert!(matches!(err, SiteForgeError::OutOfRangeValue { field: "x", .. }));
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Location::new(0.1, 0.2).unwrap();
        let b = Location::new(0.4, 0.6).unwrap();
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        assert!((a.distance_to(&b) - 0.5).abs() < 1e-12);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_display() {
        let loc = Location::new(0.5, 0.25).unwrap();
        assert_eq!(loc.to_string(), "(0.50, 0.25)");
    }
}
