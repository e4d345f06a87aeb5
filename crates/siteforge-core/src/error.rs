//! Error types for SiteForge

use thiserror::Error;

/// Main error type for SiteForge operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteForgeError {
    /// Inputs that violate an internal bookkeeping invariant
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Optimization requested before any demand point was added
    #[error("No demand points added yet")]
    NoDemandPoints,

    /// Coordinate or weight outside its declared domain
    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRangeValue {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl SiteForgeError {
    /// Checks that `value` lies in the closed interval `[min, max]`.
    ///
    /// `NaN` is never in range.
    pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(SiteForgeError::OutOfRangeValue {
                field,
                value,
                min,
                max,
            })
        }
    }
}

/// Result type alias for SiteForge operations
pub type Result<T> = std::result::Result<T, SiteForgeError>;
