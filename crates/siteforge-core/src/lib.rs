//! SiteForge Core - Core types for sequential facility siting
//!
//! This crate provides the fundamental abstractions for SiteForge:
//! - Normalized locations on the unit square
//! - Demand points and facilities
//! - Error types shared by every SiteForge crate

pub mod domain;
pub mod error;
pub mod geometry;


pub use domain::{DemandPoint, Facility, FacilityKind, MAX_WEIGHT, MIN_WEIGHT, WEIGHT_SCALE};
pub use error::{Result, SiteForgeError};
pub use geometry::{Location, PERCENT_SCALE};
