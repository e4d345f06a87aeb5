//! SiteForge - Sequential Facility Siting
//!
//! Suggests facility locations on the unit square one at a time. Each
//! suggestion minimizes total weighted distance to the demand points while
//! keeping clear of every facility committed so far.
//!
//! # Example
//!
//! ```rust
//! use siteforge::prelude::*;
//!
//! let mut session = SitingSession::new();
//! session.add_demand_point(0.2, 0.2, 8.0)?;
//! session.add_demand_point(0.8, 0.7, 3.0)?;
//! session.add_manual_facility(0.1, 0.9)?;
//!
//! let first = session.optimize()?;
//! let second = session.optimize()?;
//!
//! assert_eq!(session.committed().len(), 2);
//! assert!(second.distance_to(&first) >= 0.20);
//! # Ok::<(), SiteForgeError>(())
//! ```

// Domain types
pub use siteforge_core::{
    DemandPoint, Facility, FacilityKind, Location, Result, SiteForgeError, MAX_WEIGHT,
    MIN_WEIGHT, PERCENT_SCALE,
};

// Configuration
pub use siteforge_config::{ConfigError, LatticeConfig, SitingConfig, ThreadCount};

// Engine
pub use siteforge_solver::{
    select_minimum, suggest_site, CandidateLattice, CostSurface, ExclusionPenalty,
    SessionState, SiteEvaluator, SitingSession, Suggestion, WeightedCostModel, WEIGHT_SCALE,
};

/// Colored console logging.
#[cfg(feature = "console")]
pub use siteforge_console as console;

pub mod prelude {
    pub use super::{
        DemandPoint, Facility, FacilityKind, Location, SessionState, SiteForgeError,
        SitingConfig, SitingSession, Suggestion,
    };
}
