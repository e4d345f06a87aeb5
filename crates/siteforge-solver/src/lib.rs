//! SiteForge Solver Engine
//!
//! This crate provides the sequential siting engine:
//! - Candidate lattice over the unit square
//! - Weighted-distance cost model
//! - Exclusion penalty around committed facilities
//! - Deterministic minimum selection
//! - The incremental suggest/commit session

pub mod cost;
pub mod evaluator;
pub mod lattice;
pub mod parallel;
pub mod penalty;
pub mod selector;
pub mod session;
pub mod surface;

#[cfg(test)]
mod evaluator_tests;

pub use cost::{WeightedCostModel, WEIGHT_SCALE};
pub use evaluator::{suggest_site, SiteEvaluator};
pub use lattice::CandidateLattice;
pub use parallel::EvaluationPool;
pub use penalty::ExclusionPenalty;
pub use selector::select_minimum;
pub use session::{SessionState, SitingSession};
pub use surface::{CostSurface, Suggestion};
