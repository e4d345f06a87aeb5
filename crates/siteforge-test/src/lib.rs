//! Shared test fixtures for SiteForge crates.
//!
//! - [`scenario`] - canonical demand/facility scenarios
//! - [`reference`] - brute-force reference for the penalized lattice search
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! siteforge-test = { workspace = true }
//! ```

pub mod reference;
pub mod scenario;

pub use reference::{reference_costs, reference_suggestion};
pub use scenario::Scenario;
