//! Canonical siting scenarios.

use siteforge_core::{DemandPoint, Location};

/// Demand points plus already committed facility locations.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    pub demand: Vec<DemandPoint>,
    pub facilities: Vec<Location>,
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a demand point in percent units.
    pub fn demand(mut self, x: u32, y: u32, weight: u32) -> Self {
        self.demand
            .push(DemandPoint::from_percent(x, y, weight).expect("fixture demand in range"));
        self
    }

    /// Adds a committed facility in percent units.
    pub fn facility(mut self, x: u32, y: u32) -> Self {
        self.facilities
            .push(Location::from_percent(x, y).expect("fixture facility in range"));
        self
    }

    pub fn points(&self) -> Vec<Location> {
        self.demand.iter().map(DemandPoint::location).collect()
    }

    pub fn weights(&self) -> Vec<f64> {
        self.demand.iter().map(DemandPoint::weight).collect()
    }

    /// One demand point of weight 5 at the center.
    pub fn single_center() -> Self {
        Self::new().demand(50, 50, 5)
    }

    /// Unit weights at opposite corners of the square.
    pub fn diagonal_corners() -> Self {
        Self::new().demand(0, 0, 1).demand(100, 100, 1)
    }

    /// A weighted cluster in the lower-left and a lighter one in the upper-right.
    pub fn two_clusters() -> Self {
        Self::new()
            .demand(10, 15, 8)
            .demand(20, 10, 6)
            .demand(15, 25, 7)
            .demand(80, 85, 2)
            .demand(90, 75, 3)
    }

    /// Manual facilities whose exclusion zones (radius 0.2) cover the whole square.
    pub fn saturated() -> Self {
        let mut scenario = Self::new().demand(30, 60, 4).demand(70, 20, 9);
        for x in (0..=100).step_by(10) {
            for y in (0..=100).step_by(10) {
                scenario = scenario.facility(x, y);
            }
        }
        scenario
    }
}
