//! Incremental suggest/commit siting session.
//!
//! A session collects demand points and committed facilities and turns
//! repeated single-site searches into a sequential siting process: each
//! [`optimize`](SitingSession::optimize) call first commits the previous
//! suggestion, then searches for the next one around everything committed.

use siteforge_config::SitingConfig;
use siteforge_core::{DemandPoint, Facility, FacilityKind, Location, Result, SiteForgeError};
use tracing::{debug, info};

use crate::evaluator::SiteEvaluator;
use crate::surface::CostSurface;

/// Lifecycle state of a [`SitingSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No demand points.
    Empty,
    /// At least one demand point, no pending suggestion.
    Ready,
    /// A suggestion is pending, awaiting commit or reset.
    Suggested,
}

/// Holds demand, committed facilities and the pending suggestion.
///
/// # Examples
///
/// ```
/// use siteforge_solver::{SessionState, SitingSession};
///
/// let mut session = SitingSession::new();
/// session.add_demand_point(0.5, 0.5, 1.0).unwrap();
///
/// let first = session.optimize().unwrap();
/// assert_eq!((first.x(), first.y()), (0.5, 0.5));
/// assert_eq!(session.state(), SessionState::Suggested);
///
/// // The first suggestion is committed before the second search.
/// let second = session.optimize().unwrap();
/// assert_eq!(session.committed().len(), 1);
/// assert!(second.distance_to(&first) >= 0.20);
/// ```
#[derive(Debug)]
pub struct SitingSession {
    config: SitingConfig,
    evaluator: SiteEvaluator,
    points: Vec<Location>,
    weights: Vec<f64>,
    committed: Vec<Facility>,
    pending: Option<Facility>,
}

impl Default for SitingSession {
    fn default() -> Self {
        Self {
            config: SitingConfig::default(),
            evaluator: SiteEvaluator::default(),
            points: Vec::new(),
            weights: Vec::new(),
            committed: Vec::new(),
            pending: None,
        }
    }
}

impl SitingSession {
    /// Creates an empty session with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session, validating `config` first.
    pub fn with_config(config: SitingConfig) -> Result<Self> {
        let evaluator = SiteEvaluator::new(&config)?;
        Ok(Self {
            config,
            evaluator,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &SitingConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        if self.pending.is_some() {
            SessionState::Suggested
        } else if self.points.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Ready
        }
    }

    /// Appends a demand point with normalized coordinates.
    ///
    /// Out-of-range values leave the session unchanged.
    pub fn add_demand_point(&mut self, x: f64, y: f64, weight: f64) -> Result<()> {
        let point = DemandPoint::new(Location::new(x, y)?, weight)?;
        self.add_demand(point);
        Ok(())
    }

    /// Appends an already validated demand point.
    pub fn add_demand(&mut self, point: DemandPoint) {
        self.points.push(point.location());
        self.weights.push(point.weight());
        debug!(
            event = "demand_added",
            x = point.location().x(),
            y = point.location().y(),
            weight = point.weight(),
            demand_points = self.points.len() as u64,
        );
    }

    /// Commits a manually placed facility immediately.
    pub fn add_manual_facility(&mut self, x: f64, y: f64) -> Result<()> {
        self.add_facility(Location::new(x, y)?);
        Ok(())
    }

    /// Commits a manually placed facility at a validated location.
    pub fn add_facility(&mut self, location: Location) {
        self.committed.push(Facility::manual(location));
        debug!(
            event = "facility_added",
            x = location.x(),
            y = location.y(),
            committed = self.committed.len() as u64,
        );
    }

    /// Commits the pending suggestion, if any, and suggests the next site.
    ///
    /// # Errors
    ///
    /// [`SiteForgeError::NoDemandPoints`] if no demand point was added. The
    /// session is left unchanged on error.
    pub fn optimize(&mut self) -> Result<Location> {
        if self.points.is_empty() {
            return Err(SiteForgeError::NoDemandPoints);
        }

        let facilities = self.facilities_after_commit();
        let suggestion = self
            .evaluator
            .suggest(&self.points, &self.weights, &facilities)?;

        if let Some(pending) = self.pending.take() {
            debug!(
                event = "commit",
                x = pending.location().x(),
                y = pending.location().y(),
            );
            self.committed.push(pending);
        }
        self.pending = Some(Facility::algorithmic(suggestion.location));
        Ok(suggestion.location)
    }

    /// The cost surface the next [`optimize`](Self::optimize) call will search.
    pub fn cost_surface(&self) -> Result<CostSurface> {
        if self.points.is_empty() {
            return Err(SiteForgeError::NoDemandPoints);
        }
        let facilities = self.facilities_after_commit();
        self.evaluator
            .evaluate(&self.points, &self.weights, &facilities)
    }

    /// Clears demand, committed facilities and the pending suggestion.
    pub fn reset(&mut self) {
        self.points.clear();
        self.weights.clear();
        self.committed.clear();
        self.pending = None;
        info!(event = "reset");
    }

    /// Demand point locations, in insertion order.
    pub fn demand_points(&self) -> &[Location] {
        &self.points
    }

    /// Demand weights, parallel to [`demand_points`](Self::demand_points).
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Demand points zipped with their weights.
    pub fn demand(&self) -> impl Iterator<Item = (Location, f64)> + '_ {
        self.points.iter().copied().zip(self.weights.iter().copied())
    }

    /// Committed facilities in commit order.
    pub fn committed(&self) -> &[Facility] {
        &self.committed
    }

    pub fn manual_facilities(&self) -> impl Iterator<Item = &Facility> {
        self.committed_of(FacilityKind::Manual)
    }

    /// Committed facilities that came from earlier suggestions.
    pub fn algorithmic_facilities(&self) -> impl Iterator<Item = &Facility> {
        self.committed_of(FacilityKind::Algorithmic)
    }

    /// The latest suggestion, not yet committed.
    pub fn pending(&self) -> Option<&Facility> {
        self.pending.as_ref()
    }

    fn committed_of(&self, kind: FacilityKind) -> impl Iterator<Item = &Facility> {
        self.committed.iter().filter(move |f| f.kind() == kind)
    }

    fn facilities_after_commit(&self) -> Vec<Location> {
        self.committed
            .iter()
            .chain(self.pending.iter())
            .map(Facility::location)
            .collect()
    }
}
