//! One-shot siting: cost model, exclusion penalty and selection over the lattice.

use std::sync::Arc;
use std::time::Instant;

use siteforge_config::SitingConfig;
use siteforge_core::{DemandPoint, Location, Result, SiteForgeError};
use tracing::{info, warn};

use crate::cost::WeightedCostModel;
use crate::lattice::CandidateLattice;
use crate::parallel::EvaluationPool;
use crate::penalty::ExclusionPenalty;
use crate::surface::{CostSurface, Suggestion};

/// Evaluates candidate sites for a fixed configuration.
#[derive(Debug)]
pub struct SiteEvaluator {
    lattice: Arc<CandidateLattice>,
    cost_model: WeightedCostModel,
    exclusion: ExclusionPenalty,
    pool: EvaluationPool,
}

impl Default for SiteEvaluator {
    fn default() -> Self {
        Self::from_validated(&SitingConfig::default())
    }
}

impl SiteEvaluator {
    /// Creates an evaluator, validating `config` first.
    pub fn new(config: &SitingConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|err| SiteForgeError::InvalidInput(err.to_string()))?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: &SitingConfig) -> Self {
        Self {
            lattice: CandidateLattice::with_resolution(config.lattice.resolution),
            cost_model: WeightedCostModel::default(),
            exclusion: ExclusionPenalty::from_config(config),
            pool: EvaluationPool::from_thread_count(config.thread_count),
        }
    }

    #[inline]
    pub fn lattice(&self) -> &CandidateLattice {
        &self.lattice
    }

    #[inline]
    pub fn cost_model(&self) -> &WeightedCostModel {
        &self.cost_model
    }

    #[inline]
    pub fn exclusion(&self) -> &ExclusionPenalty {
        &self.exclusion
    }

    /// Penalized costs of every candidate.
    pub fn evaluate(
        &self,
        points: &[Location],
        weights: &[f64],
        facilities: &[Location],
    ) -> Result<CostSurface> {
        let mut costs = self
            .cost_model
            .evaluate_in(points, weights, &self.lattice, &self.pool)?;
        let excluded = self
            .exclusion
            .apply(&mut costs, &self.lattice, facilities, points.len())?;
        Ok(CostSurface::new(self.lattice.clone(), costs, excluded))
    }

    /// The minimum-cost candidate given demand and committed facilities.
    pub fn suggest(
        &self,
        points: &[Location],
        weights: &[f64],
        facilities: &[Location],
    ) -> Result<Suggestion> {
        let start = Instant::now();
        info!(
            event = "suggest_start",
            demand_points = points.len() as u64,
            committed = facilities.len() as u64,
            candidates = self.lattice.len() as u64,
        );

        let surface = self.evaluate(points, weights, facilities)?;
        if surface.all_excluded() {
            warn!(
                event = "all_candidates_excluded",
                candidates = self.lattice.len() as u64,
                min_distance = self.exclusion.min_distance(),
            );
        }

        let suggestion = surface.best().ok_or_else(|| {
            SiteForgeError::InvalidInput("candidate lattice is empty".to_string())
        })?;

        info!(
            event = "suggest_end",
            x = suggestion.location.x(),
            y = suggestion.location.y(),
            cost = suggestion.cost,
            excluded = surface.excluded_count() as u64,
            duration_ms = start.elapsed().as_millis() as u64,
        );
        Ok(suggestion)
    }
}

/// Suggests one site for `demand` given already committed `facilities`.
///
/// This is a single greedy step; [`SitingSession`](crate::SitingSession)
/// chains these steps.
///
/// # Examples
///
/// ```
/// use siteforge_config::SitingConfig;
/// use siteforge_core::{DemandPoint, Location};
/// use siteforge_solver::suggest_site;
///
/// let demand = [DemandPoint::from_percent(50, 50, 5).unwrap()];
/// let site = suggest_site(&demand, &[], &SitingConfig::default()).unwrap();
/// assert_eq!(site.location, Location::new(0.5, 0.5).unwrap());
/// ```
pub fn suggest_site(
    demand: &[DemandPoint],
    facilities: &[Location],
    config: &SitingConfig,
) -> Result<Suggestion> {
    if demand.is_empty() {
        return Err(SiteForgeError::NoDemandPoints);
    }
    let evaluator = SiteEvaluator::new(config)?;
    let points: Vec<Location> = demand.iter().map(DemandPoint::location).collect();
    let weights: Vec<f64> = demand.iter().map(DemandPoint::weight).collect();
    evaluator.suggest(&points, &weights, facilities)
}
