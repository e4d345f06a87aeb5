//! Tests for the one-shot evaluator against the brute-force reference.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use siteforge_config::{SitingConfig, ThreadCount};
use siteforge_core::{Location, SiteForgeError};
use siteforge_test::{reference_costs, reference_suggestion, Scenario};

use super::evaluator::*;
use super::penalty::ExclusionPenalty;

fn random_scenario(rng: &mut ChaCha8Rng) -> Scenario {
    let mut scenario = Scenario::new();
    for _ in 0..rng.random_range(1..8) {
        scenario = scenario.demand(
            rng.random_range(0..=100),
            rng.random_range(0..=100),
            rng.random_range(0..=10),
        );
    }
    for _ in 0..rng.random_range(0..4) {
        scenario = scenario.facility(rng.random_range(0..=100), rng.random_range(0..=100));
    }
    scenario
}

#[test]
fn test_single_center() {
    let scenario = Scenario::single_center();
    let suggestion = suggest_site(&scenario.demand, &[], &SitingConfig::default()).unwrap();
    assert_eq!(suggestion.location, Location::new(0.5, 0.5).unwrap());
    assert_eq!(suggestion.cost, 0.0);
}

#[test]
fn test_diagonal_corners_lands_on_diagonal() {
    let scenario = Scenario::diagonal_corners();
    let suggestion = suggest_site(&scenario.demand, &[], &SitingConfig::default()).unwrap();
    assert_eq!(suggestion.location.x(), suggestion.location.y());
    assert_eq!(suggestion.location, Location::new(0.06, 0.06).unwrap());
}

#[test]
fn test_empty_demand_is_rejected() {
    let err = suggest_site(&[], &[], &SitingConfig::default()).unwrap_err();
    assert_eq!(err, SiteForgeError::NoDemandPoints);
}

#[test]
fn test_invalid_config_is_rejected() {
    let scenario = Scenario::single_center();
    let config = SitingConfig::default().with_penalty(-1.0);
    let err = suggest_site(&scenario.demand, &[], &config).unwrap_err();
    assert!(matches!(err, SiteForgeError::InvalidInput(_)));
}

#[test]
fn test_matches_reference_on_random_scenarios() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let config = SitingConfig::default();
    for _ in 0..20 {
        let scenario = random_scenario(&mut rng);
        let suggestion = suggest_site(&scenario.demand, &scenario.facilities, &config).unwrap();
        let expected = reference_suggestion(
            &scenario.points(),
            &scenario.weights(),
            &scenario.facilities,
            100,
            0.20,
            1e6,
        );
        assert_eq!(suggestion.location, expected, "scenario {:?}", scenario);
    }
}

#[test]
fn test_unpenalized_costs_match_reference_exactly() {
    let scenario = Scenario::two_clusters();
    let evaluator = SiteEvaluator::default();
    let surface = evaluator
        .evaluate(&scenario.points(), &scenario.weights(), &[])
        .unwrap();
    let expected = reference_costs(&scenario.points(), &scenario.weights(), &[], 100, 0.20, 1e6);
    assert_eq!(surface.costs(), expected.as_slice());
    assert_eq!(surface.excluded_count(), 0);
}

#[test]
fn test_parallel_matches_sequential() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let sequential = SiteEvaluator::new(&SitingConfig::default()).unwrap();
    let parallel =
        SiteEvaluator::new(&SitingConfig::default().with_thread_count(ThreadCount::Count(4)))
            .unwrap();
    for _ in 0..5 {
        let scenario = random_scenario(&mut rng);
        let a = sequential
            .evaluate(&scenario.points(), &scenario.weights(), &scenario.facilities)
            .unwrap();
        let b = parallel
            .evaluate(&scenario.points(), &scenario.weights(), &scenario.facilities)
            .unwrap();
        assert_eq!(a.costs(), b.costs());
    }
}

#[test]
fn test_exclusion_dominates_when_a_free_site_exists() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let config = SitingConfig::default();
    let exclusion = ExclusionPenalty::from_config(&config);
    for _ in 0..20 {
        let scenario = random_scenario(&mut rng);
        let suggestion = suggest_site(&scenario.demand, &scenario.facilities, &config).unwrap();
        for facility in &scenario.facilities {
            assert!(
                !exclusion.excludes(&suggestion.location, facility),
                "{} is within {} of {}",
                suggestion.location,
                config.min_distance,
                facility
            );
        }
    }
}

#[test]
fn test_saturated_picks_least_violated_site() {
    let scenario = Scenario::saturated();
    let evaluator = SiteEvaluator::default();
    let surface = evaluator
        .evaluate(&scenario.points(), &scenario.weights(), &scenario.facilities)
        .unwrap();
    assert!(surface.all_excluded());

    let suggestion = evaluator
        .suggest(&scenario.points(), &scenario.weights(), &scenario.facilities)
        .unwrap();
    let violations = |site: &Location| {
        scenario
            .facilities
            .iter()
            .filter(|f| evaluator.exclusion().excludes(site, f))
            .count()
    };
    let fewest = evaluator
        .lattice()
        .sites()
        .iter()
        .map(|site| violations(site))
        .min()
        .unwrap();
    assert_eq!(violations(&suggestion.location), fewest);
}

#[test]
fn test_coarse_lattice() {
    let scenario = Scenario::new().demand(30, 30, 1);
    let config = SitingConfig::default().with_resolution(4);
    let suggestion = suggest_site(&scenario.demand, &[], &config).unwrap();
    // Nearest quarter-step site to (0.3, 0.3)
    assert_eq!(suggestion.location, Location::new(0.25, 0.25).unwrap());
}
