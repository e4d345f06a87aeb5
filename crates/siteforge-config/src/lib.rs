//! Configuration system for SiteForge.
//!
//! Load siting configuration from TOML or YAML files to control the
//! exclusion radius, the exclusion penalty, the candidate lattice and
//! evaluation parallelism without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use siteforge_config::{SitingConfig, ThreadCount};
//!
//! let config = SitingConfig::from_toml_str(r#"
//!     min_distance = 0.25
//!     thread_count = "auto"
//!
//!     [lattice]
//!     resolution = 50
//! "#).unwrap();
//!
//! assert_eq!(config.min_distance, 0.25);
//! assert_eq!(config.penalty, 1e6);
//! assert_eq!(config.lattice.sites_per_axis(), 51);
//! assert_eq!(config.thread_count, ThreadCount::Auto);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use siteforge_config::SitingConfig;
//!
//! let config = SitingConfig::load("siting.toml").unwrap_or_default();
//! assert_eq!(config.min_distance, 0.20);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use siteforge_core::{MAX_WEIGHT, WEIGHT_SCALE};
use thiserror::Error;

/// Default exclusion radius around committed facilities.
pub const DEFAULT_MIN_DISTANCE: f64 = 0.20;

/// Default penalty added per demand point for each violated exclusion zone.
pub const DEFAULT_PENALTY: f64 = 1e6;

/// Default number of lattice steps per axis.
pub const DEFAULT_RESOLUTION: u32 = 100;

/// Largest accepted number of lattice steps per axis.
pub const MAX_RESOLUTION: u32 = 1000;

/// Largest weighted cost a single demand point can contribute on the unit
/// square. Penalties must exceed it so excluded candidates never beat a
/// free one.
pub const MIN_PENALTY: f64 = MAX_WEIGHT * WEIGHT_SCALE * std::f64::consts::SQRT_2;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main siting configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SitingConfig {
    /// Minimum allowed distance between a new suggestion and any committed facility.
    pub min_distance: f64,

    /// Penalty added to an excluded candidate, once per demand point.
    pub penalty: f64,

    /// Candidate lattice configuration.
    pub lattice: LatticeConfig,

    /// Parallelism for candidate cost evaluation.
    pub thread_count: ThreadCount,
}

impl Default for SitingConfig {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            penalty: DEFAULT_PENALTY,
            lattice: LatticeConfig::default(),
            thread_count: ThreadCount::default(),
        }
    }
}

impl SitingConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a file, choosing the format from its extension.
    ///
    /// `.yaml` and `.yml` are parsed as YAML, everything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Sets the exclusion radius.
    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Sets the per-demand-point exclusion penalty.
    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    /// Sets the lattice resolution.
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.lattice.resolution = resolution;
        self
    }

    /// Sets the evaluation parallelism.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Checks value domains.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_distance must be a finite non-negative number, got {}",
                self.min_distance
            )));
        }
        if !self.penalty.is_finite() || self.penalty <= MIN_PENALTY {
            return Err(ConfigError::Invalid(format!(
                "penalty must be finite and greater than {}, got {}",
                MIN_PENALTY, self.penalty
            )));
        }
        if !(1..=MAX_RESOLUTION).contains(&self.lattice.resolution) {
            return Err(ConfigError::Invalid(format!(
                "lattice.resolution must be between 1 and {}, got {}",
                MAX_RESOLUTION, self.lattice.resolution
            )));
        }
        if self.thread_count == ThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "thread_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Candidate lattice configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LatticeConfig {
    /// Steps per axis; site coordinates are `i / resolution`.
    pub resolution: u32,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl LatticeConfig {
    /// Number of sites along one axis.
    pub fn sites_per_axis(&self) -> usize {
        self.resolution as usize + 1
    }
}

/// Thread count for candidate cost evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Sequential evaluation on the calling thread.
    #[default]
    None,

    /// Use the global rayon pool.
    Auto,

    /// Dedicated pool with a specific number of threads.
    Count(usize),
}
