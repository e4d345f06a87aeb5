//! Error type for the command line driver.

use std::path::PathBuf;

use siteforge::{ConfigError, SiteForgeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scenario {path}: {message}")]
    Scenario { path: PathBuf, message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Siting(#[from] SiteForgeError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
