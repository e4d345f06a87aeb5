//! Scenario files: demand points and manual facilities in percent units.
//!
//! ```toml
//! [[demand]]
//! x = 20
//! y = 35
//! weight = 7
//!
//! [[facilities]]
//! x = 50
//! y = 50
//! ```

use std::path::Path;

use serde::Deserialize;
use siteforge::{DemandPoint, Location, SitingSession};

use crate::error::{CliError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemandEntry {
    pub x: u32,
    pub y: u32,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FacilityEntry {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScenarioFile {
    pub demand: Vec<DemandEntry>,
    pub facilities: Vec<FacilityEntry>,
}

impl ScenarioFile {
    /// Reads a scenario, choosing YAML for `.yaml`/`.yml` and TOML otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => serde_yaml::from_str(&contents).map_err(|e| e.to_string()),
            _ => toml::from_str(&contents).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| CliError::Scenario {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Loads every entry into `session`, validating ranges.
    ///
    /// Stops at the first out-of-range entry.
    pub fn populate(&self, session: &mut SitingSession) -> Result<()> {
        for entry in &self.demand {
            session.add_demand(DemandPoint::from_percent(entry.x, entry.y, entry.weight)?);
        }
        for entry in &self.facilities {
            session.add_facility(Location::from_percent(entry.x, entry.y)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use siteforge::{SessionState, SiteForgeError};

    use super::*;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_load_toml() {
        let file = write_temp(
            ".toml",
            r#"
            [[demand]]
            x = 20
            y = 35
            weight = 7

            [[facilities]]
            x = 50
            y = 50
            "#,
        );
        let scenario = ScenarioFile::load(file.path()).unwrap();
        assert_eq!(
            scenario.demand,
            vec![DemandEntry {
                x: 20,
                y: 35,
                weight: 7
            }]
        );
        assert_eq!(scenario.facilities, vec![FacilityEntry { x: 50, y: 50 }]);
    }

    #[test]
    fn test_load_yaml_without_facilities() {
        let file = write_temp(
            ".yml",
            "demand:\n  - { x: 10, y: 90, weight: 3 }\n  - { x: 60, y: 40, weight: 1 }\n",
        );
        let scenario = ScenarioFile::load(file.path()).unwrap();
        assert_eq!(scenario.demand.len(), 2);
        assert!(scenario.facilities.is_empty());
    }

    #[test]
    fn test_negative_coordinate_is_a_scenario_error() {
        let file = write_temp(".toml", "[[demand]]\nx = -1\ny = 0\nweight = 1\n");
        assert!(matches!(
            ScenarioFile::load(file.path()),
            Err(CliError::Scenario { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ScenarioFile::load(Path::new("/nonexistent/scenario.toml")),
            Err(CliError::Io { .. })
        ));
    }

    #[test]
    fn test_populate() {
        let scenario = ScenarioFile {
            demand: vec![DemandEntry {
                x: 50,
                y: 50,
                weight: 5,
            }],
            facilities: vec![FacilityEntry { x: 0, y: 100 }],
        };
        let mut session = SitingSession::new();
        scenario.populate(&mut session).unwrap();
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.committed().len(), 1);
    }

    #[test]
    fn test_populate_rejects_heavy_weight() {
        let scenario = ScenarioFile {
            demand: vec![DemandEntry {
                x: 50,
                y: 50,
                weight: 11,
            }],
            facilities: Vec::new(),
        };
        let mut session = SitingSession::new();
        let err = scenario.populate(&mut session).unwrap_err();
        assert!(matches!(
            err,
            CliError::Siting(SiteForgeError::OutOfRangeValue { field: "weight", .. })
        ));
    }
}
