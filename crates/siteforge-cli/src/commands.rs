//! Subcommand implementations.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use siteforge::{Facility, Location, SitingConfig, SitingSession};
use tracing::info;

use crate::error::Result;
use crate::scenario::ScenarioFile;

/// One suggestion of a `suggest` run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionRow {
    pub step: usize,
    pub location: Location,
    pub percent: (u32, u32),
}

/// Result of a `suggest` run.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestReport {
    pub suggestions: Vec<SuggestionRow>,
    /// Committed set after the run; the last suggestion is still pending.
    pub committed: Vec<Facility>,
}

pub fn load_config(path: Option<&Path>) -> Result<SitingConfig> {
    Ok(match path {
        Some(path) => SitingConfig::from_file(path)?,
        None => SitingConfig::default(),
    })
}

fn load_session(scenario: &Path, config: SitingConfig) -> Result<SitingSession> {
    let scenario = ScenarioFile::load(scenario)?;
    let mut session = SitingSession::with_config(config)?;
    scenario.populate(&mut session)?;
    info!(
        event = "scenario_loaded",
        demand_points = session.demand_points().len() as u64,
        committed = session.committed().len() as u64,
    );
    Ok(session)
}

/// Runs Optimize `count` times on a scenario.
pub fn suggest(scenario: &Path, config: SitingConfig, count: usize) -> Result<SuggestReport> {
    let mut session = load_session(scenario, config)?;
    let mut suggestions = Vec::with_capacity(count);
    for step in 1..=count {
        let location = session.optimize()?;
        suggestions.push(SuggestionRow {
            step,
            location,
            percent: location.to_percent(),
        });
    }
    Ok(SuggestReport {
        suggestions,
        committed: session.committed().to_vec(),
    })
}

pub fn write_report(out: &mut impl Write, report: &SuggestReport, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }
    for row in &report.suggestions {
        writeln!(
            out,
            "{:>3}  {}  [{}, {}]",
            row.step, row.location, row.percent.0, row.percent.1
        )?;
    }
    Ok(())
}

/// Writes the cost surface the next Optimize would search as CSV.
pub fn surface(out: &mut impl Write, scenario: &Path, config: SitingConfig) -> Result<()> {
    let session = load_session(scenario, config)?;
    let surface = session.cost_surface()?;
    let lattice = surface.lattice();
    writeln!(out, "i,j,x,y,cost")?;
    for (index, cost) in surface.costs().iter().enumerate() {
        let (i, j) = lattice.grid_position(index);
        let site = lattice.site(index);
        writeln!(out, "{},{},{},{},{}", i, j, site.x(), site.y(), cost)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            "[[demand]]\nx = 50\ny = 50\nweight = 1\n\n[[facilities]]\nx = 0\ny = 0\n"
        )
        .unwrap();
        file
    }

    #[test]
    fn test_suggest_commits_all_but_last() {
        let file = scenario_file();
        let report = suggest(file.path(), SitingConfig::default(), 3).unwrap();

        assert_eq!(report.suggestions.len(), 3);
        assert_eq!(report.suggestions[0].percent, (50, 50));
        // manual facility plus two committed suggestions
        assert_eq!(report.committed.len(), 3);
        assert!(report.committed[0].is_manual());
    }

    #[test]
    fn test_text_report() {
        let file = scenario_file();
        let report = suggest(file.path(), SitingConfig::default(), 1).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &report, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  1  (0.50, 0.50)  [50, 50]\n");
    }

    #[test]
    fn test_json_report() {
        let file = scenario_file();
        let report = suggest(file.path(), SitingConfig::default(), 2).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &report, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["suggestions"].as_array().unwrap().len(), 2);
        assert_eq!(value["suggestions"][0]["location"]["x"], 0.5);
        assert_eq!(value["committed"][1]["kind"], "algorithmic");
    }

    #[test]
    fn test_surface_csv() {
        let file = scenario_file();
        let config = SitingConfig::default().with_resolution(2);
        let mut out = Vec::new();
        surface(&mut out, file.path(), config).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "i,j,x,y,cost");
        assert_eq!(lines.len(), 1 + 9);
        assert_eq!(lines[5], "1,1,0.5,0.5,0");
    }

    #[test]
    fn test_load_config_default() {
        assert_eq!(load_config(None).unwrap(), SitingConfig::default());
    }
}
