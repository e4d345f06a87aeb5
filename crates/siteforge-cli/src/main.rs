//! SiteForge command line driver.
//!
//! Reads a scenario of demand points and manual facilities (percent units)
//! and runs the sequential siting process on it.

mod commands;
mod error;
mod scenario;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use siteforge::console;
use tracing::Level;

use crate::error::Result;

#[derive(Debug, Parser)]
#[command(name = "siteforge-cli", version, about = "Sequential facility siting")]
struct Cli {
    /// Configuration file (TOML, or YAML by extension)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log siting events (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Suggest facility sites one after another
    Suggest {
        /// Scenario file (TOML, or YAML by extension)
        scenario: PathBuf,

        /// Number of sites to suggest
        #[arg(short = 'k', long, default_value_t = 1)]
        count: usize,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the cost surface of the next suggestion as CSV
    Surface {
        /// Scenario file (TOML, or YAML by extension)
        scenario: PathBuf,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.verbose {
        0 => {}
        1 => console::init_with_level(Level::INFO),
        _ => console::init_with_level(Level::DEBUG),
    }

    let config = commands::load_config(cli.config.as_deref())?;
    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Suggest {
            scenario,
            count,
            json,
        } => {
            let report = commands::suggest(&scenario, config, count)?;
            commands::write_report(&mut stdout, &report, json)
        }
        Command::Surface { scenario } => commands::surface(&mut stdout, &scenario, config),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_suggest() {
        let cli = Cli::parse_from(["siteforge-cli", "-vv", "suggest", "city.toml", "-k", "3", "--json"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Suggest {
                scenario,
                count,
                json,
            } => {
                assert_eq!(scenario, PathBuf::from("city.toml"));
                assert_eq!(count, 3);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
