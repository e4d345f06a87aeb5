//! Colorful console output for siting events.
//!
//! Provides a custom `tracing` layer that formats SiteForge events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Suggestions (search start/end) and resets
//! - **WARN**: Every candidate excluded, thread pool fallback
//! - **DEBUG**: Demand points, manual facilities and commits

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output at the default `info` level.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initializes console output, showing SiteForge events down to `level`.
///
/// `RUST_LOG` directives take precedence. Only the first call has effect.
pub fn init_with_level(level: Level) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = level.as_str().to_ascii_lowercase();
            EnvFilter::new(format!("siteforge_solver={level},siteforge_cli={level}"))
        });

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SitingConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

fn print_banner() {
    let banner = r#"
 ____  _ _       _____
/ ___|(_) |_ ___|  ___|__  _ __ __ _  ___
\___ \| | __/ _ \ |_ / _ \| '__/ _` |/ _ \
 ___) | | ||  __/  _| (_) | | | (_| |  __/
|____/|_|\__\___|_|  \___/|_|  \__, |\___|
                               |___/
"#;

    let version_line = format!(
        "             v{} - Sequential Facility Siting\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats siting events with colors.
pub struct SitingConsoleLayer;

impl<S: Subscriber> Layer<S> for SitingConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("siteforge_solver") && !target.starts_with("siteforge_cli") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    error: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
    cost: Option<f64>,
    weight: Option<f64>,
    min_distance: Option<f64>,
    demand_points: Option<u64>,
    committed: Option<u64>,
    candidates: Option<u64>,
    excluded: Option<u64>,
    duration_ms: Option<u64>,
    threads: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "event" => self.event = Some(format!("{:?}", value).trim_matches('"').to_string()),
            "error" => self.error = Some(format!("{:?}", value)),
            _ => {}
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "x" => self.x = Some(value),
            "y" => self.y = Some(value),
            "cost" => self.cost = Some(value),
            "weight" => self.weight = Some(value),
            "min_distance" => self.min_distance = Some(value),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "demand_points" => self.demand_points = Some(value),
            "committed" => self.committed = Some(value),
            "candidates" => self.candidates = Some(value),
            "excluded" => self.excluded = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "threads" => self.threads = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "scenario_loaded" => format_scenario_loaded(v),
        "suggest_start" => format_suggest_start(v),
        "suggest_end" => format_suggest_end(v),
        "commit" => format_commit(v),
        "demand_added" => format_demand_added(v),
        "facility_added" => format_facility_added(v),
        "reset" => format!("{} {} Session reset", format_elapsed(), "↺".bright_yellow()),
        "all_candidates_excluded" => format_all_excluded(v),
        "thread_pool_fallback" => format_pool_fallback(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_site(x: Option<f64>, y: Option<f64>) -> String {
    format!("({:.2}, {:.2})", x.unwrap_or(0.0), y.unwrap_or(0.0))
}

fn format_count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_scenario_loaded(v: &EventVisitor) -> String {
    format!(
        "{} {} Scenario │ {} demand points │ {} manual facilities",
        format_elapsed(),
        "●".bright_blue(),
        format_count(v.demand_points).bright_yellow(),
        format_count(v.committed).bright_yellow(),
    )
}

fn format_suggest_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Searching │ {} demand points │ {} committed │ {} candidates",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_count(v.demand_points).bright_yellow(),
        format_count(v.committed).bright_yellow(),
        format_count(v.candidates).bright_magenta(),
    )
}

fn format_suggest_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Suggested {} │ cost {} │ {} excluded │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_site(v.x, v.y).bright_green().bold(),
        format_cost(v.cost.unwrap_or(0.0)),
        format_count(v.excluded).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_commit(v: &EventVisitor) -> String {
    format!(
        "{} {} Committed {}",
        format_elapsed(),
        "✓".bright_green(),
        format_site(v.x, v.y).white(),
    )
}

fn format_demand_added(v: &EventVisitor) -> String {
    format!(
        "{} {} Demand {} weight {} │ {} total",
        format_elapsed(),
        "+".bright_red(),
        format_site(v.x, v.y).white(),
        v.weight.unwrap_or(0.0),
        format_count(v.demand_points).bright_black(),
    )
}

fn format_facility_added(v: &EventVisitor) -> String {
    format!(
        "{} {} Manual facility {} │ {} committed",
        format_elapsed(),
        "+".bright_blue(),
        format_site(v.x, v.y).white(),
        format_count(v.committed).bright_black(),
    )
}

fn format_all_excluded(v: &EventVisitor) -> String {
    format!(
        "{} {} All {} candidates lie within {:.2} of a committed facility",
        format_elapsed(),
        "!".bright_red().bold(),
        format_count(v.candidates).bright_yellow(),
        v.min_distance.unwrap_or(0.0),
    )
}

fn format_pool_fallback(v: &EventVisitor) -> String {
    format!(
        "{} {} Could not build a {}-thread pool, using the global pool: {}",
        format_elapsed(),
        "!".bright_red().bold(),
        format_count(v.threads),
        v.error.as_deref().unwrap_or("unknown error"),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Penalized costs are shown in red.
fn format_cost(cost: f64) -> String {
    if cost >= 1e6 {
        format!("{:.3e}", cost).bright_red().to_string()
    } else {
        format!("{:.6}", cost).bright_green().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_format_site() {
        assert_eq!(format_site(Some(0.5), Some(0.25)), "(0.50, 0.25)");
        assert_eq!(format_site(None, None), "(0.00, 0.00)");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("something_else".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor).is_empty());
    }

    #[test]
    fn test_suggest_end_mentions_site() {
        let visitor = EventVisitor {
            event: Some("suggest_end".to_string()),
            x: Some(0.3),
            y: Some(0.7),
            cost: Some(0.042),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor).contains("(0.30, 0.70)"));
    }
}
