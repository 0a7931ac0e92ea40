//! Command-line options and view rendering for the binary.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::config::{ConfigError, EngineConfig};
use crate::error::Result;
use crate::sim::engine::Engine;
use crate::views::AnalyticsRange;

/// Query view printed on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum View {
    Dashboard,
    Analytics,
    #[default]
    Rollup,
    Departments,
    Suggestions,
    Alerts,
    Financial,
    Status,
}

/// Synthetic campus energy readings and their dashboard views.
#[derive(Debug, Parser)]
#[command(name = "ecometer-sim", version, about, long_about = None)]
pub struct Cli {
    /// Load configuration from a TOML file.
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Use a built-in preset (campus, quarter).
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Override the random seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the number of generated days.
    #[arg(long)]
    pub horizon_days: Option<u32>,

    /// Override the last generated day (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub anchor_date: Option<NaiveDate>,

    /// View to print as JSON.
    #[arg(long, value_enum, default_value_t = View::Rollup)]
    pub view: View,

    /// Range for the analytics view (7d, 30d, 90d).
    #[arg(long, default_value = "30d")]
    pub range: AnalyticsRange,

    /// Export every generated reading to CSV.
    #[arg(long, value_name = "PATH")]
    pub readings_out: Option<PathBuf>,

    /// Print the rollup as a text summary instead of JSON.
    #[arg(long)]
    pub summary: bool,

    /// Start the REST API after generation.
    #[cfg(feature = "api")]
    #[arg(long)]
    pub serve: bool,

    /// API server port; overrides the configured port.
    #[cfg(feature = "api")]
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Loads the selected configuration (file, preset, or `campus` by default)
    /// and applies the command-line overrides. Does not validate.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be loaded or the preset is unknown.
    pub fn load_config(&self) -> std::result::Result<EngineConfig, ConfigError> {
        let mut cfg = match (&self.config, &self.preset) {
            (Some(path), _) => EngineConfig::from_toml_file(path)?,
            (None, Some(name)) => EngineConfig::from_preset(name)?,
            (None, None) => EngineConfig::campus(),
        };
        self.apply_overrides(&mut cfg);
        Ok(cfg)
    }

    pub fn apply_overrides(&self, cfg: &mut EngineConfig) {
        if let Some(seed) = self.seed {
            cfg.generation.seed = seed;
        }
        if let Some(days) = self.horizon_days {
            cfg.generation.horizon_days = days;
        }
        if let Some(date) = self.anchor_date {
            cfg.generation.anchor_date = Some(date);
        }
        #[cfg(feature = "api")]
        {
            if let Some(port) = self.port {
                cfg.api.port = port;
            }
        }
    }
}

/// Renders `view` as pretty JSON, or the rollup as text when `summary` is set.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_view(engine: &Engine, view: View, range: AnalyticsRange, summary: bool) -> Result<String> {
    let out = match view {
        View::Rollup if summary => engine.formatted_rollup().to_string(),
        View::Rollup => serde_json::to_string_pretty(&engine.formatted_rollup())?,
        View::Dashboard => serde_json::to_string_pretty(&engine.dashboard_snapshot())?,
        View::Analytics => serde_json::to_string_pretty(&engine.analytics(range))?,
        View::Departments => serde_json::to_string_pretty(&engine.departments())?,
        View::Suggestions => serde_json::to_string_pretty(&engine.suggestions())?,
        View::Alerts => serde_json::to_string_pretty(&engine.alerts())?,
        View::Financial => serde_json::to_string_pretty(&engine.financial_data())?,
        View::Status => serde_json::to_string_pretty(&engine.data_status())?,
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::engine::EngineOptions;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ecometer-sim").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_campus_rollup() {
        let cli = parse(&[]);
        assert_eq!(cli.view, View::Rollup);
        assert_eq!(cli.range, AnalyticsRange::Month);
        let cfg = cli.load_config().unwrap();
        assert_eq!(cfg, EngineConfig::campus());
    }

    #[test]
    fn config_and_preset_are_exclusive() {
        let result = Cli::try_parse_from([
            "ecometer-sim",
            "--config",
            "a.toml",
            "--preset",
            "campus",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn overrides_apply_to_preset() {
        let cli = parse(&[
            "--preset",
            "quarter",
            "--seed",
            "9",
            "--horizon-days",
            "400",
            "--anchor-date",
            "2025-02-01",
        ]);
        let cfg = cli.load_config().unwrap();
        assert_eq!(cfg.generation.seed, 9);
        assert_eq!(cfg.generation.horizon_days, 400);
        assert_eq!(cfg.generation.anchor_date, NaiveDate::from_ymd_opt(2025, 2, 1));
        assert!(!cfg.validate().is_empty());
    }

    #[test]
    fn bad_range_is_rejected() {
        let result = Cli::try_parse_from(["ecometer-sim", "--view", "analytics", "--range", "14d"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_preset_fails_to_load() {
        let cli = parse(&["--preset", "bogus"]);
        assert_eq!(cli.load_config().unwrap_err().field, "preset");
    }

    #[test]
    fn status_view_renders_json() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let engine = Engine::new(EngineOptions::new(1, today).with_horizon_days(2));
        let out = render_view(&engine, View::Status, AnalyticsRange::Month, false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["energyData"], 70);
        assert_eq!(json["hasData"], true);
    }

    #[test]
    fn summary_renders_rollup_text() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let engine = Engine::new(EngineOptions::new(1, today).with_horizon_days(1));
        let out = render_view(&engine, View::Rollup, AnalyticsRange::Month, true).unwrap();
        assert!(out.starts_with("--- Campus Rollup"));
    }
}
