//! Integration tests for presets, TOML loading and config-driven engines.

mod common;

use chrono::NaiveDate;
use ecometer_sim::Engine;
use ecometer_sim::config::EngineConfig;
use ecometer_sim::views::AnalyticsRange;

fn anchored(mut cfg: EngineConfig) -> EngineConfig {
    cfg.generation.anchor_date = Some(common::today());
    cfg
}

#[test]
fn campus_preset_matches_default_fixture() {
    let cfg = anchored(EngineConfig::from_preset("campus").unwrap());
    let engine = Engine::new(cfg.engine_options());
    assert_eq!(engine.readings(), common::seeded_engine().readings());
}

#[test]
fn quarter_preset_fills_widest_range() {
    let cfg = anchored(EngineConfig::from_preset("quarter").unwrap());
    assert!(cfg.validate().is_empty());

    let engine = Engine::new(cfg.engine_options());
    assert_eq!(engine.readings().len(), 90 * 7 * 5);
    assert_eq!(engine.analytics(AnalyticsRange::Quarter).time_series_data.len(), 90);
}

#[test]
fn toml_file_round_trip_through_engine() {
    let path = std::env::temp_dir().join(format!("ecometer-sim-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[generation]\nseed = 5\nhorizon_days = 3\nanchor_date = \"2025-06-30\"\n",
    )
    .unwrap();

    let cfg = EngineConfig::from_toml_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let engine = Engine::new(cfg.engine_options());
    assert_eq!(engine.today(), NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
    assert_eq!(engine.data_status().energy_data, 3 * 7 * 5);
}

#[test]
fn missing_file_reports_path() {
    let err = EngineConfig::from_toml_file(std::path::Path::new("/nonexistent/ecometer.toml"))
        .unwrap_err();
    assert_eq!(err.field, "config");
    assert!(err.message.contains("/nonexistent/ecometer.toml"));
}
