//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use ecometer_sim::catalog::campus_departments;
use ecometer_sim::sim::engine::{Engine, EngineOptions};
use ecometer_sim::sim::rng::ConstantSource;

/// Fixed seed used across integration tests.
pub const SEED: u64 = 42;

/// Anchor date for every fixture: Wednesday 2025-01-15.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

/// Default options (30-day horizon, seed 42) anchored at [`today`].
pub fn default_options() -> EngineOptions {
    EngineOptions::new(SEED, today())
}

/// Seeded engine over the campus catalog.
pub fn seeded_engine() -> Engine {
    Engine::new(default_options())
}

/// Engine whose every draw is 0.5, so all jitter is zero and outlooks are
/// active with a flat trend.
pub fn zero_jitter_engine(horizon_days: u32) -> Engine {
    Engine::with_source(
        default_options().with_horizon_days(horizon_days),
        campus_departments(),
        &mut ConstantSource::new(0.5),
    )
}
