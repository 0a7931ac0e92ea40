//! Base consumption and calendar/random variation for a reading.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::warn;

use super::rng::{UniformSource, uniform_in};
use super::types::SourceType;
use crate::catalog::Department;

/// Multiplier applied on Saturdays and Sundays.
pub const WEEKEND_FACTOR: f64 = 0.7;
/// Lower bound of the daily random multiplier.
pub const JITTER_MIN: f64 = 0.8;
/// Upper bound (exclusive) of the daily random multiplier.
pub const JITTER_MAX: f64 = 1.2;

/// Structural daily kWh for a department and source type.
///
/// Area drives the building loads, headcount drives transport and waste.
pub fn base_consumption(department: &Department, source: SourceType) -> f64 {
    match source {
        SourceType::Electricity => department.area * 0.015,
        SourceType::Heating => department.area * 0.008,
        SourceType::Cooling => department.area * 0.012,
        SourceType::Transport => f64::from(department.occupancy) * 0.5,
        SourceType::Waste => f64::from(department.occupancy) * 0.2,
    }
}

/// Base consumption for a free-form source-type code.
///
/// Unknown codes yield zero.
pub fn base_consumption_for_code(department: &Department, code: &str) -> f64 {
    match code.parse::<SourceType>() {
        Ok(source) => base_consumption(department, source),
        Err(err) => {
            warn!(%err, department = %department.code, "no base consumption for source type");
            0.0
        }
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Weekend multiplier for `date`.
pub fn weekend_factor(date: NaiveDate) -> f64 {
    if is_weekend(date) { WEEKEND_FACTOR } else { 1.0 }
}

/// Seasonal multiplier, applied to heating and cooling only.
///
/// Heating runs at ×1.5 for zero-based months 0–2 and 10–11, ×0.3 for 3–9.
/// Cooling runs at ×1.4 for months 4–8, ×0.4 otherwise.
pub fn seasonal_factor(date: NaiveDate, source: SourceType) -> f64 {
    let month = date.month0();
    match source {
        SourceType::Heating => {
            if (3..=9).contains(&month) {
                0.3
            } else {
                1.5
            }
        }
        SourceType::Cooling => {
            if (4..=8).contains(&month) {
                1.4
            } else {
                0.4
            }
        }
        _ => 1.0,
    }
}

/// Deterministic part of the variation factor: weekend then seasonal.
pub fn calendar_factor(date: NaiveDate, source: SourceType) -> f64 {
    weekend_factor(date) * seasonal_factor(date, source)
}

/// Full variation factor for one reading; consumes exactly one draw.
pub fn variation_factor(
    date: NaiveDate,
    source: SourceType,
    rng: &mut impl UniformSource,
) -> f64 {
    calendar_factor(date, source) * uniform_in(rng, JITTER_MIN, JITTER_MAX)
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Realized kWh for a (department, source type, date) triple, rounded for storage.
///
/// Applies base → weekend → seasonal → jitter, in that order.
pub fn realized_kwh(
    department: &Department,
    source: SourceType,
    date: NaiveDate,
    rng: &mut impl UniformSource,
) -> f64 {
    let base = base_consumption(department, source);
    round2(base * variation_factor(date, source, rng)).max(0.0)
}
