//! Cost, carbon and efficiency derivation, plus pricing of externally supplied readings.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::rng::{UniformSource, symmetric_jitter};
use super::types::SourceType;
use crate::catalog::{Department, EfficiencyRating, find_department};
use crate::error::{EngineError, Result};

/// Maximum absolute jitter applied to a department's baseline efficiency.
pub const EFFICIENCY_JITTER: f64 = 5.0;

/// USD per kWh.
pub fn cost_per_kwh(source: SourceType) -> f64 {
    match source {
        SourceType::Electricity => 0.12,
        SourceType::Heating => 0.08,
        SourceType::Cooling => 0.15,
        SourceType::Transport => 0.18,
        SourceType::Waste => 0.05,
    }
}

/// kg CO₂ per kWh.
pub fn carbon_factor(source: SourceType) -> f64 {
    match source {
        SourceType::Electricity => 0.45,
        SourceType::Heating => 0.25,
        SourceType::Cooling => 0.48,
        SourceType::Transport => 0.65,
        SourceType::Waste => 0.15,
    }
}

/// Resolves a source-type code, falling back to electricity for unknown codes.
fn resolve_or_electricity(code: &str) -> SourceType {
    code.parse().unwrap_or_else(|err| {
        warn!(%err, "falling back to electricity rates");
        SourceType::Electricity
    })
}

/// Cost rate for a free-form code; unknown codes use the electricity rate.
pub fn cost_per_kwh_for_code(code: &str) -> f64 {
    cost_per_kwh(resolve_or_electricity(code))
}

/// Carbon factor for a free-form code; unknown codes use the electricity factor.
pub fn carbon_factor_for_code(code: &str) -> f64 {
    carbon_factor(resolve_or_electricity(code))
}

pub fn cost(source: SourceType, kwh: f64) -> f64 {
    kwh * cost_per_kwh(source)
}

pub fn carbon(source: SourceType, kwh: f64) -> f64 {
    kwh * carbon_factor(source)
}

/// Baseline score for `rating` plus one jitter draw in `[-5, +5)`.
pub fn efficiency_score(rating: EfficiencyRating, rng: &mut impl UniformSource) -> f64 {
    rating.baseline_score() + symmetric_jitter(rng, EFFICIENCY_JITTER)
}

/// An externally supplied reading to be priced against the tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRequest {
    pub department_id: u32,
    pub kwh_used: f64,
    pub source_type: String,
    #[serde(default)]
    pub cost_usd: Option<f64>,
    #[serde(default)]
    pub carbon_kg: Option<f64>,
}

/// A priced reading. Supplied cost/carbon figures are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedReading {
    pub department_id: u32,
    pub department_code: String,
    pub kwh_used: f64,
    /// `None` when the request's code did not name a known source type.
    pub source_type: Option<SourceType>,
    pub cost_usd: f64,
    pub carbon_kg: f64,
}

/// Prices `request` against the catalog and the rate tables.
///
/// # Errors
///
/// Returns [`EngineError::UnknownDepartment`] if the department id is not in
/// `departments`, or [`EngineError::NegativeConsumption`] if the kWh figure is
/// negative or not finite.
pub fn price_reading(departments: &[Department], request: &ReadingRequest) -> Result<PricedReading> {
    let department = find_department(departments, request.department_id)
        .ok_or(EngineError::UnknownDepartment(request.department_id))?;

    if !request.kwh_used.is_finite() || request.kwh_used < 0.0 {
        return Err(EngineError::NegativeConsumption(request.kwh_used));
    }

    let source_type = request.source_type.parse::<SourceType>().ok();
    let cost_usd = request
        .cost_usd
        .unwrap_or_else(|| request.kwh_used * cost_per_kwh_for_code(&request.source_type));
    let carbon_kg = request
        .carbon_kg
        .unwrap_or_else(|| request.kwh_used * carbon_factor_for_code(&request.source_type));

    debug!(
        department = %department.code,
        kwh = request.kwh_used,
        cost_usd,
        carbon_kg,
        "priced reading"
    );

    Ok(PricedReading {
        department_id: department.id,
        department_code: department.code.clone(),
        kwh_used: request.kwh_used,
        source_type,
        cost_usd,
        carbon_kg,
    })
}
