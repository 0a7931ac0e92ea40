use std::fmt;

use serde::{Deserialize, Serialize};

use super::{FALLBACK_EFFICIENCY, Totals};
use crate::catalog::{AiSuggestion, Alert, Department};
use crate::sim::rng::UniformSource;
use crate::sim::types::EnergyReading;

/// Draws above this value mark a department as under maintenance.
const MAINTENANCE_THRESHOLD: f64 = 0.8;
/// Half-width of the synthetic trend delta, in percent.
const TREND_SPAN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationalStatus {
    Active,
    Maintenance,
}

/// Synthetic status and trend for one department, drawn once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepartmentOutlook {
    pub status: OperationalStatus,
    /// Percent change in `[-5, +5)`.
    pub trend: f64,
}

impl DepartmentOutlook {
    /// Consumes two draws: status, then trend.
    pub fn draw(rng: &mut impl UniformSource) -> Self {
        let status = if rng.next_uniform() > MAINTENANCE_THRESHOLD {
            OperationalStatus::Maintenance
        } else {
            OperationalStatus::Active
        };
        let trend = (rng.next_uniform() - 0.5) * TREND_SPAN;
        Self { status, trend }
    }
}

impl Default for DepartmentOutlook {
    fn default() -> Self {
        Self {
            status: OperationalStatus::Active,
            trend: 0.0,
        }
    }
}

/// Per-department figures for the reports and departments pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRollup {
    pub id: u32,
    pub name: String,
    pub code: String,
    /// kWh, rounded to the nearest unit.
    pub total_consumption: i64,
    /// USD, rounded to the nearest unit.
    pub monthly_cost: i64,
    /// Rounded mean efficiency; 80 for a department without readings.
    pub efficiency_score: i64,
    pub occupancy: u32,
    pub status: OperationalStatus,
    pub trend: f64,
    pub area: f64,
    pub floors: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedRollup {
    pub departments: Vec<DepartmentRollup>,
    pub alerts: Vec<Alert>,
    pub ai_suggestions: Vec<AiSuggestion>,
    pub total_consumption: i64,
    pub total_cost: i64,
    /// Mean of the per-department rounded scores.
    pub avg_efficiency: f64,
}

impl FormattedRollup {
    /// Reduces `recent` (readings already restricted to the rollup window).
    ///
    /// `outlooks` is matched to `departments` by position; missing entries
    /// default to an active department with a flat trend.
    pub fn from_readings<'a>(
        recent: impl IntoIterator<Item = &'a EnergyReading>,
        departments: &[Department],
        outlooks: &[DepartmentOutlook],
        alerts: &[Alert],
        suggestions: &[AiSuggestion],
    ) -> Self {
        let recent: Vec<&EnergyReading> = recent.into_iter().collect();

        let rows: Vec<DepartmentRollup> = departments
            .iter()
            .enumerate()
            .map(|(i, dept)| {
                let totals = Totals::from_readings(
                    recent.iter().copied().filter(|r| r.department_id == dept.id),
                );
                let outlook = outlooks.get(i).copied().unwrap_or_default();
                DepartmentRollup {
                    id: dept.id,
                    name: dept.name.clone(),
                    code: dept.code.clone(),
                    total_consumption: totals.kwh.round() as i64,
                    monthly_cost: totals.cost_usd.round() as i64,
                    efficiency_score: totals.avg_efficiency().round() as i64,
                    occupancy: dept.occupancy,
                    status: outlook.status,
                    trend: outlook.trend,
                    area: dept.area,
                    floors: dept.floors,
                }
            })
            .collect();

        let avg_efficiency = if rows.is_empty() {
            FALLBACK_EFFICIENCY
        } else {
            rows.iter().map(|d| d.efficiency_score as f64).sum::<f64>() / rows.len() as f64
        };

        Self {
            total_consumption: rows.iter().map(|d| d.total_consumption).sum(),
            total_cost: rows.iter().map(|d| d.monthly_cost).sum(),
            avg_efficiency,
            departments: rows,
            alerts: alerts.to_vec(),
            ai_suggestions: suggestions.to_vec(),
        }
    }
}

impl fmt::Display for FormattedRollup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Campus Rollup (30 days) ---")?;
        for d in &self.departments {
            writeln!(
                f,
                "{:<8} {:>10} kWh  ${:>8}  eff {:>3}  {:?} ({:+.1}%)",
                d.code, d.total_consumption, d.monthly_cost, d.efficiency_score, d.status, d.trend
            )?;
        }
        writeln!(f, "Total consumption:     {} kWh", self.total_consumption)?;
        writeln!(f, "Total cost:            ${}", self.total_cost)?;
        write!(f, "Average efficiency:    {:.1}", self.avg_efficiency)
    }
}
