use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Totals;
use crate::catalog::{AiSuggestion, Alert, Department, EfficiencyRating};
use crate::sim::types::EnergyReading;

/// Number of suggestions surfaced on the dashboard.
pub const DASHBOARD_SUGGESTIONS: usize = 3;

/// Per-department totals within the dashboard window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub department_name: String,
    pub department_code: String,
    pub total_kwh: f64,
    pub total_carbon_kg: f64,
    pub total_cost_usd: f64,
    pub reading_count: usize,
    /// Static qualitative rating.
    pub efficiency: EfficiencyRating,
    pub color: String,
}

/// Snapshot shown on the landing dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_carbon_footprint: f64,
    pub total_cost_usd: f64,
    pub total_kwh_used: f64,
    pub department_summaries: Vec<DepartmentSummary>,
    pub ai_suggestions: Vec<AiSuggestion>,
    /// Unacknowledged alerts only.
    pub alerts: Vec<Alert>,
    pub last_updated: DateTime<Utc>,
}

impl DashboardSnapshot {
    /// Reduces `recent` (readings already restricted to the dashboard window).
    ///
    /// Every catalog department gets a summary, zeroed when it has no readings.
    pub fn from_readings<'a>(
        recent: impl IntoIterator<Item = &'a EnergyReading>,
        departments: &[Department],
        suggestions: &[AiSuggestion],
        alerts: &[Alert],
        last_updated: DateTime<Utc>,
    ) -> Self {
        let recent: Vec<&EnergyReading> = recent.into_iter().collect();
        let grand = Totals::from_readings(recent.iter().copied());

        let department_summaries = departments
            .iter()
            .map(|dept| {
                let totals = Totals::from_readings(
                    recent.iter().copied().filter(|r| r.department_id == dept.id),
                );
                DepartmentSummary {
                    department_name: dept.name.clone(),
                    department_code: dept.code.clone(),
                    total_kwh: totals.kwh,
                    total_carbon_kg: totals.carbon_kg,
                    total_cost_usd: totals.cost_usd,
                    reading_count: totals.count,
                    efficiency: dept.efficiency_rating,
                    color: dept.color.clone(),
                }
            })
            .collect();

        Self {
            total_carbon_footprint: grand.carbon_kg,
            total_cost_usd: grand.cost_usd,
            total_kwh_used: grand.kwh,
            department_summaries,
            ai_suggestions: suggestions.iter().take(DASHBOARD_SUGGESTIONS).cloned().collect(),
            alerts: alerts.iter().filter(|a| !a.acknowledged).cloned().collect(),
            last_updated,
        }
    }
}
