use serde::{Deserialize, Serialize};

use super::Totals;
use crate::catalog::Department;
use crate::sim::types::EnergyReading;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTotals {
    pub total_kwh: f64,
    pub total_cost: f64,
    pub total_carbon: f64,
}

/// A catalog department enriched with its trailing-week totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentOverview {
    #[serde(flatten)]
    pub department: Department,
    pub recent_data: RecentTotals,
}

impl DepartmentOverview {
    /// Builds one overview per department from `recent` (the trailing-week readings).
    pub fn from_readings<'a>(
        recent: impl IntoIterator<Item = &'a EnergyReading>,
        departments: &[Department],
    ) -> Vec<Self> {
        let recent: Vec<&EnergyReading> = recent.into_iter().collect();
        departments
            .iter()
            .map(|dept| {
                let totals = Totals::from_readings(
                    recent.iter().copied().filter(|r| r.department_id == dept.id),
                );
                Self {
                    department: dept.clone(),
                    recent_data: RecentTotals {
                        total_kwh: totals.kwh,
                        total_cost: totals.cost_usd,
                        total_carbon: totals.carbon_kg,
                    },
                }
            })
            .collect()
    }
}

/// Counts describing what the engine currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStatus {
    pub departments: usize,
    pub energy_data: usize,
    pub ai_suggestions: usize,
    pub has_data: bool,
}
