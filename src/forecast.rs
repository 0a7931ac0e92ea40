//! Fixed trend percentages and forward projections served with the analytics view.

use serde::{Deserialize, Serialize};

/// Period-over-period change in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    pub energy_trend: f64,
    pub cost_trend: f64,
    pub carbon_trend: f64,
    pub efficiency_trend: f64,
}

/// Projected totals for one future period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// kWh.
    pub expected_consumption: f64,
    /// USD.
    pub estimated_cost: f64,
    /// kg CO₂.
    pub carbon_footprint: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Predictions {
    pub next_month: Projection,
    pub year_end: Projection,
}

/// Constant-projection forecaster.
///
/// Figures are policy constants and do not depend on the readings.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedForecast;

impl FixedForecast {
    pub fn trends(&self) -> Trends {
        Trends {
            energy_trend: -8.5,
            cost_trend: -12.3,
            carbon_trend: -15.2,
            efficiency_trend: 6.8,
        }
    }

    pub fn predictions(&self) -> Predictions {
        Predictions {
            next_month: Projection {
                expected_consumption: 125_000.0,
                estimated_cost: 15_000.0,
                carbon_footprint: 56_250.0,
            },
            year_end: Projection {
                expected_consumption: 1_400_000.0,
                estimated_cost: 168_000.0,
                carbon_footprint: 630_000.0,
            },
        }
    }
}
