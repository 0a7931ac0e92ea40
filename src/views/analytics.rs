use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Totals;
use crate::catalog::Department;
use crate::error::EngineError;
use crate::forecast::{FixedForecast, Predictions, Trends};
use crate::sim::types::{EnergyReading, SourceType};

/// Trailing window selectable on the analytics page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnalyticsRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
}

impl AnalyticsRange {
    pub fn days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
        }
    }
}

impl fmt::Display for AnalyticsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyticsRange {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(Self::Week),
            "30d" => Ok(Self::Month),
            "90d" => Ok(Self::Quarter),
            other => Err(EngineError::InvalidRange(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentComparison {
    pub name: String,
    pub code: String,
    pub total_consumption: f64,
    /// Mean reading efficiency, 80 when the department has no readings in range.
    pub avg_efficiency: f64,
    pub color: String,
}

/// Date → source type → summed kWh.
pub type TimeSeries = BTreeMap<NaiveDate, BTreeMap<SourceType, f64>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsView {
    pub time_series_data: TimeSeries,
    pub department_comparison: Vec<DepartmentComparison>,
    pub trends: Trends,
    pub predictions: Predictions,
}

/// Groups readings by date and source type.
///
/// Only dates with at least one reading appear; each such date carries all
/// five source types, zero where nothing was read.
pub fn group_by_date_and_source<'a>(
    readings: impl IntoIterator<Item = &'a EnergyReading>,
) -> TimeSeries {
    let mut grouped = TimeSeries::new();
    for r in readings {
        let day = grouped
            .entry(r.timestamp)
            .or_insert_with(|| SourceType::ALL.into_iter().map(|s| (s, 0.0)).collect());
        *day.entry(r.source_type).or_insert(0.0) += r.kwh_used;
    }
    grouped
}

impl AnalyticsView {
    /// Reduces `in_range` (readings already restricted to the selected range).
    pub fn from_readings<'a>(
        in_range: impl IntoIterator<Item = &'a EnergyReading>,
        departments: &[Department],
        forecast: &FixedForecast,
    ) -> Self {
        let in_range: Vec<&EnergyReading> = in_range.into_iter().collect();

        let department_comparison = departments
            .iter()
            .map(|dept| {
                let totals = Totals::from_readings(
                    in_range.iter().copied().filter(|r| r.department_id == dept.id),
                );
                DepartmentComparison {
                    name: dept.name.clone(),
                    code: dept.code.clone(),
                    total_consumption: totals.kwh,
                    avg_efficiency: totals.avg_efficiency(),
                    color: dept.color.clone(),
                }
            })
            .collect();

        Self {
            time_series_data: group_by_date_and_source(in_range.iter().copied()),
            department_comparison,
            trends: forecast.trends(),
            predictions: forecast.predictions(),
        }
    }
}
