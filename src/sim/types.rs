//! Core generation types: source types, weather snapshots and readings.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Energy category of a reading.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceType {
    Electricity,
    Heating,
    Cooling,
    Transport,
    Waste,
}

impl SourceType {
    /// All source types in generation order.
    pub const ALL: [SourceType; 5] = [
        SourceType::Electricity,
        SourceType::Heating,
        SourceType::Cooling,
        SourceType::Transport,
        SourceType::Waste,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Electricity => "ELECTRICITY",
            Self::Heating => "HEATING",
            Self::Cooling => "COOLING",
            Self::Transport => "TRANSPORT",
            Self::Waste => "WASTE",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a source-type code is not one of the five known categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSourceType(pub String);

impl fmt::Display for UnknownSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown source type \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownSourceType {}

impl FromStr for SourceType {
    type Err = UnknownSourceType;

    /// Parses a case-insensitive source-type code such as `"heating"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSourceType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 3] = [
        WeatherCondition::Sunny,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
        }
    }
}

/// Weather attached to a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    /// Degrees Celsius, one decimal place.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    pub condition: WeatherCondition,
}

/// One generated reading for a (date, department, source type) triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyReading {
    /// Sequential id starting at 1.
    pub id: u64,
    pub department_id: u32,
    pub department_code: String,
    /// kWh consumed, rounded to two decimal places.
    pub kwh_used: f64,
    pub source_type: SourceType,
    pub timestamp: NaiveDate,
    /// `kwh_used * cost_per_kwh(source_type)`.
    pub cost_usd: f64,
    /// `kwh_used * carbon_factor(source_type)`.
    pub carbon_kg: f64,
    pub efficiency: f64,
    pub weather: Weather,
}
