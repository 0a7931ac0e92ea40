//! TOML-based engine configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::sim::engine::{DEFAULT_HORIZON_DAYS, EngineOptions};

/// Longest accepted generation horizon.
pub const MAX_HORIZON_DAYS: u32 = 366;

/// Top-level configuration parsed from TOML.
///
/// Every field has a default, so an empty file is a valid configuration.
/// Load from TOML with [`EngineConfig::from_toml_file`] or start from a
/// named preset with [`EngineConfig::from_preset`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Reading generation parameters.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// REST transport parameters.
    #[serde(default)]
    pub api: ApiConfig,
    /// Log filter and output format.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Reading generation parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Master random seed.
    pub seed: u64,
    /// Number of trailing days to generate (must be <= 366).
    pub horizon_days: u32,
    /// Last generated day; the current UTC date when absent.
    pub anchor_date: Option<NaiveDate>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            horizon_days: DEFAULT_HORIZON_DAYS,
            anchor_date: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when no environment override is set.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"generation.horizon_days"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

fn earliest_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

impl EngineConfig {
    /// One month of readings: the default campus dataset.
    pub fn campus() -> Self {
        Self::default()
    }

    /// Ninety days of readings, so the widest analytics range is fully populated.
    pub fn quarter() -> Self {
        Self {
            generation: GenerationConfig {
                horizon_days: 90,
                ..GenerationConfig::default()
            },
            ..Self::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["campus", "quarter"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "campus" => Ok(Self::campus()),
            "quarter" => Ok(Self::quarter()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let g = &self.generation;

        if g.horizon_days > MAX_HORIZON_DAYS {
            errors.push(ConfigError::new(
                "generation.horizon_days",
                format!("must be <= {MAX_HORIZON_DAYS}, got {}", g.horizon_days),
            ));
        }
        if let Some(anchor) = g.anchor_date {
            if anchor < earliest_anchor() {
                errors.push(ConfigError::new(
                    "generation.anchor_date",
                    format!("must not be before 2000-01-01, got {anchor}"),
                ));
            }
        }
        if self.logging.filter.trim().is_empty() {
            errors.push(ConfigError::new("logging.filter", "must not be empty"));
        }

        errors
    }

    /// Engine options for this configuration, anchored at `anchor_date` or now.
    pub fn engine_options(&self) -> EngineOptions {
        let g = &self.generation;
        let base = match g.anchor_date {
            Some(date) => EngineOptions::new(g.seed, date),
            None => EngineOptions::now(g.seed),
        };
        base.with_horizon_days(g.horizon_days)
    }
}
