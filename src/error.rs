//! Error types for the engine's query boundary and export paths.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Failures surfaced at the engine boundary.
///
/// Reductions over the reading store never fail; these variants only cover
/// caller-supplied arguments and I/O.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid analytics range \"{0}\", expected one of 7d, 30d, 90d")]
    InvalidRange(String),
    #[error("department {0} not found in catalog")]
    UnknownDepartment(u32),
    #[error("consumption must be a finite, non-negative kWh value, got {0}")]
    NegativeConsumption(f64),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
