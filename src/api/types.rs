//! API query and error types.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /analytics`.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    /// `7d`, `30d` or `90d`; `30d` when absent.
    pub range: Option<String>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
