use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::suggestion::utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    Warning,
    Info,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Operational alert raised against a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: AlertType,
    pub title: String,
    pub message: String,
    /// Department code.
    pub department: String,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub acknowledged: bool,
}

/// Returns the static alert catalog.
pub fn campus_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            kind: AlertType::Warning,
            title: "Unusual Energy Spike Detected".to_string(),
            message: "VLSI Lab showing 35% higher consumption than normal. Possible equipment malfunction.".to_string(),
            department: "VLSI".to_string(),
            timestamp: utc(2025, 11, 8, 8, 30),
            severity: Severity::Medium,
            acknowledged: false,
        },
        Alert {
            id: 2,
            kind: AlertType::Info,
            title: "Monthly Target Achieved".to_string(),
            message: "CSE Building has achieved 15% energy reduction target for November.".to_string(),
            department: "CSE".to_string(),
            timestamp: utc(2025, 11, 7, 18, 0),
            severity: Severity::Low,
            acknowledged: true,
        },
        Alert {
            id: 3,
            kind: AlertType::Critical,
            title: "Budget Limit Approaching".to_string(),
            message: "Mechanical Engineering dept at 95% of monthly energy budget.".to_string(),
            department: "MECH".to_string(),
            timestamp: utc(2025, 11, 8, 6, 15),
            severity: Severity::High,
            acknowledged: false,
        },
    ]
}
