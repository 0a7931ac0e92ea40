use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionCategory {
    EnergySaving,
    CostReduction,
    Sustainability,
    Maintenance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A recommendation shown alongside the consumption aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestion {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: SuggestionCategory,
    pub priority: Priority,
    pub estimated_savings_usd: f64,
    pub implementation_time: String,
    pub difficulty: String,
    /// Codes of the departments the suggestion applies to.
    pub departments: Vec<String>,
    pub impact: String,
    /// Confidence percentage (0–100).
    pub confidence: u8,
    pub created_at: DateTime<Utc>,
}

/// Builds a UTC timestamp from constant calendar fields.
pub(crate) fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Returns the static suggestion catalog, highest priority first.
pub fn campus_suggestions() -> Vec<AiSuggestion> {
    vec![
        AiSuggestion {
            id: 1,
            title: "Optimize HVAC Schedule in CSE Building".to_string(),
            description: "AI analysis shows 30% energy waste during off-hours. Implementing smart scheduling could save $2,400 monthly.".to_string(),
            category: SuggestionCategory::EnergySaving,
            priority: Priority::High,
            estimated_savings_usd: 2400.0,
            implementation_time: "2 weeks".to_string(),
            difficulty: "Medium".to_string(),
            departments: vec!["CSE".to_string()],
            impact: "High".to_string(),
            confidence: 92,
            created_at: utc(2025, 11, 7, 10, 30),
        },
        AiSuggestion {
            id: 2,
            title: "LED Retrofit for Library Reading Areas".to_string(),
            description: "Replace 150 fluorescent fixtures with smart LED systems. Motion sensors and daylight harvesting included.".to_string(),
            category: SuggestionCategory::CostReduction,
            priority: Priority::High,
            estimated_savings_usd: 1800.0,
            implementation_time: "1 month".to_string(),
            difficulty: "Easy".to_string(),
            departments: vec!["LIB".to_string()],
            impact: "Medium".to_string(),
            confidence: 88,
            created_at: utc(2025, 11, 6, 14, 15),
        },
        AiSuggestion {
            id: 3,
            title: "Solar Panel Installation - Dormitory Roof".to_string(),
            description: "Install 200kW solar array on Dorm A roof. Could offset 60% of building electricity consumption.".to_string(),
            category: SuggestionCategory::Sustainability,
            priority: Priority::Medium,
            estimated_savings_usd: 8000.0,
            implementation_time: "3 months".to_string(),
            difficulty: "Hard".to_string(),
            departments: vec!["DORM_A".to_string()],
            impact: "Very High".to_string(),
            confidence: 85,
            created_at: utc(2025, 11, 5, 9, 20),
        },
        AiSuggestion {
            id: 4,
            title: "Predictive Maintenance for MECH Lab Equipment".to_string(),
            description: "Implement IoT sensors for early detection of equipment inefficiencies. Prevent 40% of unexpected failures.".to_string(),
            category: SuggestionCategory::Maintenance,
            priority: Priority::Medium,
            estimated_savings_usd: 1200.0,
            implementation_time: "6 weeks".to_string(),
            difficulty: "Medium".to_string(),
            departments: vec!["MECH".to_string()],
            impact: "Medium".to_string(),
            confidence: 79,
            created_at: utc(2025, 11, 4, 16, 45),
        },
        AiSuggestion {
            id: 5,
            title: "Smart Window Films for Admin Building".to_string(),
            description: "Install electrochromic smart glass to reduce cooling load by 25% during summer months.".to_string(),
            category: SuggestionCategory::EnergySaving,
            priority: Priority::Low,
            estimated_savings_usd: 950.0,
            implementation_time: "2 weeks".to_string(),
            difficulty: "Easy".to_string(),
            departments: vec!["ADMIN".to_string()],
            impact: "Low".to_string(),
            confidence: 82,
            created_at: utc(2025, 11, 3, 11, 10),
        },
    ]
}
