//! Static catalogs: department profiles, suggestions, alerts and financial figures.

/// Campus department profiles and efficiency ratings.
pub mod department;
pub mod alert;
/// Monthly budget series and savings targets.
pub mod financial;
pub mod suggestion;

pub use alert::{Alert, AlertType, Severity, campus_alerts};
pub use department::{Department, EfficiencyRating, campus_departments, find_department};
pub use financial::FinancialData;
pub use suggestion::{AiSuggestion, Priority, SuggestionCategory, campus_suggestions};
