//! Integration tests for the query views over a zero-jitter engine.
//!
//! With every draw at 0.5 the realized kWh equals base × calendar factors,
//! so totals can be computed by hand. The fixture window ends on Wednesday
//! 2025-01-15; January and December both run heating at ×1.5 and cooling at ×0.4.

mod common;

use approx::assert_relative_eq;
use chrono::NaiveDate;
use ecometer_sim::sim::types::SourceType;
use ecometer_sim::views::{AnalyticsRange, OperationalStatus};

#[test]
fn dashboard_totals_cover_today_only() {
    let engine = common::zero_jitter_engine(30);
    let snapshot = engine.dashboard_snapshot();

    // electricity 1545 + heating 1236 + cooling 494.4 + transport 2185 + waste 874
    assert_relative_eq!(snapshot.total_kwh_used, 6334.4, epsilon = 1e-6);

    let cse = &snapshot.department_summaries[0];
    assert_eq!(cse.department_code, "CSE");
    assert_eq!(cse.reading_count, 5);
    assert_relative_eq!(cse.total_kwh, 1072.0, epsilon = 1e-9);
    assert_relative_eq!(cse.total_cost_usd, 137.2, epsilon = 1e-9);

    let sum: f64 = snapshot.department_summaries.iter().map(|s| s.total_kwh).sum();
    assert_relative_eq!(sum, snapshot.total_kwh_used, epsilon = 1e-6);
    assert_eq!(snapshot.alerts.len(), 2);
    assert_eq!(snapshot.ai_suggestions.len(), 3);
    assert_eq!(snapshot.last_updated, common::default_options().generated_at);
}

#[test]
fn rollup_applies_weekend_factor() {
    let engine = common::zero_jitter_engine(30);
    let rollup = engine.formatted_rollup();

    // 22 weekdays at 1072 kWh plus 8 weekend days at 750.4 kWh
    let cse = &rollup.departments[0];
    assert_eq!(cse.total_consumption, 29587);
    assert_eq!(cse.efficiency_score, 95);
    assert_eq!(cse.status, OperationalStatus::Active);
    assert_eq!(cse.trend, 0.0);

    assert_eq!(
        rollup.total_consumption,
        rollup.departments.iter().map(|d| d.total_consumption).sum::<i64>()
    );
    assert_relative_eq!(rollup.avg_efficiency, 580.0 / 7.0, epsilon = 1e-9);
}

#[test]
fn departments_use_trailing_week() {
    let engine = common::zero_jitter_engine(30);
    let overviews = engine.departments();
    assert_eq!(overviews.len(), 7);

    // 2025-01-09..=15 has one weekend
    let cse = &overviews[0];
    assert_eq!(cse.department.code, "CSE");
    assert_relative_eq!(cse.recent_data.total_kwh, 5.0 * 1072.0 + 2.0 * 750.4, epsilon = 1e-6);
}

#[test]
fn weekly_analytics_groups_by_date_and_source() {
    let engine = common::zero_jitter_engine(30);
    let view = engine.analytics(AnalyticsRange::Week);

    assert_eq!(view.time_series_data.len(), 7);
    assert!(view.time_series_data.values().all(|day| day.len() == 5));

    let today = &view.time_series_data[&common::today()];
    assert_relative_eq!(today[&SourceType::Electricity], 1545.0, epsilon = 1e-6);

    let cse = &view.department_comparison[0];
    assert_relative_eq!(cse.total_consumption, 6860.8, epsilon = 1e-6);
    assert_relative_eq!(cse.avg_efficiency, 95.0);
    assert_relative_eq!(view.trends.energy_trend, -8.5);
}

#[test]
fn analytics_range_beyond_horizon_uses_available_days() {
    let engine = common::zero_jitter_engine(30);
    let quarter = engine.analytics(AnalyticsRange::Quarter);
    let month = engine.analytics(AnalyticsRange::Month);
    assert_eq!(quarter.time_series_data.len(), 30);
    assert_eq!(quarter.department_comparison, month.department_comparison);
    assert!(
        !quarter
            .time_series_data
            .contains_key(&NaiveDate::from_ymd_opt(2024, 12, 16).unwrap())
    );
}

#[test]
fn invalid_range_is_rejected() {
    let engine = common::zero_jitter_engine(1);
    assert!(engine.analytics_for("14d").is_err());
}

#[test]
fn financial_midpoints() {
    let engine = common::zero_jitter_engine(1);
    let financial = engine.financial_data();
    assert_eq!(financial.monthly_budgets.len(), 11);
    assert!(financial.monthly_budgets.iter().all(|m| m.allocated == 50000.0));
    assert_eq!(financial.savings_tracking.target_savings, 125000.0);
}

#[test]
fn views_serialize_with_contract_names() {
    let engine = common::zero_jitter_engine(7);
    let analytics = serde_json::to_value(engine.analytics(AnalyticsRange::Week)).unwrap();
    assert!(analytics["timeSeriesData"]["2025-01-15"]["ELECTRICITY"].is_number());
    assert!(analytics["departmentComparison"][0]["avgEfficiency"].is_number());

    let rollup = serde_json::to_value(engine.formatted_rollup()).unwrap();
    assert!(rollup["departments"][0]["monthlyCost"].is_number());
    assert_eq!(rollup["departments"][0]["status"], "Active");
}
