use serde::{Deserialize, Serialize};

use crate::sim::rng::{UniformSource, uniform_in};

const MONTHS: [&str; 11] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
];

/// Budget, spend and projection for one month (USD).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBudget {
    pub month: String,
    pub allocated: f64,
    pub spent: f64,
    pub projected: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsTracking {
    pub target_savings: f64,
    pub actual_savings: f64,
    pub projected_year_end: f64,
}

/// Share of total cost per source type, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub electricity: f64,
    pub heating: f64,
    pub cooling: f64,
    pub transport: f64,
    pub waste: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    pub monthly_budgets: Vec<MonthlyBudget>,
    pub savings_tracking: SavingsTracking,
    pub cost_breakdown: CostBreakdown,
}

impl FinancialData {
    /// Draws the monthly series from `source`; the aggregate targets are fixed.
    ///
    /// Three draws are taken per month in allocated, spent, projected order.
    pub fn generate(source: &mut impl UniformSource) -> Self {
        let monthly_budgets = MONTHS
            .iter()
            .map(|month| MonthlyBudget {
                month: (*month).to_string(),
                allocated: uniform_in(source, 45_000.0, 55_000.0),
                spent: uniform_in(source, 35_000.0, 50_000.0),
                projected: uniform_in(source, 40_000.0, 48_000.0),
            })
            .collect();

        Self {
            monthly_budgets,
            savings_tracking: SavingsTracking {
                target_savings: 125_000.0,
                actual_savings: 98_500.0,
                projected_year_end: 145_000.0,
            },
            cost_breakdown: CostBreakdown {
                electricity: 65.0,
                heating: 15.0,
                cooling: 12.0,
                transport: 5.0,
                waste: 3.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ConstantSource, SeededSource};

    #[test]
    fn monthly_series_covers_january_to_november() {
        let data = FinancialData::generate(&mut ConstantSource::new(0.5));
        let months: Vec<&str> = data.monthly_budgets.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months.first(), Some(&"Jan"));
        assert_eq!(months.last(), Some(&"Nov"));
        assert_eq!(months.len(), 11);
    }

    #[test]
    fn midpoint_draw_yields_midpoint_figures() {
        let data = FinancialData::generate(&mut ConstantSource::new(0.5));
        let jan = &data.monthly_budgets[0];
        assert_eq!(jan.allocated, 50_000.0);
        assert_eq!(jan.spent, 42_500.0);
        assert_eq!(jan.projected, 44_000.0);
    }

    #[test]
    fn seeded_figures_stay_in_range() {
        let data = FinancialData::generate(&mut SeededSource::new(7));
        for m in &data.monthly_budgets {
            assert!((45_000.0..55_000.0).contains(&m.allocated));
            assert!((35_000.0..50_000.0).contains(&m.spent));
            assert!((40_000.0..48_000.0).contains(&m.projected));
        }
    }

    #[test]
    fn cost_breakdown_sums_to_one_hundred() {
        let b = FinancialData::generate(&mut ConstantSource::new(0.0)).cost_breakdown;
        assert_eq!(b.electricity + b.heating + b.cooling + b.transport + b.waste, 100.0);
    }
}
