//! Typed query views reduced from the reading store.
//!
//! Each view is computed post-hoc from the read-only store, in the same
//! manner for every call, so repeated queries return identical records.

pub mod analytics;
pub mod dashboard;
pub mod overview;
pub mod rollup;

pub use analytics::{AnalyticsRange, AnalyticsView, DepartmentComparison};
pub use dashboard::{DashboardSnapshot, DepartmentSummary};
pub use overview::{DataStatus, DepartmentOverview, RecentTotals};
pub use rollup::{DepartmentOutlook, DepartmentRollup, FormattedRollup, OperationalStatus};

use crate::sim::types::EnergyReading;

/// Average efficiency reported for an empty reading subset.
pub const FALLBACK_EFFICIENCY: f64 = 80.0;

/// Running sums over a subset of readings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Totals {
    pub kwh: f64,
    pub cost_usd: f64,
    pub carbon_kg: f64,
    pub efficiency_sum: f64,
    pub count: usize,
}

impl Totals {
    pub fn add(&mut self, reading: &EnergyReading) {
        self.kwh += reading.kwh_used;
        self.cost_usd += reading.cost_usd;
        self.carbon_kg += reading.carbon_kg;
        self.efficiency_sum += reading.efficiency;
        self.count += 1;
    }

    pub fn from_readings<'a>(readings: impl IntoIterator<Item = &'a EnergyReading>) -> Self {
        let mut totals = Self::default();
        for r in readings {
            totals.add(r);
        }
        totals
    }

    /// Mean efficiency, or [`FALLBACK_EFFICIENCY`] when no readings were added.
    pub fn avg_efficiency(&self) -> f64 {
        if self.count == 0 {
            FALLBACK_EFFICIENCY
        } else {
            self.efficiency_sum / self.count as f64
        }
    }
}
