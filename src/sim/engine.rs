//! Engine context: runs the generation pass once and serves every query view.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::info;

use super::rng::{SeededSource, UniformSource};
use super::store::ReadingStore;
use super::types::EnergyReading;
use super::window::TimeWindow;
use crate::catalog::{
    AiSuggestion, Alert, Department, FinancialData, campus_alerts, campus_departments,
    campus_suggestions,
};
use crate::error::Result;
use crate::forecast::FixedForecast;
use crate::sim::metrics::{PricedReading, ReadingRequest, price_reading};
use crate::views::{
    AnalyticsRange, AnalyticsView, DashboardSnapshot, DataStatus, DepartmentOutlook,
    DepartmentOverview, FormattedRollup,
};

/// Days covered by the base generation pass.
pub const DEFAULT_HORIZON_DAYS: u32 = 30;
/// Window of the dashboard snapshot.
pub const DASHBOARD_WINDOW_DAYS: u32 = 1;
/// Window of the formatted rollup.
pub const ROLLUP_WINDOW_DAYS: u32 = 30;
/// Window of the department overview totals.
pub const OVERVIEW_WINDOW_DAYS: u32 = 7;

/// Construction parameters for an [`Engine`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ecometer_sim::sim::engine::EngineOptions;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// let opts = EngineOptions::new(42, today);
/// assert_eq!(opts.horizon_days, 30);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    /// Seed for the default random source.
    pub seed: u64,
    /// Length of the generation horizon in days.
    pub horizon_days: u32,
    /// Last day of the horizon ("today").
    pub today: NaiveDate,
    /// Reported as `lastUpdated` on the dashboard.
    pub generated_at: DateTime<Utc>,
}

impl EngineOptions {
    /// Options for a 30-day horizon ending at `today`, stamped at midnight UTC.
    pub fn new(seed: u64, today: NaiveDate) -> Self {
        Self {
            seed,
            horizon_days: DEFAULT_HORIZON_DAYS,
            today,
            generated_at: today.and_time(NaiveTime::MIN).and_utc(),
        }
    }

    /// Options anchored at the current UTC date and time.
    pub fn now(seed: u64) -> Self {
        let now = Utc::now();
        Self {
            generated_at: now,
            ..Self::new(seed, now.date_naive())
        }
    }

    pub fn with_horizon_days(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    pub fn horizon(&self) -> TimeWindow {
        TimeWindow::trailing(self.today, self.horizon_days)
    }
}

/// Holds the generated readings and static catalogs for the lifetime of the process.
///
/// Nothing is mutated after construction, so an `Engine` can be shared across
/// threads behind an `Arc` and queried concurrently.
#[derive(Debug, Clone)]
pub struct Engine {
    options: EngineOptions,
    departments: Vec<Department>,
    store: ReadingStore,
    outlooks: Vec<DepartmentOutlook>,
    suggestions: Vec<AiSuggestion>,
    alerts: Vec<Alert>,
    financial: FinancialData,
    forecast: FixedForecast,
}

impl Engine {
    /// Builds an engine over the campus catalog using a source seeded from `options.seed`.
    pub fn new(options: EngineOptions) -> Self {
        let mut rng = SeededSource::new(options.seed);
        Self::with_source(options, campus_departments(), &mut rng)
    }

    /// Builds an engine over `departments`, drawing every random value from `rng`.
    ///
    /// Draws are taken in a fixed order: the reading store, then one outlook
    /// per department, then the financial series.
    pub fn with_source(
        options: EngineOptions,
        departments: Vec<Department>,
        rng: &mut impl UniformSource,
    ) -> Self {
        let store = ReadingStore::generate(&departments, options.horizon(), rng);
        let outlooks = departments
            .iter()
            .map(|_| DepartmentOutlook::draw(rng))
            .collect();
        let financial = FinancialData::generate(rng);

        info!(
            seed = options.seed,
            today = %options.today,
            horizon_days = options.horizon_days,
            departments = departments.len(),
            readings = store.len(),
            "reading store generated"
        );

        Self {
            options,
            departments,
            store,
            outlooks,
            suggestions: campus_suggestions(),
            alerts: campus_alerts(),
            financial,
            forecast: FixedForecast,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn today(&self) -> NaiveDate {
        self.options.today
    }

    /// Read-only view of the generated readings.
    pub fn readings(&self) -> &[EnergyReading] {
        self.store.readings()
    }

    fn trailing(&self, days: u32) -> TimeWindow {
        TimeWindow::trailing(self.options.today, days)
    }

    /// Totals over the trailing day, per-department summaries, the first three
    /// suggestions and every unacknowledged alert.
    pub fn dashboard_snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot::from_readings(
            self.store.within(self.trailing(DASHBOARD_WINDOW_DAYS)),
            &self.departments,
            &self.suggestions,
            &self.alerts,
            self.options.generated_at,
        )
    }

    /// Time series, department comparison, trends and predictions over `range`.
    ///
    /// Ranges longer than the horizon are fine; missing days contribute nothing.
    pub fn analytics(&self, range: AnalyticsRange) -> AnalyticsView {
        AnalyticsView::from_readings(
            self.store.within(self.trailing(range.days())),
            &self.departments,
            &self.forecast,
        )
    }

    /// Parses `range` (`"7d"`, `"30d"` or `"90d"`) and returns the analytics view.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidRange`] for any other string.
    pub fn analytics_for(&self, range: &str) -> Result<AnalyticsView> {
        Ok(self.analytics(range.parse()?))
    }

    /// Rounded 30-day figures per department plus alerts and suggestions.
    pub fn formatted_rollup(&self) -> FormattedRollup {
        FormattedRollup::from_readings(
            self.store.within(self.trailing(ROLLUP_WINDOW_DAYS)),
            &self.departments,
            &self.outlooks,
            &self.alerts,
            &self.suggestions,
        )
    }

    /// Catalog departments with trailing-7-day totals.
    pub fn departments(&self) -> Vec<DepartmentOverview> {
        DepartmentOverview::from_readings(
            self.store.within(self.trailing(OVERVIEW_WINDOW_DAYS)),
            &self.departments,
        )
    }

    pub fn suggestions(&self) -> Vec<AiSuggestion> {
        self.suggestions.clone()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.clone()
    }

    pub fn financial_data(&self) -> FinancialData {
        self.financial.clone()
    }

    pub fn data_status(&self) -> DataStatus {
        DataStatus {
            departments: self.departments.len(),
            energy_data: self.store.len(),
            ai_suggestions: self.suggestions.len(),
            has_data: !self.store.is_empty(),
        }
    }

    /// Prices an externally supplied reading against this engine's catalog.
    ///
    /// The store is left untouched.
    ///
    /// # Errors
    ///
    /// See [`price_reading`].
    pub fn price_reading(&self, request: &ReadingRequest) -> Result<PricedReading> {
        price_reading(&self.departments, request)
    }
}
