//! Materialized set of generated readings.

use tracing::debug;

use super::consumption::realized_kwh;
use super::metrics::{carbon, cost, efficiency_score};
use super::rng::UniformSource;
use super::types::{EnergyReading, SourceType};
use super::weather::weather_for;
use super::window::TimeWindow;
use crate::catalog::Department;

/// Read-only store of every generated reading.
///
/// Holds exactly one reading per (date, department, source type) triple of the
/// generation horizon, ordered by date, then catalog order, then
/// [`SourceType::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingStore {
    readings: Vec<EnergyReading>,
}

impl ReadingStore {
    /// Runs the single generation pass over `horizon` × `departments` × source types.
    ///
    /// Each reading consumes five draws from `rng`, in order: consumption
    /// jitter, efficiency jitter, temperature jitter, humidity, condition.
    pub fn generate(
        departments: &[Department],
        horizon: TimeWindow,
        rng: &mut impl UniformSource,
    ) -> Self {
        let capacity = horizon.days() as usize * departments.len() * SourceType::ALL.len();
        let mut readings = Vec::with_capacity(capacity);

        for date in horizon.dates() {
            for department in departments {
                for source in SourceType::ALL {
                    let kwh_used = realized_kwh(department, source, date, rng);
                    let efficiency = efficiency_score(department.efficiency_rating, rng);
                    let weather = weather_for(date, rng);

                    readings.push(EnergyReading {
                        id: readings.len() as u64 + 1,
                        department_id: department.id,
                        department_code: department.code.clone(),
                        kwh_used,
                        source_type: source,
                        timestamp: date,
                        cost_usd: cost(source, kwh_used),
                        carbon_kg: carbon(source, kwh_used),
                        efficiency,
                        weather,
                    });
                }
            }
            debug!(%date, total = readings.len(), "generated readings for day");
        }

        Self { readings }
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn readings(&self) -> &[EnergyReading] {
        &self.readings
    }

    /// Readings whose date falls inside `window`.
    pub fn within(&self, window: TimeWindow) -> impl Iterator<Item = &EnergyReading> {
        self.readings.iter().filter(move |r| window.contains(r.timestamp))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    use super::*;
    use crate::catalog::campus_departments;
    use crate::sim::metrics::{carbon_factor, cost_per_kwh};
    use crate::sim::rng::{ConstantSource, SeededSource};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn generates_one_reading_per_triple() {
        let departments = campus_departments();
        let store = ReadingStore::generate(
            &departments,
            TimeWindow::trailing(today(), 30),
            &mut SeededSource::new(42),
        );
        assert_eq!(store.len(), 30 * departments.len() * 5);

        let triples: HashSet<(NaiveDate, u32, SourceType)> = store
            .readings()
            .iter()
            .map(|r| (r.timestamp, r.department_id, r.source_type))
            .collect();
        assert_eq!(triples.len(), store.len());
    }

    #[test]
    fn ids_are_strictly_increasing_from_one() {
        let store = ReadingStore::generate(
            &campus_departments(),
            TimeWindow::trailing(today(), 3),
            &mut SeededSource::new(1),
        );
        let ids: Vec<u64> = store.readings().iter().map(|r| r.id).collect();
        assert_eq!(ids.first(), Some(&1));
        assert!(ids.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn derived_figures_follow_tables() {
        let store = ReadingStore::generate(
            &campus_departments(),
            TimeWindow::trailing(today(), 5),
            &mut SeededSource::new(9),
        );
        for r in store.readings() {
            assert!(r.kwh_used >= 0.0);
            assert_eq!(r.cost_usd, r.kwh_used * cost_per_kwh(r.source_type));
            assert_eq!(r.carbon_kg, r.kwh_used * carbon_factor(r.source_type));
        }
    }

    #[test]
    fn zero_jitter_electricity_reading() {
        let departments = campus_departments();
        let store = ReadingStore::generate(
            &departments[..1],
            TimeWindow::trailing(today(), 1),
            &mut ConstantSource::new(0.5),
        );
        let r = &store.readings()[0];
        assert_eq!(r.source_type, SourceType::Electricity);
        assert_relative_eq!(r.kwh_used, 225.0);
        assert_relative_eq!(r.cost_usd, 27.0, epsilon = 1e-9);
        assert_relative_eq!(r.carbon_kg, 101.25, epsilon = 1e-9);
        assert_eq!(r.efficiency, 95.0);
    }

    #[test]
    fn same_seed_same_store() {
        let departments = campus_departments();
        let window = TimeWindow::trailing(today(), 10);
        let a = ReadingStore::generate(&departments, window, &mut SeededSource::new(77));
        let b = ReadingStore::generate(&departments, window, &mut SeededSource::new(77));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_horizon_yields_empty_store() {
        let store = ReadingStore::generate(
            &campus_departments(),
            TimeWindow::trailing(today(), 0),
            &mut SeededSource::new(1),
        );
        assert!(store.is_empty());
    }

    #[test]
    fn within_filters_by_window() {
        let store = ReadingStore::generate(
            &campus_departments(),
            TimeWindow::trailing(today(), 10),
            &mut SeededSource::new(1),
        );
        let last_day = store.within(TimeWindow::trailing(today(), 1)).count();
        assert_eq!(last_day, 7 * 5);
    }
}
