use chrono::{Datelike, NaiveDate};

use super::rng::{UniformSource, symmetric_jitter, uniform_in};
use super::types::{Weather, WeatherCondition};

const MEAN_TEMPERATURE_C: f64 = 20.0;
const SEASONAL_AMPLITUDE_C: f64 = 15.0;
const TEMPERATURE_JITTER_C: f64 = 5.0;

/// Seasonal temperature before jitter: `20 + 15 × sin(2π × month0 / 12)`.
pub fn seasonal_temperature(date: NaiveDate) -> f64 {
    let month_fraction = f64::from(date.month0()) / 12.0;
    MEAN_TEMPERATURE_C + SEASONAL_AMPLITUDE_C * (2.0 * std::f64::consts::PI * month_fraction).sin()
}

/// Draws a weather snapshot for `date`; consumes three draws
/// (temperature jitter, humidity, condition).
pub fn weather_for(date: NaiveDate, rng: &mut impl UniformSource) -> Weather {
    let raw = seasonal_temperature(date) + symmetric_jitter(rng, TEMPERATURE_JITTER_C);
    let humidity = uniform_in(rng, 40.0, 80.0);
    let idx = (rng.next_uniform() * WeatherCondition::ALL.len() as f64) as usize;
    let condition = WeatherCondition::ALL[idx.min(WeatherCondition::ALL.len() - 1)];

    Weather {
        temperature: (raw * 10.0).round() / 10.0,
        humidity,
        condition,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::sim::rng::{ConstantSource, SeededSource, SequenceSource};

    fn date(m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, 10).unwrap()
    }

    #[test]
    fn january_is_the_mean_temperature() {
        assert_relative_eq!(seasonal_temperature(date(1)), 20.0);
    }

    #[test]
    fn april_peaks() {
        // month0 = 3 → sin(π/2) = 1
        assert_relative_eq!(seasonal_temperature(date(4)), 35.0);
        assert_relative_eq!(seasonal_temperature(date(10)), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn midpoint_draws() {
        let w = weather_for(date(1), &mut ConstantSource::new(0.5));
        assert_eq!(w.temperature, 20.0);
        assert_eq!(w.humidity, 60.0);
        assert_eq!(w.condition, WeatherCondition::Cloudy);
    }

    #[test]
    fn condition_follows_third_draw() {
        let w = weather_for(date(1), &mut SequenceSource::new(vec![0.5, 0.5, 0.9]));
        assert_eq!(w.condition, WeatherCondition::Rainy);
        let w = weather_for(date(1), &mut SequenceSource::new(vec![0.5, 0.5, 0.1]));
        assert_eq!(w.condition, WeatherCondition::Sunny);
    }

    #[test]
    fn seeded_weather_is_bounded() {
        let mut rng = SeededSource::new(11);
        for m in 1..=12 {
            let w = weather_for(date(m), &mut rng);
            assert!((40.0..80.0).contains(&w.humidity));
            assert!((0.0..=40.0).contains(&w.temperature));
        }
    }
}
