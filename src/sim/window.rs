use chrono::{Days, NaiveDate};

/// A trailing window of calendar days ending at an anchor date (inclusive).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ecometer_sim::sim::window::TimeWindow;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
/// let dates: Vec<_> = TimeWindow::trailing(today, 3).dates().collect();
/// assert_eq!(dates.first(), NaiveDate::from_ymd_opt(2025, 1, 1).as_ref());
/// assert_eq!(dates.last(), Some(&today));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Last day of the window.
    end: NaiveDate,
    /// Number of days covered.
    days: u32,
}

impl TimeWindow {
    /// Creates a window of `days` calendar days ending at `end`.
    pub fn trailing(end: NaiveDate, days: u32) -> Self {
        Self { end, days }
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Returns `true` if `date` lies within the window.
    ///
    /// A date belongs to an N-day window when `0 <= end - date < N`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let age = (self.end - date).num_days();
        age >= 0 && age < i64::from(self.days)
    }

    /// Iterates the window's dates, oldest first.
    ///
    /// Each call returns a fresh iterator, so the sequence can be replayed.
    pub fn dates(&self) -> WindowDates {
        WindowDates {
            end: self.end,
            remaining: self.days,
        }
    }
}

/// Iterator over the dates of a [`TimeWindow`].
#[derive(Debug, Clone)]
pub struct WindowDates {
    end: NaiveDate,
    /// Days still to be yielded; the next date is `end - (remaining - 1)`.
    remaining: u32,
}

impl Iterator for WindowDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        while self.remaining > 0 {
            self.remaining -= 1;
            if let Some(date) = self.end.checked_sub_days(Days::new(u64::from(self.remaining))) {
                return Some(date);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn thirty_day_window_ends_today() {
        let today = date(2025, 3, 10);
        let dates: Vec<NaiveDate> = TimeWindow::trailing(today, 30).dates().collect();
        assert_eq!(dates.len(), 30);
        assert_eq!(dates[0], date(2025, 2, 9));
        assert_eq!(dates[29], today);
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn window_crosses_year_boundary() {
        let dates: Vec<NaiveDate> = TimeWindow::trailing(date(2025, 1, 2), 4).dates().collect();
        assert_eq!(
            dates,
            vec![date(2024, 12, 30), date(2024, 12, 31), date(2025, 1, 1), date(2025, 1, 2)]
        );
    }

    #[test]
    fn empty_window_yields_nothing() {
        let window = TimeWindow::trailing(date(2025, 1, 1), 0);
        assert_eq!(window.dates().count(), 0);
        assert!(!window.contains(date(2025, 1, 1)));
    }

    #[test]
    fn dates_are_restartable() {
        let window = TimeWindow::trailing(date(2025, 6, 1), 7);
        let first: Vec<NaiveDate> = window.dates().collect();
        let second: Vec<NaiveDate> = window.dates().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn contains_is_half_open() {
        let window = TimeWindow::trailing(date(2025, 6, 10), 7);
        assert!(window.contains(date(2025, 6, 10)));
        assert!(window.contains(date(2025, 6, 4)));
        assert!(!window.contains(date(2025, 6, 3)));
        assert!(!window.contains(date(2025, 6, 11)));
    }

    #[test]
    fn window_dates_match_contains() {
        let window = TimeWindow::trailing(date(2025, 6, 10), 5);
        assert!(window.dates().all(|d| window.contains(d)));
    }
}
