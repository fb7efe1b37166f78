//! Calendar window generation.
//!
//! Pure date arithmetic: given the earliest data date and an explicit
//! "today", produce the Monday-to-Sunday aligned range of days the
//! heat-map renders, each paired with the day's result when one exists.

use chrono::{Datelike, Days, Months, NaiveDate};
use std::collections::HashMap;

use crate::config::WindowConfig;
use crate::domain::result::DailyResult;

/// One cell of the heat-map. Derived at build time, never persisted.
#[derive(Debug, Clone)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub result: Option<DailyResult>,
}

/// Inclusive date range rendered by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

/// The Monday on or before `date`.
pub fn adjust_to_monday(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// The Sunday on or after `date`.
pub fn adjust_to_sunday(date: NaiveDate) -> NaiveDate {
    date + Days::new(u64::from(6 - date.weekday().num_days_from_monday()))
}

impl Window {
    /// Compute the rendered window.
    ///
    /// The start slides forward so the window never covers more than
    /// `max_months` calendar months before `today`. The end is the
    /// later of `today - buffer_days` and `start + min_span_days`,
    /// Sunday-adjusted, and never later than `today`.
    pub fn compute(data_start: Option<NaiveDate>, today: NaiveDate, opts: &WindowConfig) -> Self {
        let mut start = data_start.unwrap_or(today).min(today);

        let floor = today
            .checked_sub_months(Months::new(opts.max_months))
            .unwrap_or(start);
        if start < floor {
            start = floor;
        }

        let end = (today - Days::new(u64::from(opts.buffer_days)))
            .max(start + Days::new(u64::from(opts.min_span_days)));

        Self {
            first: adjust_to_monday(start),
            last: adjust_to_sunday(end).min(today),
        }
    }

    /// Every date in the window paired with its result, if any.
    /// An empty result set yields an all-absent calendar.
    pub fn days(&self, results: &[DailyResult]) -> Vec<CalendarDay> {
        let by_date: HashMap<NaiveDate, &DailyResult> =
            results.iter().map(|r| (r.date, r)).collect();

        self.first
            .iter_days()
            .take_while(|d| *d <= self.last)
            .map(|date| CalendarDay {
                date,
                result: by_date.get(&date).map(|r| (*r).clone()),
            })
            .collect()
    }
}

/// Chunk an ordered day sequence into weeks of 7, preserving order.
/// Only the trailing week may be shorter.
pub fn weeks<T: Clone>(days: &[T]) -> Vec<Vec<T>> {
    days.chunks(7).map(<[T]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn opts() -> WindowConfig {
        WindowConfig {
            max_months: 12,
            min_span_days: 28,
            buffer_days: 7,
        }
    }

    fn result(d: &str, correct: bool) -> DailyResult {
        DailyResult {
            date: date(d),
            answer: "Gulf of Mexico".into(),
            model: "test-model".into(),
            correct,
        }
    }

    #[test]
    fn monday_adjustment() {
        assert_eq!(adjust_to_monday(date("2025-01-20")), date("2025-01-20")); // Monday
        assert_eq!(adjust_to_monday(date("2025-01-22")), date("2025-01-20")); // Wednesday
        assert_eq!(adjust_to_monday(date("2025-01-26")), date("2025-01-20")); // Sunday
    }

    #[test]
    fn sunday_adjustment() {
        assert_eq!(adjust_to_sunday(date("2025-01-26")), date("2025-01-26")); // Sunday
        assert_eq!(adjust_to_sunday(date("2025-01-20")), date("2025-01-26")); // Monday
        assert_eq!(adjust_to_sunday(date("2025-01-25")), date("2025-01-26")); // Saturday
    }

    #[test]
    fn window_starts_monday_ends_sunday() {
        for day in 0..31 {
            let start = date("2025-01-01") + Days::new(day);
            let w = Window::compute(Some(start), date("2025-12-01"), &opts());
            assert_eq!(w.first.weekday(), Weekday::Mon, "start {start}");
            assert_eq!(w.last.weekday(), Weekday::Sun, "start {start}");
        }
    }

    #[test]
    fn no_generated_date_is_in_the_future() {
        let today = date("2025-01-29");
        let w = Window::compute(Some(date("2025-01-20")), today, &opts());
        let days = w.days(&[]);
        assert!(days.iter().all(|d| d.date <= today));
        assert_eq!(days.last().unwrap().date, today);
    }

    #[test]
    fn start_slides_forward_when_span_exceeds_cap() {
        let today = date("2025-12-01");
        let w = Window::compute(Some(date("2023-01-01")), today, &opts());
        // Capped at 12 calendar months before today, Monday-adjusted.
        assert_eq!(w.first, adjust_to_monday(date("2024-12-01")));
    }

    #[test]
    fn empty_data_yields_all_absent_calendar_around_today() {
        let today = date("2025-06-15");
        let w = Window::compute(None, today, &opts());
        let days = w.days(&[]);
        assert!(!days.is_empty());
        assert!(days.iter().all(|d| d.result.is_none()));
        assert!(days.iter().all(|d| d.date <= today));
    }

    #[test]
    fn results_land_on_their_dates() {
        let today = date("2025-03-01");
        let results = vec![
            result("2025-01-20", true),
            result("2025-01-21", true),
            result("2025-01-22", false),
        ];
        let w = Window::compute(Some(date("2025-01-20")), today, &opts());
        let days = w.days(&results);

        // Worked example: Monday 2025-01-20 opens the calendar, the
        // first two days are correct, the third incorrect, everything
        // after is absent.
        assert_eq!(days[0].date, date("2025-01-20"));
        assert_eq!(w.last.weekday(), Weekday::Sun);
        assert!(days[0].result.as_ref().unwrap().correct);
        assert!(days[1].result.as_ref().unwrap().correct);
        assert!(!days[2].result.as_ref().unwrap().correct);
        assert!(days[3..].iter().all(|d| d.result.is_none()));
    }

    #[test]
    fn weeks_preserve_order_and_never_exceed_seven() {
        let days: Vec<u32> = (0..23).collect();
        let grouped = weeks(&days);
        assert!(grouped.iter().all(|w| w.len() <= 7));
        assert_eq!(grouped.last().unwrap().len(), 2);
        let flat: Vec<u32> = grouped.into_iter().flatten().collect();
        assert_eq!(flat, days);
    }

    #[test]
    fn full_window_chunks_into_whole_weeks() {
        let today = date("2025-06-15");
        let w = Window::compute(Some(date("2025-01-20")), today, &opts());
        let days = w.days(&[]);
        assert_eq!(days.len() % 7, 0);
        let grouped = weeks(&days);
        assert!(grouped.iter().all(|week| week.len() == 7));
    }

    #[test]
    fn future_data_start_is_clamped_to_today() {
        let today = date("2025-01-10");
        let w = Window::compute(Some(date("2025-02-01")), today, &opts());
        assert!(w.first <= today);
        assert!(w.last <= today);
    }
}
