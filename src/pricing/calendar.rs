//! Calendar helpers for rental spans.
//!
//! Days are walked by calendar increment on plain dates, never by adding a
//! fixed number of seconds, so daylight-saving shifts cannot drop or repeat
//! a day.

use chrono::{Datelike, NaiveDate, Weekday};

/// Every calendar date from `pickup` to `return_date`, both inclusive.
///
/// Returns a single date when both are equal and nothing when the range is
/// reversed.
pub fn enumerate_rental_days(pickup: NaiveDate, return_date: NaiveDate) -> Vec<NaiveDate> {
    pickup
        .iter_days()
        .take_while(|day| *day <= return_date)
        .collect()
}

/// Saturday or Sunday
pub fn is_weekend_day(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_is_one_day() {
        let days = enumerate_rental_days(date(2025, 3, 3), date(2025, 3, 3));
        assert_eq!(days, vec![date(2025, 3, 3)]);
    }

    #[test]
    fn test_span_is_inclusive_and_ordered() {
        let days = enumerate_rental_days(date(2025, 3, 7), date(2025, 3, 9));
        assert_eq!(days, vec![date(2025, 3, 7), date(2025, 3, 8), date(2025, 3, 9)]);
    }

    #[test]
    fn test_n_extra_days_gives_n_plus_one() {
        let start = date(2025, 1, 1);
        for extra in 0..40u64 {
            let end = start + chrono::Days::new(extra);
            assert_eq!(enumerate_rental_days(start, end).len() as u64, extra + 1);
        }
    }

    #[test]
    fn test_daylight_saving_weekends() {
        // Europe/Lisbon switches on 2025-03-30 and 2025-10-26
        assert_eq!(enumerate_rental_days(date(2025, 3, 29), date(2025, 3, 31)).len(), 3);
        assert_eq!(enumerate_rental_days(date(2025, 10, 25), date(2025, 10, 27)).len(), 3);
    }

    #[test]
    fn test_month_and_year_boundaries() {
        let days = enumerate_rental_days(date(2024, 2, 28), date(2024, 3, 1));
        assert_eq!(days, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);

        let days = enumerate_rental_days(date(2024, 12, 31), date(2025, 1, 1));
        assert_eq!(days.len(), 2);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert!(enumerate_rental_days(date(2025, 3, 9), date(2025, 3, 7)).is_empty());
    }

    #[test]
    fn test_weekend_detection_all_weekdays() {
        // 2025-03-03 is a Monday
        let expected = [false, false, false, false, false, true, true];
        for (offset, weekend) in expected.iter().enumerate() {
            let day = date(2025, 3, 3 + offset as u32);
            assert_eq!(is_weekend_day(day), *weekend, "{}", day);
        }
    }
}
