//! Calendar-date helpers.
//!
//! ## Summary
//! Availability events carry plain calendar dates (no time of day, no zone).
//! These helpers parse and format the `YYYY-MM-DD` wire form and do the month
//! arithmetic the recurrence walk needs.

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::constants::CALENDAR_DATE_FORMAT;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Parses a `YYYY-MM-DD` calendar date.
///
/// Surrounding whitespace is ignored. Out-of-range fields such as
/// `2025-02-30` are rejected.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the string is not a valid calendar date.
pub fn parse_calendar_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), CALENDAR_DATE_FORMAT)
        .map_err(|err| CoreError::ParseError(format!("invalid calendar date '{value}': {err}")))
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(CALENDAR_DATE_FORMAT).to_string()
}

/// Whole days from `start` to `end` (negative when `end` is earlier).
#[must_use]
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// ## Summary
/// Adds `months` calendar months to `anchor`.
///
/// The day of month is clamped to the last day of the target month, so
/// `2025-01-31 + 1` is `2025-02-28`. Returns `None` past chrono's date range.
#[must_use]
pub fn add_months_clamped(anchor: NaiveDate, months: u32) -> Option<NaiveDate> {
    anchor.checked_add_months(Months::new(months))
}

/// Ordinal of the date's weekday within its month (1 for days 1-7, 2 for 8-14, ...).
#[must_use]
pub fn weekday_ordinal(date: NaiveDate) -> u8 {
    // day0 is at most 30
    #[expect(clippy::cast_possible_truncation)]
    let ordinal = (date.day0() / 7) as u8;
    ordinal + 1
}

/// ## Summary
/// Finds the `n`th `weekday` of the given month.
///
/// Returns `None` when the month has no such day (a 5th Monday, say).
#[must_use]
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

/// First day of the month following `date`'s month.
#[must_use]
pub fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parses_valid_dates() {
        assert_eq!(parse_calendar_date("2025-01-06").unwrap(), date(2025, 1, 6));
        assert_eq!(parse_calendar_date(" 2024-02-29 ").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_rejects_invalid_dates() {
        for value in ["", "2025--1-1", "2025-02-30", "2025-13-01", "06/01/2025"] {
            let err = parse_calendar_date(value).unwrap_err();
            assert!(matches!(err, CoreError::ParseError(_)), "{value} should not parse");
        }
    }

    #[test]
    fn test_format_is_zero_padded() {
        assert_eq!(format_calendar_date(date(2025, 3, 5)), "2025-03-05");
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(date(2025, 1, 1), date(2025, 1, 3)), 2);
        assert_eq!(days_between(date(2025, 1, 3), date(2025, 1, 1)), -2);
        assert_eq!(days_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(add_months_clamped(date(2025, 1, 31), 1), Some(date(2025, 2, 28)));
        assert_eq!(add_months_clamped(date(2024, 1, 31), 1), Some(date(2024, 2, 29)));
        assert_eq!(add_months_clamped(date(2025, 1, 31), 2), Some(date(2025, 3, 31)));
        assert_eq!(add_months_clamped(date(2025, 11, 15), 3), Some(date(2026, 2, 15)));
    }

    #[test]
    fn test_weekday_ordinal() {
        assert_eq!(weekday_ordinal(date(2025, 1, 1)), 1);
        assert_eq!(weekday_ordinal(date(2025, 1, 7)), 1);
        assert_eq!(weekday_ordinal(date(2025, 1, 8)), 2);
        assert_eq!(weekday_ordinal(date(2025, 1, 14)), 2);
        assert_eq!(weekday_ordinal(date(2025, 1, 29)), 5);
    }

    #[test]
    fn test_nth_weekday_of_month() {
        // 2nd Tuesday of February 2025
        assert_eq!(
            nth_weekday_of_month(2025, 2, Weekday::Tue, 2),
            Some(date(2025, 2, 11))
        );
        // February 2025 has only four Mondays
        assert_eq!(nth_weekday_of_month(2025, 2, Weekday::Mon, 5), None);
    }

    #[test]
    fn test_first_of_next_month() {
        assert_eq!(first_of_next_month(date(2025, 1, 31)), Some(date(2025, 2, 1)));
        assert_eq!(first_of_next_month(date(2025, 12, 5)), Some(date(2026, 1, 1)));
    }
}
