use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::util::date::{days_between, format_calendar_date, parse_calendar_date};

/// ## Summary
/// Inclusive range of calendar dates a caller wants occurrences for.
///
/// A window whose start is after its end is *empty*; it is representable so
/// callers can pass user input through unchanged and get no occurrences back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// ## Summary
    /// Builds a window from two `YYYY-MM-DD` strings.
    ///
    /// ## Errors
    /// Returns `CoreError::ParseError` if either bound is not a valid date.
    pub fn parse(start: &str, end: &str) -> CoreResult<Self> {
        Ok(Self::new(parse_calendar_date(start)?, parse_calendar_date(end)?))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, 0 for an empty window.
    #[must_use]
    pub fn len_days(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            days_between(self.start, self.end) + 1
        }
    }

    /// Every date of the window in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..={}",
            format_calendar_date(self.start),
            format_calendar_date(self.end)
        )
    }
}
