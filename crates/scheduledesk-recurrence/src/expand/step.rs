//! Advancing from one occurrence of a series to the next.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use scheduledesk_core::config::WeekAndDayMode;
use scheduledesk_core::constants::SENTINEL_YEARS;
use scheduledesk_core::util::date::{
    add_months_clamped, first_of_next_month, nth_weekday_of_month, weekday_ordinal,
};

use crate::model::{EventTemplate, MonthlyRecurrence, Recurrence};

/// Months searched for an `n`th weekday before giving up.
const NTH_WEEKDAY_SEARCH_MONTHS: usize = 12;

/// Step function of a recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Fixed number of days.
    Days(u64),
    /// Anchor plus one calendar month per step, clamped to month end.
    Months,
    /// The `ordinal`th `weekday` of each following month.
    NthWeekday { weekday: Weekday, ordinal: u8 },
    /// Jumps far past any display window.
    Sentinel,
}

impl Step {
    pub(crate) fn for_template(template: &EventTemplate, week_and_day: WeekAndDayMode) -> Self {
        match &template.recurrence {
            Recurrence::EveryWeek => Self::Days(7),
            Recurrence::EveryOtherWeek => Self::Days(14),
            Recurrence::EveryMonth => match (template.monthly_rule(), week_and_day) {
                (MonthlyRecurrence::WeekAndDay, WeekAndDayMode::NthWeekday) => Self::NthWeekday {
                    weekday: template.start_date.weekday(),
                    ordinal: weekday_ordinal(template.start_date),
                },
                (MonthlyRecurrence::Other, _) => {
                    tracing::debug!(
                        template_id = ?template.id,
                        "Unknown monthly rule, repeating on the same date"
                    );
                    Self::Months
                }
                _ => Self::Months,
            },
            Recurrence::Unrecognized(raw) => {
                tracing::debug!(
                    template_id = ?template.id,
                    recurrence = %raw,
                    "Unrecognized recurrence, series ends after its anchor"
                );
                Self::Sentinel
            }
            Recurrence::None => Self::Sentinel,
        }
    }

    /// ## Summary
    /// Date of the occurrence following `current`.
    ///
    /// `steps_taken` counts the occurrences already walked, so month steps are
    /// computed from the anchor and never drift after a clamped month end.
    /// Returns `None` when the next date is outside chrono's range.
    pub(crate) fn next(
        self,
        anchor: NaiveDate,
        current: NaiveDate,
        steps_taken: u32,
    ) -> Option<NaiveDate> {
        match self {
            Self::Days(days) => current.checked_add_days(Days::new(days)),
            Self::Months => add_months_clamped(anchor, steps_taken),
            Self::NthWeekday { weekday, ordinal } => {
                let mut month = first_of_next_month(current)?;
                for _ in 0..NTH_WEEKDAY_SEARCH_MONTHS {
                    if let Some(date) =
                        nth_weekday_of_month(month.year(), month.month(), weekday, ordinal)
                    {
                        return Some(date);
                    }
                    month = first_of_next_month(month)?;
                }
                None
            }
            Self::Sentinel => add_months_clamped(current, SENTINEL_YEARS * 12),
        }
    }
}
