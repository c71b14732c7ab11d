use std::collections::BTreeMap;

use chrono::NaiveDate;
use scheduledesk_core::types::DateWindow;
use scheduledesk_recurrence::EventInstance;

/// Instances covering each day of a window, in date order.
pub type DaySchedule = BTreeMap<NaiveDate, Vec<EventInstance>>;

/// ## Summary
/// Groups instances by the calendar days they cover inside `window`.
///
/// Every day of the window gets an entry, empty when nothing covers it, so a
/// grid can render straight from the map. A multi-day instance is listed on
/// each covered day that lies in the window; within a day, instances keep
/// their input order.
#[must_use]
pub fn group_by_day(instances: &[EventInstance], window: &DateWindow) -> DaySchedule {
    let mut schedule: DaySchedule = window.days().map(|day| (day, Vec::new())).collect();

    for instance in instances {
        let first = instance.start_date.max(window.start);
        let last = instance.last_date().min(window.end);
        for day in first.iter_days().take_while(|day| *day <= last) {
            if let Some(entries) = schedule.get_mut(&day) {
                entries.push(instance.clone());
            }
        }
    }

    schedule
}
