use chrono::NaiveDate;
use scheduledesk_core::constants::{INSTANCE_ID_INFIX, INSTANCE_ID_PREFIX};
use scheduledesk_core::util::date::{days_between, format_calendar_date};
use serde::{Deserialize, Serialize};

use super::recurrence::{MonthlyRecurrence, Recurrence};
use super::template::{EventTemplate, Payload};

/// Payload keys that would collide with the annotations added to an instance.
const ANNOTATION_KEYS: [&str; 3] = ["isRecurring", "isInstance", "originalEventId"];

/// ## Summary
/// One dated occurrence of an [`EventTemplate`].
///
/// Generated occurrences carry a deterministic id, a back-reference to
/// their template and always an end date. A non-recurring template is passed
/// through as a single value with `is_instance == false`, its own id and its
/// own (possibly absent) end date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInstance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub is_recurring: bool,
    pub is_instance: bool,
    /// Id of the template this occurrence was generated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Recurrence::is_none")]
    pub recurrence: Recurrence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_recurrence: Option<MonthlyRecurrence>,
    #[serde(flatten)]
    pub payload: Payload,
}

/// ## Summary
/// Builds the id of the occurrence of `template_id` starting on `date`.
///
/// `{template_id}-instance-{YYYY-MM-DD}`, or `instance-{YYYY-MM-DD}` for a
/// template without an id.
#[must_use]
pub fn instance_id(template_id: Option<&str>, date: NaiveDate) -> String {
    let date = format_calendar_date(date);
    match template_id {
        Some(template_id) => format!("{template_id}{INSTANCE_ID_INFIX}{date}"),
        None => format!("{INSTANCE_ID_PREFIX}{date}"),
    }
}

fn copied_payload(template: &EventTemplate) -> Payload {
    let mut payload = template.payload.clone();
    for key in ANNOTATION_KEYS {
        payload.remove(key);
    }
    payload
}

impl EventInstance {
    /// Annotates a non-recurring template without generating anything.
    #[must_use]
    pub fn passthrough(template: &EventTemplate) -> Self {
        Self {
            id: template.id.clone(),
            start_date: template.start_date,
            end_date: template.end_date,
            is_recurring: false,
            is_instance: false,
            original_event_id: None,
            recurrence: template.recurrence.clone(),
            monthly_recurrence: template.monthly_recurrence,
            payload: copied_payload(template),
        }
    }

    /// Builds the occurrence of `template` spanning `start_date..=end_date`.
    #[must_use]
    pub fn occurrence(
        template: &EventTemplate,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: Some(instance_id(template.id.as_deref(), start_date)),
            start_date,
            end_date: Some(end_date),
            is_recurring: template.is_recurring(),
            is_instance: true,
            original_event_id: template.id.clone(),
            recurrence: template.recurrence.clone(),
            monthly_recurrence: template.monthly_recurrence,
            payload: copied_payload(template),
        }
    }

    /// Last day of the occurrence; the start date when there is no end date.
    #[must_use]
    pub fn last_date(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }

    #[must_use]
    pub fn duration_days(&self) -> i64 {
        days_between(self.start_date, self.last_date())
    }

    /// Whether the occurrence covers `date` (start and end inclusive).
    #[must_use]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.last_date()
    }

    /// Id of the series this value belongs to: the template id for
    /// generated occurrences, its own id for a passthrough.
    #[must_use]
    pub fn series_id(&self) -> Option<&str> {
        if self.is_instance {
            self.original_event_id.as_deref()
        } else {
            self.id.as_deref()
        }
    }
}
