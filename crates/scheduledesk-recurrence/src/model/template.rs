use chrono::NaiveDate;
use scheduledesk_core::util::date::days_between;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::recurrence::{MonthlyRecurrence, Recurrence};
use crate::error::RecurrenceResult;

/// Application-specific event attributes (event type, time range, assignee,
/// notes, ...) carried through expansion untouched.
pub type Payload = serde_json::Map<String, Value>;

/// ## Summary
/// The master definition of an availability event.
///
/// Only the dates and recurrence fields are interpreted; every other JSON
/// field lands in `payload` and is copied onto each generated instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTemplate {
    /// Absent for provisional templates that have not been saved yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Anchor of the series and its first occurrence.
    pub start_date: NaiveDate,
    /// Last day of the original event when it spans several days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Recurrence::is_none")]
    pub recurrence: Recurrence,
    /// Only meaningful for [`Recurrence::EveryMonth`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_recurrence: Option<MonthlyRecurrence>,
    #[serde(flatten)]
    pub payload: Payload,
}

impl EventTemplate {
    /// Creates a single-day, non-recurring template.
    #[must_use]
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            id: None,
            start_date,
            end_date: None,
            recurrence: Recurrence::None,
            monthly_recurrence: None,
            payload: Payload::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    /// Makes the template repeat every month using the given rule.
    #[must_use]
    pub fn monthly(mut self, rule: MonthlyRecurrence) -> Self {
        self.recurrence = Recurrence::EveryMonth;
        self.monthly_recurrence = Some(rule);
        self
    }

    #[must_use]
    pub fn with_payload_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.recurrence.is_recurring()
    }

    /// Days from `start_date` to `end_date`; 0 without an end date.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        self.end_date
            .map_or(0, |end_date| days_between(self.start_date, end_date))
    }

    /// Monthly rule in effect, defaulting to `ExactDate` when unset.
    #[must_use]
    pub fn monthly_rule(&self) -> MonthlyRecurrence {
        self.monthly_recurrence.unwrap_or_default()
    }
}

/// ## Summary
/// Reads templates from JSON: either an array of templates or a single one.
///
/// ## Errors
/// Returns `RecurrenceError::Json` if the document is not valid JSON or a
/// template lacks a valid `startDate`.
pub fn parse_templates(json: &str) -> RecurrenceResult<Vec<EventTemplate>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<EventTemplate>),
        One(Box<EventTemplate>),
    }

    let templates = match serde_json::from_str::<OneOrMany>(json)? {
        OneOrMany::Many(templates) => templates,
        OneOrMany::One(template) => vec![*template],
    };
    tracing::debug!(count = templates.len(), "Parsed event templates");
    Ok(templates)
}
