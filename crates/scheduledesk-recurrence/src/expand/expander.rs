//! Recurrence expansion of availability templates.
//!
//! This module walks a template's series forward from its anchor date and
//! materializes the occurrences that fall inside a display window.

use chrono::{Days, NaiveDate};
use scheduledesk_core::config::{ExpansionConfig, WeekAndDayMode};
use scheduledesk_core::types::DateWindow;

use super::step::Step;
use crate::model::{EventInstance, EventTemplate};

/// ## Summary
/// Expands availability templates into dated instances.
///
/// The expander holds only its limits, so one value can be shared freely
/// between callers. Expansion never fails: malformed or stalling rules
/// degrade to fewer (or zero) instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecurrenceExpander {
    config: ExpansionConfig,
}

impl RecurrenceExpander {
    #[must_use]
    pub const fn new(config: ExpansionConfig) -> Self {
        Self { config }
    }

    /// Sets the maximum number of steps walked per template.
    #[must_use]
    pub const fn with_max_iterations(mut self, max: u32) -> Self {
        self.config.max_iterations = max;
        self
    }

    /// Sets how `WeekAndDay` monthly templates advance.
    #[must_use]
    pub const fn with_week_and_day(mut self, mode: WeekAndDayMode) -> Self {
        self.config.week_and_day = mode;
        self
    }

    /// ## Summary
    /// Expands one template over `window`.
    ///
    /// A non-recurring template is returned as a single passthrough value
    /// whatever the window. Otherwise the series is walked from the anchor,
    /// at most `max_iterations` steps, and every occurrence starting inside
    /// the window is emitted in date order.
    #[must_use]
    pub fn expand_one(&self, template: &EventTemplate, window: &DateWindow) -> Vec<EventInstance> {
        if !template.is_recurring() {
            return vec![EventInstance::passthrough(template)];
        }

        let step = Step::for_template(template, self.config.week_and_day);
        let instances = self.walk(template, *window, step);

        tracing::debug!(
            template_id = ?template.id,
            recurrence = %template.recurrence,
            window = %window,
            instances = instances.len(),
            "Expanded recurring template"
        );
        instances
    }

    /// ## Summary
    /// Expands every template over `window`.
    ///
    /// Results keep template input order, then occurrence order within each
    /// template. Overlaps between templates are left to the caller.
    #[must_use]
    pub fn expand_all<'a, I>(&self, templates: I, window: &DateWindow) -> Vec<EventInstance>
    where
        I: IntoIterator<Item = &'a EventTemplate>,
    {
        templates
            .into_iter()
            .flat_map(|template| self.expand_one(template, window))
            .collect()
    }

    /// Days replicated onto each occurrence, `None` for single-day output.
    fn replicated_span(&self, template: &EventTemplate) -> Option<u64> {
        let duration = template.duration_days();
        if duration > 0 && duration < self.config.multi_day_limit_days {
            u64::try_from(duration).ok()
        } else {
            None
        }
    }

    fn end_date(start_date: NaiveDate, span: Option<u64>) -> NaiveDate {
        span.and_then(|days| start_date.checked_add_days(Days::new(days)))
            .unwrap_or(start_date)
    }

    fn walk(
        &self,
        template: &EventTemplate,
        window: DateWindow,
        step: Step,
    ) -> Vec<EventInstance> {
        let mut instances = Vec::new();
        if window.is_empty() {
            return instances;
        }

        let anchor = template.start_date;
        let span = self.replicated_span(template);
        let mut current = anchor;
        let mut steps_taken: u32 = 0;

        while current <= window.end {
            if steps_taken >= self.config.max_iterations {
                tracing::trace!(
                    template_id = ?template.id,
                    max_iterations = self.config.max_iterations,
                    "Iteration cap reached, truncating series"
                );
                break;
            }
            steps_taken += 1;

            if window.contains(current) {
                instances.push(EventInstance::occurrence(
                    template,
                    current,
                    Self::end_date(current, span),
                ));
            }

            let Some(next) = step.next(anchor, current, steps_taken) else {
                tracing::trace!(template_id = ?template.id, "Series left the calendar range");
                break;
            };
            if next <= current {
                tracing::warn!(
                    template_id = ?template.id,
                    current = %current,
                    next = %next,
                    "Recurrence step did not advance, stopping series"
                );
                break;
            }
            current = next;
        }

        instances
    }
}

/// ## Summary
/// Expands one template between `window_start` and `window_end` (inclusive)
/// with the default limits.
#[must_use]
pub fn expand_one(
    template: &EventTemplate,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<EventInstance> {
    RecurrenceExpander::default().expand_one(template, &DateWindow::new(window_start, window_end))
}

/// ## Summary
/// Expands all templates between `window_start` and `window_end` (inclusive)
/// with the default limits.
#[must_use]
pub fn expand_all(
    templates: &[EventTemplate],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<EventInstance> {
    RecurrenceExpander::default().expand_all(templates, &DateWindow::new(window_start, window_end))
}
