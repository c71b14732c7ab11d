use scheduledesk_core::config::ExpansionConfig;
use scheduledesk_core::types::DateWindow;
use scheduledesk_recurrence::{EventInstance, EventTemplate, RecurrenceExpander};

use super::calendar::{DaySchedule, group_by_day};
use super::repository::TemplateRepository;
use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Expands the templates held by a repository for calendar views.
pub struct AvailabilityService<R> {
    repository: R,
    expander: RecurrenceExpander,
}

impl<R: TemplateRepository> AvailabilityService<R> {
    #[must_use]
    pub const fn new(repository: R, config: ExpansionConfig) -> Self {
        Self {
            repository,
            expander: RecurrenceExpander::new(config),
        }
    }

    /// ## Summary
    /// Expands every stored template over `window`.
    ///
    /// ## Errors
    /// Returns an error if the repository cannot be read.
    #[tracing::instrument(skip(self, window), fields(window = %window))]
    pub fn expand_window(&self, window: &DateWindow) -> ServiceResult<Vec<EventInstance>> {
        let templates = self.repository.list()?;
        let instances = self.expander.expand_all(&templates, window);
        tracing::debug!(
            templates = templates.len(),
            days = window.len_days(),
            instances = instances.len(),
            "Expanded availability window"
        );
        Ok(instances)
    }

    /// ## Summary
    /// Expands a single series over `window`, e.g. before editing it as a whole.
    ///
    /// ## Errors
    /// Returns `ServiceError::NotFound` if no template has `template_id`.
    #[tracing::instrument(skip(self, window), fields(window = %window))]
    pub fn expand_series(
        &self,
        template_id: &str,
        window: &DateWindow,
    ) -> ServiceResult<Vec<EventInstance>> {
        let template = self.template(template_id)?;
        Ok(self.expander.expand_one(&template, window))
    }

    /// ## Summary
    /// Resolves the template an instance was generated from.
    ///
    /// ## Errors
    /// Returns `ServiceError::ValidationError` if the instance carries no
    /// series id, or `ServiceError::NotFound` if the template is gone.
    pub fn series_of(&self, instance: &EventInstance) -> ServiceResult<EventTemplate> {
        let Some(series_id) = instance.series_id() else {
            return Err(ServiceError::ValidationError(format!(
                "instance starting {} has no series id",
                instance.start_date
            )));
        };
        self.template(series_id)
    }

    /// ## Summary
    /// Expands every stored template over `window`, grouped per calendar day.
    ///
    /// ## Errors
    /// Returns an error if the repository cannot be read.
    pub fn day_schedule(&self, window: &DateWindow) -> ServiceResult<DaySchedule> {
        let instances = self.expand_window(window)?;
        Ok(group_by_day(&instances, window))
    }

    fn template(&self, template_id: &str) -> ServiceResult<EventTemplate> {
        self.repository
            .get(template_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("template {template_id}")))
    }
}
