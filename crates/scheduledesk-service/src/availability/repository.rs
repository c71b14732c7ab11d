//! Storage of availability templates.
//!
//! ## Summary
//! Templates live behind an explicit repository object that callers own and
//! pass around, instead of module-level caches. The expander never touches
//! storage; services read templates here and hand them to it.

use parking_lot::RwLock;
use scheduledesk_recurrence::{EventTemplate, parse_templates};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

/// Source and sink of availability templates.
pub trait TemplateRepository: Send + Sync {
    /// ## Summary
    /// Returns every stored template in insertion order.
    ///
    /// ## Errors
    /// Returns an error if the backing store cannot be read.
    fn list(&self) -> ServiceResult<Vec<EventTemplate>>;

    /// ## Summary
    /// Looks a template up by id.
    ///
    /// ## Errors
    /// Returns an error if the backing store cannot be read.
    fn get(&self, id: &str) -> ServiceResult<Option<EventTemplate>>;

    /// ## Summary
    /// Inserts or replaces a template and returns the stored value.
    ///
    /// Provisional templates (no id) are assigned a fresh id.
    ///
    /// ## Errors
    /// Returns an error if the template is invalid or cannot be written.
    fn save(&self, template: EventTemplate) -> ServiceResult<EventTemplate>;

    /// ## Summary
    /// Removes a template, returning whether it existed.
    ///
    /// ## Errors
    /// Returns an error if the backing store cannot be written.
    fn delete(&self, id: &str) -> ServiceResult<bool>;
}

/// Process-local template store.
#[derive(Debug, Default)]
pub struct InMemoryTemplateRepository {
    templates: RwLock<Vec<EventTemplate>>,
}

impl InMemoryTemplateRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Builds a repository holding `templates`, assigning ids where missing.
    ///
    /// ## Errors
    /// Returns an error if a template is rejected by `save`.
    pub fn with_templates<I>(templates: I) -> ServiceResult<Self>
    where
        I: IntoIterator<Item = EventTemplate>,
    {
        let repository = Self::new();
        for template in templates {
            repository.save(template)?;
        }
        Ok(repository)
    }

    /// ## Summary
    /// Builds a repository from a JSON array (or single object) of templates.
    ///
    /// ## Errors
    /// Returns an error if the JSON is malformed or a template is rejected.
    pub fn from_json(json: &str) -> ServiceResult<Self> {
        Self::with_templates(parse_templates(json)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.read().is_empty()
    }
}

impl TemplateRepository for InMemoryTemplateRepository {
    fn list(&self) -> ServiceResult<Vec<EventTemplate>> {
        Ok(self.templates.read().clone())
    }

    fn get(&self, id: &str) -> ServiceResult<Option<EventTemplate>> {
        Ok(self
            .templates
            .read()
            .iter()
            .find(|template| template.id.as_deref() == Some(id))
            .cloned())
    }

    fn save(&self, mut template: EventTemplate) -> ServiceResult<EventTemplate> {
        match template.id.as_deref() {
            Some("") => {
                return Err(ServiceError::ValidationError(
                    "template id must not be empty".to_string(),
                ));
            }
            Some(_) => {}
            None => {
                let id = Uuid::now_v7().to_string();
                tracing::debug!(template_id = %id, "Assigned id to provisional template");
                template.id = Some(id);
            }
        }

        let mut templates = self.templates.write();
        if let Some(existing) = templates
            .iter_mut()
            .find(|existing| existing.id == template.id)
        {
            tracing::trace!(template_id = ?template.id, "Replacing stored template");
            existing.clone_from(&template);
        } else {
            templates.push(template.clone());
        }
        Ok(template)
    }

    fn delete(&self, id: &str) -> ServiceResult<bool> {
        let mut templates = self.templates.write();
        let before = templates.len();
        templates.retain(|template| template.id.as_deref() != Some(id));
        Ok(templates.len() != before)
    }
}
