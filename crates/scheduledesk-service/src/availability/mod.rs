//! Team-member availability: template storage, expansion and day grouping.

pub mod calendar;
pub mod repository;
pub mod service;

pub use calendar::{DaySchedule, group_by_day};
pub use repository::{InMemoryTemplateRepository, TemplateRepository};
pub use service::AvailabilityService;
