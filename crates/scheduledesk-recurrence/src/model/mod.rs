//! Event templates, their recurrence rules and the instances expanded from them.

mod instance;
mod recurrence;
mod template;

pub use instance::{EventInstance, instance_id};
pub use recurrence::{MonthlyRecurrence, Recurrence};
pub use template::{EventTemplate, Payload, parse_templates};
