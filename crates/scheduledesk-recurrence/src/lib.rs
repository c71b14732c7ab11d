//! Recurrence expansion for availability events.
//!
//! A recurring [`EventTemplate`] is turned into the dated [`EventInstance`]s
//! that fall inside a display window. Expansion is a pure function of its
//! inputs: no storage, no I/O, identical inputs give identical output.

pub mod error;
pub mod expand;
pub mod model;

pub use expand::{RecurrenceExpander, expand_all, expand_one};
pub use model::{
    EventInstance, EventTemplate, MonthlyRecurrence, Payload, Recurrence, instance_id,
    parse_templates,
};
