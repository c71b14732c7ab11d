//! Expansion of recurring templates into dated instances.

mod expander;
mod step;

pub use expander::{RecurrenceExpander, expand_all, expand_one};
