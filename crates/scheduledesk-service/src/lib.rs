//! Availability services built on the recurrence expander.

pub mod availability;
pub mod error;
