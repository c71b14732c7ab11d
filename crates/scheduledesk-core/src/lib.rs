//! Shared configuration, errors and calendar-date helpers for ScheduleDesk.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
