/// Upper bound on recurrence steps walked per template and call.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Spans at or above this many days are not replicated onto instances.
pub const DEFAULT_MULTI_DAY_LIMIT_DAYS: i64 = 30;

/// Jump applied to unrecognized recurrence kinds so the walk leaves any window.
pub const SENTINEL_YEARS: u32 = 100;

/// Calendar date layout used on the wire and inside instance ids.
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Instance id building blocks: `{template}-instance-{date}` / `instance-{date}`
pub const INSTANCE_ID_COMPONENT: &str = "instance";
pub const INSTANCE_ID_PREFIX: &str = const_str::concat!(INSTANCE_ID_COMPONENT, "-");
pub const INSTANCE_ID_INFIX: &str = const_str::concat!("-", INSTANCE_ID_PREFIX);

/// Prefix for environment overrides, e.g. `SCHEDULEDESK_EXPANSION__MAX_ITERATIONS`.
pub const ENV_PREFIX: &str = "SCHEDULEDESK";
