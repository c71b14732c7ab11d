use std::path::Path;

use anyhow::Result;
use config::{Config, Map};
use serde::Deserialize;

use crate::constants::{DEFAULT_MAX_ITERATIONS, DEFAULT_MULTI_DAY_LIMIT_DAYS, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub expansion: ExpansionConfig,
    pub logging: LoggingConfig,
}

/// How `EveryMonth` / `WeekAndDay` templates advance between occurrences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekAndDayMode {
    /// Advance one calendar month, keeping the day of month.
    #[default]
    Approximate,
    /// Recompute the same ordinal weekday ("2nd Tuesday") in each month.
    NthWeekday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ExpansionConfig {
    pub max_iterations: u32,
    pub multi_day_limit_days: i64,
    #[serde(default)]
    pub week_and_day: WeekAndDayMode,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            multi_day_limit_days: DEFAULT_MULTI_DAY_LIMIT_DAYS,
            week_and_day: WeekAndDayMode::default(),
        }
    }
}

impl ExpansionConfig {
    /// ## Summary
    /// Checks that the limits are usable.
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` for a zero iteration cap or a
    /// non-positive multi-day limit.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_iterations == 0 {
            return Err(CoreError::ValidationError(
                "expansion.max_iterations must be at least 1".to_string(),
            ));
        }
        if self.multi_day_limit_days <= 0 {
            return Err(CoreError::ValidationError(format!(
                "expansion.multi_day_limit_days must be positive, got {}",
                self.multi_day_limit_days
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and an
    /// optional TOML file into a `Settings`.
    ///
    /// Environment variables use the `SCHEDULEDESK_` prefix and `__` between
    /// nested keys, e.g. `SCHEDULEDESK_EXPANSION__MAX_ITERATIONS=200`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it or
    /// validating it fails.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_with_env(file, None)
    }

    /// ## Summary
    /// Same as [`Settings::load`], but reads `SCHEDULEDESK_*` variables from
    /// `env` instead of the process environment when it is `Some`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it or
    /// validating it fails.
    pub fn load_with_env(file: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config.toml").required(false),
        };

        let settings = Config::builder()
            .set_default("expansion.max_iterations", i64::from(DEFAULT_MAX_ITERATIONS))?
            .set_default("expansion.multi_day_limit_days", DEFAULT_MULTI_DAY_LIMIT_DAYS)?
            .set_default("expansion.week_and_day", "approximate")?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(file_source)
            // Environment wins over the file
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.expansion.validate()?;
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables, a `.env` file and an
/// optional config file.
///
/// ## Errors
/// Returns an error if loading, deserializing or validating the configuration fails.
pub fn load_config(file: Option<&Path>) -> Result<Settings> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    Settings::load(file)
}
