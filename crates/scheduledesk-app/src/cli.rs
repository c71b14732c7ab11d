use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use scheduledesk_core::config::{ExpansionConfig, WeekAndDayMode};
use scheduledesk_core::error::CoreResult;
use scheduledesk_core::types::DateWindow;
use scheduledesk_core::util::date::parse_calendar_date;

#[derive(Debug, Parser)]
#[command(name = "scheduledesk")]
#[command(about = "Expand recurring availability templates into dated instances")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file path
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every instance starting inside the window
    Expand(ExpandArgs),
    /// Print the instances covering each day of the window
    Days(ExpandArgs),
}

impl Command {
    #[must_use]
    pub const fn args(&self) -> &ExpandArgs {
        match self {
            Self::Expand(args) | Self::Days(args) => args,
        }
    }
}

#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// JSON file holding a template or an array of templates
    #[arg(long)]
    pub templates: PathBuf,

    /// First day of the window (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub from: NaiveDate,

    /// Last day of the window, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub to: NaiveDate,

    /// Per-template iteration cap (overrides config)
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// How week-and-day monthly templates advance (overrides config)
    #[arg(long, value_enum)]
    pub week_and_day: Option<WeekAndDayArg>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeekAndDayArg {
    Approximate,
    NthWeekday,
}

impl From<WeekAndDayArg> for WeekAndDayMode {
    fn from(value: WeekAndDayArg) -> Self {
        match value {
            WeekAndDayArg::Approximate => Self::Approximate,
            WeekAndDayArg::NthWeekday => Self::NthWeekday,
        }
    }
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(value).map_err(|e| e.to_string())
}

impl ExpandArgs {
    #[must_use]
    pub const fn window(&self) -> DateWindow {
        DateWindow::new(self.from, self.to)
    }

    /// ## Summary
    /// Applies the command-line overrides on top of the loaded expansion
    /// settings.
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` if the result is unusable, e.g.
    /// `--max-iterations 0`.
    pub fn apply_overrides(&self, mut config: ExpansionConfig) -> CoreResult<ExpansionConfig> {
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(mode) = self.week_and_day {
            config.week_and_day = mode.into();
        }
        config.validate()?;
        Ok(config)
    }
}
