use std::path::Path;

use scheduledesk_core::config::ExpansionConfig;
use scheduledesk_service::availability::{AvailabilityService, InMemoryTemplateRepository};
use serde_json::Value;

use crate::cli::Command;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Loads the templates file into an in-memory repository.
///
/// ## Errors
/// Returns `AppError::Io` if the file cannot be read, or a service error if
/// it does not hold valid templates.
pub fn load_repository(path: &Path) -> AppResult<InMemoryTemplateRepository> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let repository = InMemoryTemplateRepository::from_json(&json)?;
    tracing::debug!(path = %path.display(), templates = repository.len(), "Loaded templates");
    Ok(repository)
}

/// ## Summary
/// Runs `command` against the given expansion settings and returns the JSON
/// document to print.
///
/// ## Errors
/// Returns an error if the overrides are invalid, the templates cannot be
/// loaded, or the output cannot be encoded.
pub fn run(command: &Command, config: ExpansionConfig) -> AppResult<Value> {
    let args = command.args();
    let config = args.apply_overrides(config)?;
    let window = args.window();
    if window.is_empty() {
        tracing::warn!(%window, "Window ends before it starts, nothing to expand");
    }

    let service = AvailabilityService::new(load_repository(&args.templates)?, config);
    let output = match command {
        Command::Expand(_) => serde_json::to_value(service.expand_window(&window)?)?,
        Command::Days(_) => serde_json::to_value(service.day_schedule(&window)?)?,
    };
    Ok(output)
}

/// ## Errors
/// Returns `AppError::Json` if encoding fails.
pub fn render(output: &Value, pretty: bool) -> AppResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    Ok(rendered)
}
