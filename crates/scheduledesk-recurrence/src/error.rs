use thiserror::Error;

/// Errors raised while reading templates; expansion itself never fails.
#[derive(Error, Debug)]
pub enum RecurrenceError {
    #[error("Malformed template JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RecurrenceResult<T> = std::result::Result<T, RecurrenceError>;
