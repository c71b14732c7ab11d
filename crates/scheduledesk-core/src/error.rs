use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::date::parse_calendar_date;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ValidationError("max_iterations must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: max_iterations must be at least 1"
        );

        let err = parse_calendar_date("2025-02-30").unwrap_err();
        assert!(matches!(err, CoreError::ParseError(_)));
        assert!(err.to_string().starts_with("Parse error: invalid calendar date '2025-02-30'"));
    }
}
