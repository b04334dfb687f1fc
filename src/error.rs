use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CounterError {
    #[error("invalid numeric input for {field}: {value:?}")]
    InvalidNumericInput { field: &'static str, value: String },
    #[error("unknown action code: {0:?}")]
    UnknownAction(String),
}

impl CounterError {
    pub fn invalid(field: &'static str, value: impl ToString) -> Self {
        CounterError::InvalidNumericInput {
            field,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_numeric_display() {
        let err = CounterError::invalid("initial_decks", "abc");
        assert_eq!(
            err.to_string(),
            "invalid numeric input for initial_decks: \"abc\""
        );
    }

    #[test]
    fn test_unknown_action_display() {
        let err = CounterError::UnknownAction("x".to_string());
        assert!(err.to_string().contains("unknown action"));
    }
}
