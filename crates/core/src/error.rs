use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown async style or trigger: {0}")]
    UnknownStyle(String),

    #[error("Invalid mood: {0} (expected 'happy' or 'unhappy')")]
    InvalidMood(String),
}

/// Mom said no. The message is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DecisionError {
    pub message: String,
}

impl DecisionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CoreError::UnknownStyle("run9".to_string());
        assert!(error.to_string().contains("run9"));
    }

    #[test]
    fn test_decision_error_display_is_verbatim() {
        let error = DecisionError::new("Mom is not happy.");
        assert_eq!(error.to_string(), "Mom is not happy.");
        assert_eq!(error.message, "Mom is not happy.");
    }
}
