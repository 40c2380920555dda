use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("unknown decision type: {0}")]
    UnknownDecisionType(String),

    #[error("required field missing or invalid: {field}")]
    Validation { field: String },

    #[error("malformed {decision_type} data: {reason}")]
    MalformedData {
        decision_type: String,
        reason: String,
    },

    #[error("form does not match decision type: expected {expected}, got {got}")]
    FormMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DecisionError {
    /// Shorthand for a validation failure naming the offending field.
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }
}
