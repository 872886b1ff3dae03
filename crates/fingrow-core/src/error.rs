use thiserror::Error;

#[derive(Debug, Error)]
pub enum FingrowError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl FingrowError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        FingrowError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(context: &str) -> Self {
        FingrowError::Overflow {
            context: context.into(),
        }
    }
}

impl From<serde_json::Error> for FingrowError {
    fn from(e: serde_json::Error) -> Self {
        FingrowError::SerializationError(e.to_string())
    }
}
