use thiserror::Error;

#[derive(Debug, Error)]
pub enum BonusError {
    #[error("Unknown grade: '{name}' is not in the grade profile table")]
    UnknownGrade { name: String },

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BonusError {
    fn from(e: serde_json::Error) -> Self {
        BonusError::SerializationError(e.to_string())
    }
}
