use thiserror::Error;

#[derive(Debug, Error)]
pub enum RatioAnalysisError {
    #[error("Missing year: no statement figures for {year}")]
    MissingYear { year: i32 },

    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RatioAnalysisError {
    fn from(e: serde_json::Error) -> Self {
        RatioAnalysisError::SerializationError(e.to_string())
    }
}
