use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecurrenceError {
    #[error("Invalid transaction date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecurrenceError>;
