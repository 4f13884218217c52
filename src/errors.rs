use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common trip-processing failures.
#[derive(Debug, Error)]
pub enum TripError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("From date {from} is after to date {to}")]
    DateOrder { from: NaiveDate, to: NaiveDate },
    #[error("Business trip {0} is already submitted")]
    AlreadySubmitted(Uuid),
    #[error("No file found with URL: {0}")]
    AttachmentNotFound(String),
    #[error("Host document store failed: {0}")]
    Host(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TripError>;
