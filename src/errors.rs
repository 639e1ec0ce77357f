use thiserror::Error;
use uuid::Uuid;

/// Error type covering store mutations, formatting, and persistence failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown currency code: {0}")]
    InvalidCurrency(String),
    #[error("Invalid month key: {0}")]
    InvalidMonthKey(String),
    #[error("No record with id {0}")]
    UnknownId(Uuid),
    #[error("Category {0} still has transactions")]
    CategoryInUse(Uuid),
}
