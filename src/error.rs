use thiserror::Error;

pub type Result<T> = std::result::Result<T, TesseraError>;

#[derive(Debug, Error)]
pub enum TesseraError {
    #[error("Invalid list ID: {0}")]
    InvalidListId(String),

    #[error("Invalid card ID: {0}")]
    InvalidCardId(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
