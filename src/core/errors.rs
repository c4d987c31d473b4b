use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the domain and storage layers.
#[derive(Error, Debug)]
pub enum GiftError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Recipient not found: {0}")]
    RecipientNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, GiftError>;

impl From<std::io::Error> for GiftError {
    fn from(err: std::io::Error) -> Self {
        GiftError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for GiftError {
    fn from(err: serde_json::Error) -> Self {
        GiftError::Storage(err.to_string())
    }
}
