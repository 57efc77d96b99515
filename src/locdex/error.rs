use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum LocdexError {
    #[error("{0}")]
    Validation(String),

    #[error("Location not found: {0}")]
    NotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl LocdexError {
    pub fn validation(msg: impl Into<String>) -> Self {
        LocdexError::Validation(msg.into())
    }

    /// True for the errors a user action can recover from with a message.
    pub fn is_user_error(&self) -> bool {
        matches!(self, LocdexError::Validation(_) | LocdexError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, LocdexError>;
