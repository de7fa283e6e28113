/// Core error types for Memora
use thiserror::Error;

/// Result type alias using `MemoraError`
pub type Result<T> = std::result::Result<T, MemoraError>;

/// Core error type for Memora
///
/// Only track sources and configuration can fail. Queue operations never
/// return errors.
#[derive(Error, Debug)]
pub enum MemoraError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of thing that was looked up
        entity: String,
        /// Identifier that was not found
        id: String,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl MemoraError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
