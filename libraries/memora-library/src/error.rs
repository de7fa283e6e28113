//! Error types for track sources

use memora_core::MemoraError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid track list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, LibraryError>;

impl From<LibraryError> for MemoraError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::Io(e) => MemoraError::Io(e),
            LibraryError::Parse(e) => MemoraError::Serialization(e),
            LibraryError::FileNotFound(path) => MemoraError::not_found("File", path),
            LibraryError::InvalidPath(msg) => MemoraError::InvalidInput(msg),
        }
    }
}
