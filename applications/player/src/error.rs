/// Player error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlayerError>;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Track source error: {0}")]
    Source(#[from] memora_core::MemoraError),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Audio engine event channel closed")]
    EngineClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
