//! Memora console player
//!
//! Loads a track list, hands it to a [`memora_playback::QueueManager`] and
//! drives the queue from stdin.

pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod sources;

pub use config::PlayerConfig;
pub use console::{Command, Console};
pub use engine::LoggingEngine;
pub use error::{PlayerError, Result};
