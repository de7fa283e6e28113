//! Memora - Playback Queue Management
//!
//! Platform-agnostic playback queue for Memora.
//!
//! This crate provides:
//! - A single authoritative queue with a current-position pointer
//! - Next/previous navigation that never wraps
//! - Shuffle that pins the current track and is exactly reversible
//! - Synchronization with an external audio engine (play commands out,
//!   track-ended events in)
//! - Queue events for UI synchronization
//!
//! # Architecture
//!
//! `memora-playback` does no audio work. The platform supplies an
//! [`AudioEngine`]; the queue issues fire-and-forget play commands to it and
//! advances when the engine reports that a track ended.
//!
//! # Example: Basic Queue
//!
//! ```rust
//! use memora_core::Track;
//! use memora_playback::{PlaybackConfig, QueueManager, RecordingEngine};
//!
//! let engine = RecordingEngine::new();
//! let mut manager = QueueManager::new(Box::new(engine.clone()), PlaybackConfig::default());
//!
//! let tracks = vec![
//!     Track::new("a", "https://cdn.example.com/a.mp3", "Track A"),
//!     Track::new("b", "https://cdn.example.com/b.mp3", "Track B"),
//! ];
//! manager.set_queue(tracks, 0);
//! manager.play_next_track();
//!
//! assert_eq!(manager.current_index(), Some(1));
//! assert_eq!(engine.played_ids(), vec!["a", "b"]);
//! ```
//!
//! # Example: Engine Events
//!
//! ```rust
//! use memora_core::Track;
//! use memora_playback::{
//!     engine_channel, lock, shared, EngineEvent, PlaybackConfig, QueueListener, QueueManager,
//!     RecordingEngine,
//! };
//! use std::sync::Arc;
//!
//! let config = PlaybackConfig::default();
//! let manager = shared(QueueManager::new(Box::new(RecordingEngine::new()), config.clone()));
//! lock(&manager).set_queue(vec![
//!     Track::new("a", "/music/a.mp3", "A"),
//!     Track::new("b", "/music/b.mp3", "B"),
//! ], 0);
//!
//! // Bootstrap owns the subscription; the engine owns the sender
//! let (events_tx, events_rx) = engine_channel(&config);
//! let listener = QueueListener::spawn(Arc::clone(&manager), events_rx).unwrap();
//!
//! events_tx.send(EngineEvent::TrackEnded).unwrap();
//! drop(events_tx);
//! listener.join().unwrap();
//!
//! assert_eq!(lock(&manager).current_index(), Some(1));
//! ```

pub mod engine;
mod events;
mod listener;
mod manager;
mod queue;
pub mod shuffle;
pub mod types;

// Public exports
pub use engine::{AudioEngine, EngineCommand, EngineEvent, RecordingEngine};
pub use events::QueueEvent;
pub use listener::{engine_channel, lock, shared, QueueListener, SharedQueueManager};
pub use manager::QueueManager;
pub use queue::{QueueState, ShuffleSnapshot};
pub use types::PlaybackConfig;
