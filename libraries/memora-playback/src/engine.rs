//! Audio engine abstraction
//!
//! The queue never decodes or outputs audio. It hands a [`PlayRequest`] to
//! whatever engine the platform provides (a mobile playback plugin, a desktop
//! output stream) and reacts to the engine's terminal events.

use memora_core::PlayRequest;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

/// Platform-agnostic audio engine
///
/// All commands are fire-and-forget: they must return promptly and must not
/// wait for playback to start. Implementations must not block on the engine
/// event channel from inside these methods, since the queue listener holds
/// the queue lock while calling them.
pub trait AudioEngine: Send {
    /// Start playing a track, replacing whatever is playing
    fn play(&mut self, request: PlayRequest);

    /// Pause the current track
    fn pause(&mut self);

    /// Resume the current track
    fn resume(&mut self);
}

/// Events emitted by an audio engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// The current track played to its end
    TrackEnded,

    /// The engine failed to load or play a resource
    Error {
        /// Error message
        message: String,
    },
}

/// Command observed by a [`RecordingEngine`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Play(PlayRequest),
    Pause,
    Resume,
}

/// Engine that records the commands it receives
///
/// Clones share the same log, so a test can keep one clone and hand the
/// other to the queue manager.
#[derive(Debug, Clone, Default)]
pub struct RecordingEngine {
    commands: Arc<Mutex<Vec<EngineCommand>>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received so far, oldest first
    pub fn commands(&self) -> Vec<EngineCommand> {
        self.commands
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Ids of the tracks that were asked to play, oldest first
    pub fn played_ids(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .filter_map(|command| match command {
                EngineCommand::Play(request) => Some(request.id.as_str().to_string()),
                EngineCommand::Pause | EngineCommand::Resume => None,
            })
            .collect()
    }

    /// Most recent play command
    pub fn last_played(&self) -> Option<PlayRequest> {
        self.commands()
            .into_iter()
            .rev()
            .find_map(|command| match command {
                EngineCommand::Play(request) => Some(request),
                EngineCommand::Pause | EngineCommand::Resume => None,
            })
    }

    /// Forget all recorded commands
    pub fn clear(&self) {
        self.commands
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn record(&self, command: EngineCommand) {
        self.commands
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(command);
    }
}

impl AudioEngine for RecordingEngine {
    fn play(&mut self, request: PlayRequest) {
        self.record(EngineCommand::Play(request));
    }

    fn pause(&mut self) {
        self.record(EngineCommand::Pause);
    }

    fn resume(&mut self) {
        self.record(EngineCommand::Resume);
    }
}
