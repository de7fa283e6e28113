//! Console stand-in for a platform audio engine
//!
//! Produces no sound. Play commands are logged and remembered so the console
//! can show what would be audible.

use memora_core::{PlayRequest, TrackId};
use memora_playback::AudioEngine;

#[derive(Debug, Default)]
pub struct LoggingEngine {
    playing: Option<TrackId>,
    paused: bool,
    plays: usize,
}

impl LoggingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play commands received so far
    pub fn plays(&self) -> usize {
        self.plays
    }

    pub fn playing(&self) -> Option<&TrackId> {
        self.playing.as_ref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl AudioEngine for LoggingEngine {
    fn play(&mut self, request: PlayRequest) {
        tracing::info!(
            track_id = %request.id,
            url = %request.url,
            "Now playing: {} - {}",
            request.title,
            request.artist
        );
        self.playing = Some(request.id);
        self.paused = false;
        self.plays += 1;
    }

    fn pause(&mut self) {
        if self.playing.is_none() {
            tracing::debug!("Pause ignored, nothing loaded");
            return;
        }
        self.paused = true;
        tracing::info!("Paused");
    }

    fn resume(&mut self) {
        if self.playing.is_none() || !self.paused {
            tracing::debug!("Resume ignored");
            return;
        }
        self.paused = false;
        tracing::info!("Resumed");
    }
}
