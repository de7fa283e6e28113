//! Queue manager - core orchestration
//!
//! Owns the single authoritative queue, keeps the audio engine in step with
//! it, and provides exactly reversible shuffle.

use crate::{
    engine::{AudioEngine, EngineEvent},
    events::QueueEvent,
    queue::{QueueState, ShuffleSnapshot},
    types::PlaybackConfig,
};
use memora_core::Track;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;

/// Central queue management
///
/// State machine:
/// ```text
///   Empty ──set_queue──▶ Loaded ◀──toggle_shuffle──▶ Shuffled
///     ▲                    │  ▲                         │
///     └────set_queue([])───┘  └────────set_queue────────┘
/// ```
/// `play_next_track`/`play_prev_track` only move the index within `Loaded`
/// or `Shuffled`. There is no terminal state; "stopped" lives in the engine.
///
/// All mutation goes through these methods. Operations never fail: empty or
/// out-of-range conditions are silent no-ops.
pub struct QueueManager {
    state: QueueState,
    engine: Box<dyn AudioEngine>,
    rng: StdRng,
    config: PlaybackConfig,

    // Event queue for UI synchronization
    pending_events: VecDeque<QueueEvent>,
}

impl QueueManager {
    /// Create new queue manager driving `engine`
    pub fn new(engine: Box<dyn AudioEngine>, config: PlaybackConfig) -> Self {
        Self::with_rng(engine, config, StdRng::from_entropy())
    }

    /// Create a queue manager with a caller-supplied shuffle RNG
    pub fn with_rng(engine: Box<dyn AudioEngine>, config: PlaybackConfig, rng: StdRng) -> Self {
        Self {
            state: QueueState::new(),
            engine,
            rng,
            config,
            pending_events: VecDeque::new(),
        }
    }

    // ===== Queue Control =====

    /// Start a new playback session
    ///
    /// Replaces the queue verbatim and cancels any shuffle. If a track exists
    /// at `start_index` it is sent to the engine; otherwise the queue is still
    /// stored but nothing plays and the position stays unset.
    pub fn set_queue(&mut self, tracks: Vec<Track>, start_index: usize) {
        let was_shuffled = self.state.is_shuffled();
        let request = self
            .state
            .replace(tracks, start_index)
            .map(Track::play_request);

        tracing::debug!(
            length = self.state.len(),
            start_index,
            playing = request.is_some(),
            "Queue replaced"
        );

        self.emit(QueueEvent::QueueReplaced {
            length: self.state.len(),
        });
        if was_shuffled {
            self.emit(QueueEvent::ShuffleChanged { shuffled: false });
        }
        self.emit_current_changed();

        if let Some(request) = request {
            self.engine.play(request);
        }
    }

    /// Advance to the next track and play it
    ///
    /// No-op at the last track (no wrap) and when nothing is queued.
    pub fn play_next_track(&mut self) {
        let Some(request) = self.state.advance().map(Track::play_request) else {
            tracing::debug!(index = ?self.state.current_index(), "No next track");
            return;
        };

        tracing::debug!(index = ?self.state.current_index(), track_id = %request.id, "Next track");
        self.emit_current_changed();
        self.engine.play(request);
    }

    /// Go back to the previous track and play it
    ///
    /// No-op at the first track (no wrap) and when nothing is queued.
    pub fn play_prev_track(&mut self) {
        let Some(request) = self.state.retreat().map(Track::play_request) else {
            tracing::debug!(index = ?self.state.current_index(), "No previous track");
            return;
        };

        tracing::debug!(index = ?self.state.current_index(), track_id = %request.id, "Previous track");
        self.emit_current_changed();
        self.engine.play(request);
    }

    // ===== Shuffle =====

    /// Shuffle the queue around the current track
    ///
    /// The current track moves to index 0 and the rest are permuted. Does not
    /// issue a play command: the audible track is unchanged.
    pub fn shuffle_queue(&mut self) {
        if !self.state.shuffle(&mut self.rng) {
            return;
        }

        tracing::debug!(length = self.state.len(), "Queue shuffled");
        self.emit(QueueEvent::ShuffleChanged { shuffled: true });
        self.emit_current_changed();
    }

    /// Toggle shuffle on or off
    ///
    /// Turning shuffle off restores the original order and re-finds the
    /// current track in it by id.
    pub fn toggle_shuffle(&mut self) {
        if !self.state.is_shuffled() {
            self.shuffle_queue();
            return;
        }

        if self.state.unshuffle() {
            tracing::debug!(index = ?self.state.current_index(), "Original order restored");
            self.emit(QueueEvent::ShuffleChanged { shuffled: false });
            self.emit_current_changed();
        }
    }

    // ===== Engine =====

    /// Pause the engine; queue state is untouched
    pub fn pause(&mut self) {
        self.engine.pause();
    }

    /// Resume the engine; queue state is untouched
    pub fn resume(&mut self) {
        self.engine.resume();
    }

    /// React to an engine event
    ///
    /// The end of a track advances the queue. Engine errors are logged only.
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::TrackEnded => self.play_next_track(),
            EngineEvent::Error { message } => {
                tracing::warn!(
                    track_id = ?self.current_track().map(|t| t.id.as_str()),
                    "Audio engine error: {}",
                    message
                );
            }
        }
    }

    // ===== State Queries =====

    /// All tracks in playback order
    pub fn queue(&self) -> &[Track] {
        self.state.tracks()
    }

    /// Current position, if a track is active
    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    /// Track considered "now playing"
    pub fn current_track(&self) -> Option<&Track> {
        self.state.current()
    }

    /// Whether the queue is a shuffled presentation
    pub fn is_shuffled(&self) -> bool {
        self.state.is_shuffled()
    }

    /// Pre-shuffle queue, present iff shuffled
    pub fn original_queue(&self) -> Option<&[Track]> {
        self.state.snapshot().map(|s| s.queue.as_slice())
    }

    /// Pre-shuffle index, present iff shuffled
    pub fn original_index(&self) -> Option<usize> {
        self.state.snapshot().map(|s| s.index)
    }

    /// Pre-shuffle snapshot, present iff shuffled
    pub fn shuffle_snapshot(&self) -> Option<&ShuffleSnapshot> {
        self.state.snapshot()
    }

    /// Get queue length
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Check if there is a next track (enables the skip-forward button)
    pub fn has_next(&self) -> bool {
        self.state.has_next()
    }

    /// Check if there is a previous track (enables the skip-back button)
    pub fn has_previous(&self) -> bool {
        self.state.has_previous()
    }

    /// Active configuration
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events that have been emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<QueueEvent> {
        self.pending_events.drain(..).collect()
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_current_changed(&mut self) {
        let event = QueueEvent::CurrentChanged {
            index: self.state.current_index(),
            track_id: self.state.current().map(|t| t.id.as_str().to_string()),
        };
        self.emit(event);
    }

    fn emit(&mut self, event: QueueEvent) {
        if self.config.max_pending_events == 0 {
            return;
        }
        while self.pending_events.len() >= self.config.max_pending_events {
            self.pending_events.pop_front(); // Drop oldest
        }
        self.pending_events.push_back(event);
    }
}

impl std::fmt::Debug for QueueManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueManager")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("pending_events", &self.pending_events.len())
            .finish_non_exhaustive()
    }
}
