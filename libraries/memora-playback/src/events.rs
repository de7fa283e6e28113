//! Queue Events
//!
//! Event-based communication for UI synchronization. Readers (now-playing
//! views, next/previous buttons, the shuffle indicator) drain these instead of
//! polling the whole queue.

use serde::{Deserialize, Serialize};

/// Events emitted by the queue manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueEvent {
    /// A new queue was loaded
    QueueReplaced {
        /// New queue length
        length: usize,
    },

    /// The current position changed
    ///
    /// Emitted on every index movement, including the move to 0 when shuffle
    /// pins the current track.
    CurrentChanged {
        /// New index (None when no track is active)
        index: Option<usize>,
        /// ID of the track at that index
        track_id: Option<String>,
    },

    /// Shuffle was engaged or undone; the queue order changed
    ShuffleChanged {
        /// Whether the queue is now shuffled
        shuffled: bool,
    },
}
