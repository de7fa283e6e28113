//! Playback queue state
//!
//! Holds the ordered queue, the current-position pointer, and the shuffle
//! snapshot needed to undo a shuffle exactly.

use memora_core::Track;
use rand::Rng;

use crate::shuffle::shuffle_pinned;

/// Pre-shuffle queue and position
///
/// Kept as one value so the queue and index are always present or absent
/// together.
#[derive(Debug, Clone, PartialEq)]
pub struct ShuffleSnapshot {
    /// Queue order before the shuffle
    pub queue: Vec<Track>,

    /// Current index before the shuffle
    pub index: usize,
}

/// Ordered playback queue with a position pointer
///
/// Structure:
/// ```text
/// queue:          [ C, A, D, B ]      (shuffled presentation)
///                   ^
///                   current_index = 0
/// snapshot:       [ A, B, C, D ], index = 2
/// ```
///
/// Invariant: when `current_index` is `Some(i)`, `i < queue.len()`.
#[derive(Debug, Clone, Default)]
pub struct QueueState {
    queue: Vec<Track>,
    current_index: Option<usize>,
    snapshot: Option<ShuffleSnapshot>,
}

impl QueueState {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue wholesale
    ///
    /// Any shuffle snapshot is discarded. An out-of-range `start_index`
    /// leaves the position unset. Returns the track at the new position.
    pub fn replace(&mut self, tracks: Vec<Track>, start_index: usize) -> Option<&Track> {
        self.queue = tracks;
        self.snapshot = None;
        self.current_index = (start_index < self.queue.len()).then_some(start_index);
        self.current()
    }

    /// Move forward one position
    ///
    /// Never wraps. Returns the new current track, or `None` when nothing moved.
    pub fn advance(&mut self) -> Option<&Track> {
        let index = self.current_index?;
        let next = index + 1;
        if next >= self.queue.len() {
            return None;
        }

        self.current_index = Some(next);
        self.queue.get(next)
    }

    /// Move back one position
    ///
    /// Never wraps. Returns the new current track, or `None` when nothing moved.
    pub fn retreat(&mut self) -> Option<&Track> {
        let prev = self.current_index?.checked_sub(1)?;
        debug_assert!(prev < self.queue.len());

        self.current_index = Some(prev);
        self.queue.get(prev)
    }

    /// Shuffle everything except the current track, which moves to the front
    ///
    /// Returns `false` (and changes nothing) when the queue is empty or no
    /// track is current. The snapshot always records the queue and index as
    /// they were just before this call, even when already shuffled.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(index) = self.current_index else {
            return false;
        };
        debug_assert!(index < self.queue.len());

        let shuffled = shuffle_pinned(&self.queue, index, rng);
        let previous = std::mem::replace(&mut self.queue, shuffled);

        self.snapshot = Some(ShuffleSnapshot {
            queue: previous,
            index,
        });
        self.current_index = Some(0);
        true
    }

    /// Restore the pre-shuffle order
    ///
    /// The current track is located in the restored queue by id, not by
    /// position; if it cannot be found the position falls back to 0.
    /// Returns `false` when the queue is not shuffled.
    pub fn unshuffle(&mut self) -> bool {
        let Some(snapshot) = self.snapshot.take() else {
            return false;
        };

        let current_id = self
            .queue
            .get(self.current_index.unwrap_or(0))
            .map(|track| track.id.clone());

        let restored = current_id
            .and_then(|id| snapshot.queue.iter().position(|track| track.id == id))
            .unwrap_or(0);

        self.queue = snapshot.queue;
        self.current_index = (!self.queue.is_empty()).then_some(restored);
        true
    }

    /// All tracks in playback order
    pub fn tracks(&self) -> &[Track] {
        &self.queue
    }

    /// Current position, if a track is active
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Track at the current position
    pub fn current(&self) -> Option<&Track> {
        self.current_index.and_then(|i| self.queue.get(i))
    }

    /// Whether the queue is a shuffled presentation of some original order
    pub fn is_shuffled(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Pre-shuffle snapshot, present iff shuffled
    pub fn snapshot(&self) -> Option<&ShuffleSnapshot> {
        self.snapshot.as_ref()
    }

    /// Total number of tracks in queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether a following track exists
    pub fn has_next(&self) -> bool {
        self.current_index.is_some_and(|i| i + 1 < self.queue.len())
    }

    /// Whether a preceding track exists
    pub fn has_previous(&self) -> bool {
        self.current_index.is_some_and(|i| i > 0)
    }
}
