//! Configuration types for queue management

use serde::{Deserialize, Serialize};

/// Configuration for the queue manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Capacity of the engine event channel (default: 32)
    pub event_buffer: usize,

    /// Maximum undrained queue events kept; oldest are dropped (default: 256)
    pub max_pending_events: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            event_buffer: 32,
            max_pending_events: 256,
        }
    }
}
