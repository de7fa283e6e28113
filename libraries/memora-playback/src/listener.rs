//! Engine event subscription
//!
//! Bridges engine events onto the shared queue manager from a dedicated
//! thread. The bootstrap code creates the channel, hands the sender to the
//! engine, and owns the returned [`QueueListener`]. The queue itself knows
//! nothing about the subscription.

use crate::{engine::EngineEvent, manager::QueueManager, types::PlaybackConfig};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

/// Queue manager shared between UI readers and the event listener
///
/// Every read-modify-write goes through the mutex, so operations from the UI
/// and from engine callbacks never interleave.
pub type SharedQueueManager = Arc<Mutex<QueueManager>>;

/// Wrap a manager for sharing
pub fn shared(manager: QueueManager) -> SharedQueueManager {
    Arc::new(Mutex::new(manager))
}

/// Lock a shared manager, recovering from a poisoned lock
///
/// Queue operations leave the state consistent at every step, so the data
/// behind a poisoned lock is still valid.
pub fn lock(manager: &SharedQueueManager) -> MutexGuard<'_, QueueManager> {
    manager.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Create the engine event channel sized from config
pub fn engine_channel(config: &PlaybackConfig) -> (Sender<EngineEvent>, Receiver<EngineEvent>) {
    bounded(config.event_buffer.max(1))
}

/// Handle to the running listener thread
#[derive(Debug)]
pub struct QueueListener {
    handle: JoinHandle<usize>,
}

impl QueueListener {
    /// Spawn the listener
    ///
    /// The thread dispatches every event to
    /// [`QueueManager::handle_engine_event`] and exits once all senders have
    /// been dropped.
    pub fn spawn(manager: SharedQueueManager, events: Receiver<EngineEvent>) -> io::Result<Self> {
        let handle = thread::Builder::new()
            .name("memora-queue-listener".to_string())
            .spawn(move || {
                let mut handled = 0;
                for event in &events {
                    tracing::trace!(?event, "Engine event");
                    lock(&manager).handle_engine_event(event);
                    handled += 1;
                }
                tracing::debug!(handled, "Engine event channel closed");
                handled
            })?;

        Ok(Self { handle })
    }

    /// Wait for the listener to finish
    ///
    /// Returns the number of events handled. Only returns after every
    /// sender has been dropped.
    pub fn join(self) -> thread::Result<usize> {
        self.handle.join()
    }

    /// Whether the listener thread has exited
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
