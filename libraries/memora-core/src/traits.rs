/// Core traits for Memora
use crate::error::Result;
use crate::types::Track;

/// Supplier of candidate queues
///
/// Implementers produce an ordered list of tracks, e.g. the rows of a memory
/// returned by the backend or the audio files of a local media directory.
/// The order returned is the order the tracks will be played in.
pub trait TrackSource {
    /// Load the ordered track list
    ///
    /// # Errors
    /// Returns an error if the underlying listing cannot be read or parsed
    fn tracks(&self) -> Result<Vec<Track>>;

    /// Human-readable description, used in log lines
    fn describe(&self) -> String {
        "track source".to_string()
    }
}

impl<T: TrackSource + ?Sized> TrackSource for Box<T> {
    fn tracks(&self) -> Result<Vec<Track>> {
        (**self).tracks()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
