//! Normalization of AI-suggested tracks
//!
//! Suggestions arrive with sparse metadata. Blanks are filled before the
//! tracks enter a queue so every row renders the same way.

use crate::json::JsonTrackSource;
use crate::local::DEFAULT_ARTWORK_URL;
use memora_core::{Artwork, Track, TrackSource, UserId};
use std::path::PathBuf;

/// Memory name given to suggestions that don't belong to one
pub const SUGGESTIONS_MEMORY: &str = "AI Suggestions";

pub const UNKNOWN_ALBUM: &str = "Unknown Album";
pub const UNKNOWN_GENRE: &str = "Unknown Genre";

/// Fill in missing memory, album, genre and artwork, and attribute the
/// track to `user_id`
pub fn with_suggestion_defaults(mut track: Track, user_id: &UserId) -> Track {
    if track.memory.is_empty() {
        track.memory = SUGGESTIONS_MEMORY.to_string();
    }
    if track.album.as_deref().map_or(true, str::is_empty) {
        track.album = Some(UNKNOWN_ALBUM.to_string());
    }
    if track.genre.as_deref().map_or(true, str::is_empty) {
        track.genre = Some(UNKNOWN_GENRE.to_string());
    }
    if track.artwork.is_none() {
        track.artwork = Some(Artwork::Url(DEFAULT_ARTWORK_URL.to_string()));
    }
    track.user_id = user_id.clone();
    track
}

/// AI-suggested tracks from a JSON list, normalized for `user_id`
#[derive(Debug, Clone)]
pub struct SuggestionSource {
    inner: JsonTrackSource,
    user_id: UserId,
}

impl SuggestionSource {
    pub fn new(inner: JsonTrackSource, user_id: UserId) -> Self {
        Self { inner, user_id }
    }

    pub fn from_path(path: impl Into<PathBuf>, user_id: UserId) -> Self {
        Self::new(JsonTrackSource::from_path(path), user_id)
    }
}

impl TrackSource for SuggestionSource {
    fn tracks(&self) -> memora_core::Result<Vec<Track>> {
        Ok(self
            .inner
            .tracks()?
            .into_iter()
            .map(|t| with_suggestion_defaults(t, &self.user_id))
            .collect())
    }

    fn describe(&self) -> String {
        format!("suggestions from {}", self.inner.describe())
    }
}
