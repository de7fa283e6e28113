//! Track lists in the backend's JSON shape
//!
//! The backend answers `GET /tracks/:memory/:userId` with an array of track
//! rows using camelCase keys. The same shape is used for exported track
//! lists on disk.

use crate::{LibraryError, Result};
use memora_core::{Track, TrackSource, UserId};
use std::fs;
use std::path::{Path, PathBuf};

/// Track source backed by a JSON track list
#[derive(Debug, Clone)]
pub struct JsonTrackSource {
    origin: Origin,
    memory: Option<String>,
    user: Option<UserId>,
}

#[derive(Debug, Clone)]
enum Origin {
    File(PathBuf),
    Inline(String),
}

impl JsonTrackSource {
    /// Read tracks from a JSON file
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::File(path.into()),
            memory: None,
            user: None,
        }
    }

    /// Read tracks from a JSON document already in memory
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            origin: Origin::Inline(json.into()),
            memory: None,
            user: None,
        }
    }

    /// Only yield tracks belonging to this memory
    pub fn memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = Some(memory.into());
        self
    }

    /// Only yield tracks uploaded by this user
    pub fn user(mut self, user_id: UserId) -> Self {
        self.user = Some(user_id);
        self
    }

    /// Parse and filter the track list
    pub fn load(&self) -> Result<Vec<Track>> {
        let tracks = match &self.origin {
            Origin::File(path) => parse_tracks(&read_file(path)?)?,
            Origin::Inline(json) => parse_tracks(json)?,
        };

        let total = tracks.len();
        let tracks: Vec<Track> = tracks
            .into_iter()
            .filter(|t| self.memory.as_ref().map_or(true, |m| &t.memory == m))
            .filter(|t| self.user.as_ref().map_or(true, |u| &t.user_id == u))
            .collect();

        tracing::debug!(total, kept = tracks.len(), "Loaded track list");
        Ok(tracks)
    }
}

impl TrackSource for JsonTrackSource {
    fn tracks(&self) -> memora_core::Result<Vec<Track>> {
        self.load().map_err(Into::into)
    }

    fn describe(&self) -> String {
        let base = match &self.origin {
            Origin::File(path) => path.display().to_string(),
            Origin::Inline(_) => "inline track list".to_string(),
        };
        match &self.memory {
            Some(memory) => format!("{} ({})", base, memory),
            None => base,
        }
    }
}

/// Parse a backend track array
///
/// Rows without an `id` get a fresh one.
pub fn parse_tracks(json: &str) -> Result<Vec<Track>> {
    Ok(serde_json::from_str(json)?)
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(LibraryError::FileNotFound(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(LibraryError::InvalidPath(format!(
            "{} is not a file",
            path.display()
        )));
    }
    Ok(fs::read_to_string(path)?)
}
