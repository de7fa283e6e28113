/// Track domain type
use crate::types::{TrackId, UserId};
use serde::{Deserialize, Deserializer, Serialize};

/// Provenance of the underlying media
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    /// File on the device's media library
    Local,

    /// Uploaded file served over HTTP
    #[default]
    Remote,
}

/// Image reference for a track
///
/// Either a URL or an opaque handle to a bundled local resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Artwork {
    /// Remote or file URL
    Url(String),

    /// Bundled resource handle
    Resource(u32),
}

/// Audio track
///
/// Immutable once placed in a queue. Serialized with the backend's camelCase
/// field names (`userId`, `type`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier (generated when the listing omits it)
    #[serde(default = "TrackId::generate")]
    pub id: TrackId,

    /// Playable resource locator (HTTP URL or device URI)
    pub url: String,

    /// Track title
    #[serde(default)]
    pub title: String,

    /// Artist name
    #[serde(default)]
    pub artist: String,

    /// Album name
    #[serde(default)]
    pub album: Option<String>,

    /// Genre
    #[serde(default)]
    pub genre: Option<String>,

    /// Cover image
    #[serde(default)]
    pub artwork: Option<Artwork>,

    /// Free-text labels, in the order the user entered them
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,

    /// Name of the memory this track belongs to (empty for transient tracks)
    #[serde(default)]
    pub memory: String,

    /// Provenance of the media
    #[serde(rename = "type", default)]
    pub kind: TrackKind,

    /// Owning user
    #[serde(default)]
    pub user_id: UserId,

    /// Track duration in milliseconds, when the backend knows it
    #[serde(default, rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// The subset of a track handed to the audio engine
///
/// Genre, tags, memory, kind and owner are domain data only and never reach
/// the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRequest {
    /// Track being played
    pub id: TrackId,
    /// Resource to load
    pub url: String,
    /// Title for now-playing displays
    pub title: String,
    /// Artist for now-playing displays
    pub artist: String,
    /// Album, when known
    pub album: Option<String>,
    /// Cover image, when known
    pub artwork: Option<Artwork>,
}

impl Track {
    /// Create a remote track with minimal metadata
    pub fn new(id: impl Into<TrackId>, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            title: title.into(),
            artist: String::new(),
            album: None,
            genre: None,
            artwork: None,
            tags: Vec::new(),
            memory: String::new(),
            kind: TrackKind::Remote,
            user_id: UserId::default(),
            duration_ms: None,
        }
    }

    /// Set the artist
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    /// Set the album
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Set the genre
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Set the cover image
    pub fn with_artwork(mut self, artwork: Artwork) -> Self {
        self.artwork = Some(artwork);
        self
    }

    /// Replace the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the track to a memory
    pub fn with_memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = memory.into();
        self
    }

    /// Set where the media lives
    pub fn with_kind(mut self, kind: TrackKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the owning user
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    /// Project the fields the audio engine needs to start playback
    pub fn play_request(&self) -> PlayRequest {
        PlayRequest {
            id: self.id.clone(),
            url: self.url.clone(),
            title: self.title.clone(),
            artist: self.artist.clone(),
            album: self.album.clone(),
            artwork: self.artwork.clone(),
        }
    }
}

/// Tags arrive as a JSON array, a comma-separated string, or `null`
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        List(Vec<String>),
        Text(String),
    }

    Ok(match Option::<Tags>::deserialize(deserializer)? {
        Some(Tags::List(tags)) => tags,
        Some(Tags::Text(text)) => text
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    })
}
