//! Local audio folders as a track source

use crate::{LibraryError, Result};
use memora_core::{Artwork, Track, TrackId, TrackKind, TrackSource};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Supported audio file extensions
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "wav", "aac", "m4a", "opus"];

/// Extensions left out of device listings by default
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &["flac"];

/// Artist shown for files without tag metadata
pub const DEFAULT_ARTIST: &str = "unknown";

/// Cover shown for tracks without artwork of their own
pub const DEFAULT_ARTWORK_URL: &str =
    "https://i.scdn.co/image/ab67616d0000b273ec449471d321ade6ee416230";

/// Track source that lists audio files under a directory
///
/// Files are mapped straight to [`TrackKind::Local`] tracks without reading
/// tags: the title is the file name without extension and the artist is a
/// placeholder.
#[derive(Debug, Clone)]
pub struct LocalLibrarySource {
    root: PathBuf,
    excluded: Vec<String>,
    default_artist: String,
    default_artwork: Option<String>,
    follow_links: bool,
    max_depth: Option<usize>,
}

impl LocalLibrarySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excluded: DEFAULT_EXCLUDED_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            default_artist: DEFAULT_ARTIST.to_string(),
            default_artwork: Some(DEFAULT_ARTWORK_URL.to_string()),
            follow_links: false,
            max_depth: None,
        }
    }

    /// Replace the set of skipped extensions (case-insensitive)
    pub fn exclude_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded = extensions
            .into_iter()
            .map(|e| e.as_ref().to_lowercase())
            .collect();
        self
    }

    pub fn default_artist(mut self, artist: impl Into<String>) -> Self {
        self.default_artist = artist.into();
        self
    }

    /// Artwork URL for every listed track, or none
    pub fn default_artwork(mut self, url: Option<String>) -> Self {
        self.default_artwork = url;
        self
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum directory depth to traverse
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Directory being listed
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find playable files, sorted by path
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            return Err(LibraryError::FileNotFound(self.root.display().to_string()));
        }

        if !self.root.is_dir() {
            return Err(LibraryError::InvalidPath(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }

        let mut walker = WalkDir::new(&self.root).follow_links(self.follow_links);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            match audio_extension(path) {
                Some(ext) if !self.excluded.contains(&ext) => files.push(path.to_path_buf()),
                _ => {}
            }
        }

        files.sort();
        Ok(files)
    }

    /// Map one audio file to a track
    pub fn track_for(&self, path: &Path) -> Track {
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut track = Track::new(TrackId::generate(), file_url(path), title)
            .with_artist(self.default_artist.clone())
            .with_kind(TrackKind::Local);
        if let Some(url) = &self.default_artwork {
            track = track.with_artwork(Artwork::Url(url.clone()));
        }
        track
    }
}

impl TrackSource for LocalLibrarySource {
    fn tracks(&self) -> memora_core::Result<Vec<Track>> {
        let files = self.scan()?;
        tracing::debug!(root = %self.root.display(), count = files.len(), "Scanned local library");
        Ok(files.iter().map(|p| self.track_for(p)).collect())
    }

    fn describe(&self) -> String {
        format!("local folder {}", self.root.display())
    }
}

/// Lowercased extension if the file is a supported audio format
pub fn audio_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .filter(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}
