/// Track source selection from command-line arguments
use crate::config::LibrarySettings;
use memora_core::{Track, TrackSource, UserId};
use memora_library::{
    filter_by_title, filter_tracks, JsonTrackSource, LocalLibrarySource, SuggestionSource,
};
use std::path::PathBuf;

/// Where the tracks come from
#[derive(Debug, Clone)]
pub enum SourceSpec {
    /// Backend-shaped JSON track list, optionally narrowed to a memory and user
    Json {
        path: PathBuf,
        memory: Option<String>,
        user: Option<String>,
    },

    /// Audio files under a local folder
    Folder(PathBuf),

    /// AI-suggested tracks, with blanks filled in and attributed to `user`
    Suggestions { path: PathBuf, user: Option<String> },
}

impl SourceSpec {
    pub fn build(&self, library: &LibrarySettings) -> Box<dyn TrackSource> {
        match self {
            SourceSpec::Json { path, memory, user } => {
                let mut source = JsonTrackSource::from_path(path);
                if let Some(memory) = memory {
                    source = source.memory(memory.clone());
                }
                if let Some(user) = user {
                    source = source.user(UserId::new(user.clone()));
                }
                Box::new(source)
            }
            SourceSpec::Folder(root) => Box::new(
                LocalLibrarySource::new(root)
                    .exclude_extensions(&library.exclude_extensions)
                    .default_artist(library.default_artist.clone())
                    .default_artwork(
                        library
                            .default_artwork
                            .clone()
                            .filter(|url| !url.is_empty()),
                    )
                    .follow_links(library.follow_links),
            ),
            SourceSpec::Suggestions { path, user } => Box::new(SuggestionSource::from_path(
                path,
                user.as_deref().map(UserId::new).unwrap_or_default(),
            )),
        }
    }

    /// Search the tracks this source produced
    ///
    /// Local files carry no tags, so folder listings match on title only.
    pub fn search(&self, tracks: &[Track], query: &str) -> Vec<Track> {
        match self {
            SourceSpec::Folder(_) => filter_by_title(tracks, query),
            SourceSpec::Json { .. } | SourceSpec::Suggestions { .. } => {
                filter_tracks(tracks, query)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn folder_uses_library_settings() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.flac"), b"").unwrap();
        fs::write(dir.path().join("b.mp3"), b"").unwrap();

        let settings = LibrarySettings {
            default_artist: "Tape".to_string(),
            default_artwork: Some(String::new()),
            exclude_extensions: vec!["mp3".to_string()],
            follow_links: false,
        };

        let tracks = SourceSpec::Folder(dir.path().to_path_buf())
            .build(&settings)
            .tracks()
            .unwrap();

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "a");
        assert_eq!(tracks[0].artist, "Tape");
        assert!(tracks[0].artwork.is_none());
    }

    #[test]
    fn json_narrows_to_memory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tracks.json");
        fs::write(
            &path,
            r#"[{"url": "/a.mp3", "title": "A", "memory": "One"},
                {"url": "/b.mp3", "title": "B", "memory": "Two"}]"#,
        )
        .unwrap();

        let spec = SourceSpec::Json {
            path,
            memory: Some("Two".to_string()),
            user: None,
        };
        let tracks = spec.build(&LibrarySettings::default()).tracks().unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "B");
    }

    #[test]
    fn suggestions_get_defaults_and_user() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("suggested.json");
        fs::write(&path, r#"[{"url": "/s.mp3", "title": "Suggested"}]"#).unwrap();

        let spec = SourceSpec::Suggestions {
            path,
            user: Some("u7".to_string()),
        };
        let tracks = spec.build(&LibrarySettings::default()).tracks().unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].memory, "AI Suggestions");
        assert_eq!(tracks[0].album.as_deref(), Some("Unknown Album"));
        assert_eq!(tracks[0].user_id, UserId::new("u7"));
    }

    #[test]
    fn folder_search_ignores_tags() {
        let tracks = vec![
            Track::new("1", "/rain.mp3", "Rain").with_tags(["storm"]),
            Track::new("2", "/storm.mp3", "Storm Front"),
        ];

        let folder = SourceSpec::Folder(PathBuf::from("/music"));
        let found = folder.search(&tracks, "storm");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Storm Front");

        let json = SourceSpec::Json {
            path: PathBuf::from("/tracks.json"),
            memory: None,
            user: None,
        };
        assert_eq!(json.search(&tracks, "storm").len(), 2);
    }
}
