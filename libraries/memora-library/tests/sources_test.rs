//! Track source integration tests
//!
//! Sources are used through the `TrackSource` trait, the way the player
//! binary picks one at startup.

use memora_core::{TrackKind, TrackSource, UserId};
use memora_library::{
    filter_by_title, filter_tracks, with_suggestion_defaults, JsonTrackSource, LocalLibrarySource,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ===== Helpers =====

fn write_files(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"").unwrap();
    }
}

fn titles(tracks: &[memora_core::Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.title.as_str()).collect()
}

// ===== Local Folder Tests =====

#[test]
fn test_local_folder_as_trait_object() {
    let dir = TempDir::new().unwrap();
    write_files(dir.path(), &["Rain.mp3", "Alpine.ogg", "Master.flac", "notes.txt"]);

    let source: Box<dyn TrackSource> = Box::new(LocalLibrarySource::new(dir.path()));
    let tracks = source.tracks().unwrap();

    assert_eq!(titles(&tracks), vec!["Alpine", "Rain"]);
    assert!(tracks.iter().all(|t| t.kind == TrackKind::Local));
    assert!(source.describe().starts_with("local folder"));

    // Fresh ids per scan entry
    assert_ne!(tracks[0].id, tracks[1].id);
}

#[test]
fn test_local_search_by_title() {
    let dir = TempDir::new().unwrap();
    write_files(dir.path(), &["Summer Rain.mp3", "Winter.mp3", "rainfall.wav"]);

    let tracks = LocalLibrarySource::new(dir.path()).tracks().unwrap();
    let found = filter_by_title(&tracks, "RAIN");
    assert_eq!(titles(&found), vec!["Summer Rain", "rainfall"]);
}

#[test]
fn test_local_folder_custom_defaults() {
    let dir = TempDir::new().unwrap();
    write_files(dir.path(), &["Take.flac"]);

    let tracks = LocalLibrarySource::new(dir.path())
        .exclude_extensions(Vec::<String>::new())
        .default_artist("Field Recording")
        .default_artwork(None)
        .tracks()
        .unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].artist, "Field Recording");
    assert!(tracks[0].artwork.is_none());
}

#[test]
fn test_missing_folder_surfaces_core_error() {
    let dir = TempDir::new().unwrap();
    let err = LocalLibrarySource::new(dir.path().join("gone"))
        .tracks()
        .unwrap_err();
    assert!(matches!(err, memora_core::MemoraError::NotFound { .. }));
}

// ===== Backend Track List Tests =====

#[test]
fn test_memory_screen_flow() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tracks.json");
    fs::write(
        &path,
        r#"[
            {"id": "a", "url": "https://cdn.example.com/a.mp3", "title": "Vows",
             "memory": "Wedding", "userId": "u1", "tags": ["first dance"]},
            {"id": "b", "url": "https://cdn.example.com/b.mp3", "title": "Toast",
             "memory": "Wedding", "userId": "u1", "tags": "speech, laughter"},
            {"url": "https://cdn.example.com/c.mp3", "title": "Afterparty",
             "memory": "Wedding", "userId": "u1"}
        ]"#,
    )
    .unwrap();

    let source = JsonTrackSource::from_path(&path)
        .memory("Wedding")
        .user(UserId::new("u1"));
    let tracks = source.tracks().unwrap();
    assert_eq!(tracks.len(), 3);
    assert!(!tracks[2].id.as_str().is_empty());

    let found = filter_tracks(&tracks, "laugh");
    assert_eq!(titles(&found), vec!["Toast"]);

    let found = filter_tracks(&tracks, "DANCE");
    assert_eq!(titles(&found), vec!["Vows"]);
}

#[test]
fn test_suggestions_join_queue_with_defaults() {
    let json = r#"[{"url": "https://cdn.example.com/s.mp3", "title": "Suggested"}]"#;
    let user = UserId::new("u9");

    let tracks: Vec<_> = JsonTrackSource::from_json(json)
        .tracks()
        .unwrap()
        .into_iter()
        .map(|t| with_suggestion_defaults(t, &user))
        .collect();

    assert_eq!(tracks[0].memory, "AI Suggestions");
    assert_eq!(tracks[0].user_id, user);
    assert_eq!(tracks[0].kind, TrackKind::Remote);
}
