//! Memora track sources
//!
//! Everything that produces track lists for the playback queue.
//!
//! # Architecture
//!
//! - `json`: track lists in the backend's JSON shape (per memory, per user)
//! - `local`: audio files found under a local folder
//! - `search`: title and tag filtering used by the memory and songs screens
//! - `suggestions`: AI-suggested track lists, with defaults for sparse rows
//!
//! # Example
//!
//! ```rust
//! use memora_core::TrackSource;
//! use memora_library::{filter_tracks, JsonTrackSource};
//!
//! let json = r#"[{"id": "1", "url": "https://cdn.example.com/1.mp3",
//!                 "title": "Golden Hour", "memory": "Road Trip", "tags": "sunset"}]"#;
//!
//! let tracks = JsonTrackSource::from_json(json).memory("Road Trip").tracks()?;
//! assert_eq!(filter_tracks(&tracks, "SUNSET").len(), 1);
//! # Ok::<(), memora_core::MemoraError>(())
//! ```

mod error;

pub mod json;
pub mod local;
pub mod search;
pub mod suggestions;

pub use error::{LibraryError, Result};
pub use json::{parse_tracks, JsonTrackSource};
pub use local::LocalLibrarySource;
pub use search::{filter_by_title, filter_tracks};
pub use suggestions::{with_suggestion_defaults, SuggestionSource};
