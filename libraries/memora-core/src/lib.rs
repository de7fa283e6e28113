//! Memora Core
//!
//! Platform-agnostic domain types, traits, and error handling for Memora.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `UserId`, `TrackKind`, `Artwork`
//! - **Core Traits**: `TrackSource` (anything that yields an ordered track list)
//! - **Error Handling**: Unified `MemoraError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use memora_core::types::{Artwork, Track, TrackKind};
//!
//! let track = Track::new("t1", "https://cdn.example.com/t1.mp3", "Whispers in the Rain")
//!     .with_artist("Mikasa Jeanete")
//!     .with_memory("Summer 2024")
//!     .with_artwork(Artwork::Url("https://cdn.example.com/t1.jpg".into()));
//!
//! assert_eq!(track.kind, TrackKind::Remote);
//! let request = track.play_request();
//! assert_eq!(request.id.as_str(), "t1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{MemoraError, Result};
pub use traits::TrackSource;
pub use types::{Artwork, PlayRequest, Track, TrackId, TrackKind, UserId};
