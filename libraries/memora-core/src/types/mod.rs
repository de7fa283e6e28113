mod ids;
mod track;

pub use ids::{TrackId, UserId};
pub use track::{Artwork, PlayRequest, Track, TrackKind};
