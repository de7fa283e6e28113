//! Track list search

use memora_core::Track;

/// Tracks whose title or any tag contains `query`, ignoring case
///
/// An empty query matches everything. Order is preserved, so the result can
/// be handed to the queue as-is.
pub fn filter_tracks<'a, I>(tracks: I, query: &str) -> Vec<Track>
where
    I: IntoIterator<Item = &'a Track>,
{
    let query = query.to_lowercase();
    tracks
        .into_iter()
        .filter(|t| {
            query.is_empty()
                || contains_ignore_case(&t.title, &query)
                || t.tags.iter().any(|tag| contains_ignore_case(tag, &query))
        })
        .cloned()
        .collect()
}

/// Tracks whose title contains `query`, ignoring case
pub fn filter_by_title<'a, I>(tracks: I, query: &str) -> Vec<Track>
where
    I: IntoIterator<Item = &'a Track>,
{
    let query = query.to_lowercase();
    tracks
        .into_iter()
        .filter(|t| contains_ignore_case(&t.title, &query))
        .cloned()
        .collect()
}

/// `needle` must already be lowercase
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
