//! Shuffle algorithm for queue randomization
//!
//! The current track is pinned to the front and only the remaining tracks
//! are permuted, so engaging shuffle mid-playback never changes what is heard.

use memora_core::Track;
use rand::Rng;

/// Uniform in-place shuffle using the Fisher-Yates algorithm
///
/// Walks from the last element down, swapping each position `i` with a
/// random position in `0..=i`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Build a shuffled queue with the track at `current` pinned to index 0
///
/// The other tracks keep their relative order before being permuted, which
/// makes the result depend only on the queue and the random stream.
/// An out-of-range `current` yields a plain shuffle of the whole queue.
pub fn shuffle_pinned<R: Rng + ?Sized>(queue: &[Track], current: usize, rng: &mut R) -> Vec<Track> {
    let mut rest: Vec<Track> = queue
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != current)
        .map(|(_, track)| track.clone())
        .collect();

    fisher_yates(&mut rest, rng);

    let mut shuffled = Vec::with_capacity(queue.len());
    if let Some(track) = queue.get(current) {
        shuffled.push(track.clone());
    }
    shuffled.extend(rest);
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn create_test_track(id: &str) -> Track {
        Track::new(id, format!("/music/{}.mp3", id), format!("Track {}", id))
    }

    fn tracks(n: usize) -> Vec<Track> {
        (0..n).map(|i| create_test_track(&i.to_string())).collect()
    }

    #[test]
    fn pinned_track_stays_first() {
        let mut rng = StdRng::seed_from_u64(42);
        let queue = tracks(10);

        for current in 0..queue.len() {
            let shuffled = shuffle_pinned(&queue, current, &mut rng);
            assert_eq!(shuffled[0].id, queue[current].id);
            assert_eq!(shuffled.len(), queue.len());
        }
    }

    #[test]
    fn shuffle_preserves_all_tracks() {
        let mut rng = StdRng::seed_from_u64(9);
        let queue = tracks(25);
        let shuffled = shuffle_pinned(&queue, 12, &mut rng);

        let before: HashSet<_> = queue.iter().map(|t| t.id.clone()).collect();
        let after: HashSet<_> = shuffled.iter().map(|t| t.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn shuffle_changes_order() {
        let mut rng = StdRng::seed_from_u64(1234);
        let queue = tracks(8);
        let shuffled = shuffle_pinned(&queue, 0, &mut rng);

        // Fixed seed, so this is deterministic
        let before: Vec<_> = queue.iter().map(|t| t.id.as_str()).collect();
        let after: Vec<_> = shuffled.iter().map(|t| t.id.as_str()).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn single_track_queue() {
        let mut rng = StdRng::seed_from_u64(0);
        let queue = tracks(1);
        let shuffled = shuffle_pinned(&queue, 0, &mut rng);
        assert_eq!(shuffled, queue);
    }

    #[test]
    fn fisher_yates_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: Vec<u8> = vec![];
        fisher_yates(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![1];
        fisher_yates(&mut one, &mut rng);
        assert_eq!(one, vec![1]);
    }

    #[test]
    fn fisher_yates_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();

        for _ in 0..6000 {
            let mut items = vec![0u8, 1, 2];
            fisher_yates(&mut items, &mut rng);
            *counts.entry(items).or_default() += 1;
        }

        // 3! permutations, ~1000 each
        assert_eq!(counts.len(), 6);
        for (perm, count) in counts {
            assert!(
                (800..1200).contains(&count),
                "permutation {:?} drawn {} times",
                perm,
                count
            );
        }
    }
}
