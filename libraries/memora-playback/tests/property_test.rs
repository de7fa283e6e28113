//! Property-based tests for the queue manager
//!
//! Uses proptest to verify the queue invariants across random queues and
//! random operation sequences.

use memora_core::Track;
use memora_playback::{PlaybackConfig, QueueManager, RecordingEngine};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

// ===== Helpers =====

/// Queue of `len` tracks with unique ids
fn unique_tracks(len: usize) -> Vec<Track> {
    (0..len)
        .map(|i| Track::new(format!("t{}", i), format!("/music/{}.mp3", i), format!("Song {}", i)))
        .collect()
}

fn arbitrary_queue() -> impl Strategy<Value = (Vec<Track>, usize)> {
    (1usize..40).prop_flat_map(|len| (Just(unique_tracks(len)), 0..len))
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Next,
    Prev,
    Shuffle,
    Toggle,
    TrackEnded,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Prev),
        Just(Op::Shuffle),
        Just(Op::Toggle),
        Just(Op::TrackEnded),
    ]
}

fn manager_with_seed(seed: u64) -> (QueueManager, RecordingEngine) {
    let engine = RecordingEngine::new();
    let manager = QueueManager::with_rng(
        Box::new(engine.clone()),
        PlaybackConfig::default(),
        StdRng::seed_from_u64(seed),
    );
    (manager, engine)
}

fn ids(tracks: &[Track]) -> Vec<String> {
    tracks.iter().map(|t| t.id.as_str().to_string()).collect()
}

// ===== Property Tests =====

proptest! {
    /// Property: the current index is always within the queue
    #[test]
    fn index_always_valid(
        (tracks, start) in arbitrary_queue(),
        extra_start in 0usize..60,
        ops in prop::collection::vec(arbitrary_op(), 0..60),
        seed in any::<u64>(),
        use_extra in any::<bool>(),
    ) {
        let (mut manager, _engine) = manager_with_seed(seed);
        manager.set_queue(tracks, if use_extra { extra_start } else { start });

        for op in ops {
            match op {
                Op::Next => manager.play_next_track(),
                Op::Prev => manager.play_prev_track(),
                Op::Shuffle => manager.shuffle_queue(),
                Op::Toggle => manager.toggle_shuffle(),
                Op::TrackEnded => manager.handle_engine_event(memora_playback::EngineEvent::TrackEnded),
            }

            if let Some(index) = manager.current_index() {
                prop_assert!(index < manager.len(), "index {} out of {}", index, manager.len());
            }

            // Snapshot fields are present together, and only while shuffled
            prop_assert_eq!(manager.original_queue().is_some(), manager.is_shuffled());
            prop_assert_eq!(manager.original_index().is_some(), manager.is_shuffled());
        }
    }

    /// Property: shuffle keeps the current track first and the same set of tracks
    #[test]
    fn shuffle_pins_current_track(
        (tracks, start) in arbitrary_queue(),
        seed in any::<u64>(),
    ) {
        let (mut manager, engine) = manager_with_seed(seed);
        manager.set_queue(tracks.clone(), start);
        engine.clear();

        manager.shuffle_queue();

        prop_assert_eq!(manager.current_index(), Some(0));
        prop_assert_eq!(&manager.queue()[0].id, &tracks[start].id);
        prop_assert!(engine.commands().is_empty());

        let before: HashSet<String> = ids(&tracks).into_iter().collect();
        let after: HashSet<String> = ids(manager.queue()).into_iter().collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(manager.len(), tracks.len());
    }

    /// Property: shuffle then toggle restores queue and index exactly
    #[test]
    fn shuffle_is_reversible(
        (tracks, start) in arbitrary_queue(),
        seed in any::<u64>(),
    ) {
        let (mut manager, _engine) = manager_with_seed(seed);
        manager.set_queue(tracks.clone(), start);

        manager.shuffle_queue();
        manager.toggle_shuffle();

        prop_assert_eq!(manager.queue(), tracks.as_slice());
        prop_assert_eq!(manager.current_index(), Some(start));
        prop_assert!(!manager.is_shuffled());
    }

    /// Property: after navigating a shuffled queue, restoring keeps the same track current
    #[test]
    fn unshuffle_keeps_current_track(
        (tracks, start) in arbitrary_queue(),
        moves in prop::collection::vec(any::<bool>(), 0..20),
        seed in any::<u64>(),
    ) {
        let (mut manager, _engine) = manager_with_seed(seed);
        manager.set_queue(tracks.clone(), start);
        manager.toggle_shuffle();

        for forward in moves {
            if forward {
                manager.play_next_track();
            } else {
                manager.play_prev_track();
            }
        }
        let playing = manager.current_track().map(|t| t.id.clone());

        manager.toggle_shuffle();
        prop_assert_eq!(manager.queue(), tracks.as_slice());
        prop_assert_eq!(manager.current_track().map(|t| t.id.clone()), playing);
    }

    /// Property: navigation at the boundaries changes nothing
    #[test]
    fn no_wrap_at_boundaries(len in 1usize..30, seed in any::<u64>()) {
        let (mut manager, engine) = manager_with_seed(seed);

        manager.set_queue(unique_tracks(len), len - 1);
        let plays = engine.commands().len();
        manager.play_next_track();
        prop_assert_eq!(manager.current_index(), Some(len - 1));
        prop_assert_eq!(engine.commands().len(), plays);

        manager.set_queue(unique_tracks(len), 0);
        let plays = engine.commands().len();
        manager.play_prev_track();
        prop_assert_eq!(manager.current_index(), Some(0));
        prop_assert_eq!(engine.commands().len(), plays);
    }
}
