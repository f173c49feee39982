// Playback through the public API

use std::time::{Duration, Instant};

use sortty::algorithms::Algorithm;
use sortty::errors::SortError;
use sortty::model::{Element, IndexRange};
use sortty::player::Player;

fn player(algorithm: Algorithm, values: &[i64]) -> Player {
    let trace = algorithm
        .generate(&Element::from_values(values))
        .expect("generation failed");
    Player::new(trace, Duration::from_millis(300))
}

#[test]
fn test_backward_replays_recorded_steps() {
    let mut player = player(Algorithm::Quick, &[5, 1, 4, 2, 3]);
    let mut seen = Vec::new();
    loop {
        seen.push(player.current().unwrap().clone());
        if player.step_forward().is_err() {
            break;
        }
    }

    for expected in seen.iter().rev().skip(1) {
        player.step_backward().unwrap();
        assert_eq!(player.current().unwrap(), expected);
    }
    assert!(matches!(player.step_backward(), Err(SortError::AtStart)));
}

#[test]
fn test_autoplay_reaches_end_and_pauses() {
    let mut player = player(Algorithm::Bubble, &[4, 3, 2, 1]);
    let total = player.total();
    let mut now = Instant::now();

    player.toggle_play(now);
    let mut moves = 0;
    for _ in 0..total * 2 {
        if player.tick(now) {
            moves += 1;
        }
        now += Duration::from_millis(300);
    }

    assert_eq!(moves, total - 1);
    assert!(player.is_at_end());
    assert!(!player.is_playing());
}

#[test]
fn test_merge_snapshots_collapse_as_playback_advances() {
    let mut player = player(Algorithm::Merge, &[8, 7, 6, 5, 4, 3, 2, 1]);

    let mut max_visible = 0;
    loop {
        let visible = player.visible_snapshots();
        for a in &visible {
            for b in &visible {
                if a.range != b.range {
                    assert!(!a.range.contains_range(&b.range), "contained snapshot still shown");
                }
            }
        }
        max_visible = max_visible.max(visible.len());
        if player.step_forward().is_err() {
            break;
        }
    }
    assert!(max_visible >= 2);

    // After the root merge the only snapshots left are the two top halves
    let ranges: Vec<IndexRange> = player.visible_snapshots().iter().map(|s| s.range).collect();
    assert_eq!(ranges, vec![IndexRange::new(0, 3), IndexRange::new(4, 7)]);
}

#[test]
fn test_recursion_path_tracks_depth() {
    let mut player = player(Algorithm::Merge, &[4, 2, 1, 3]);
    loop {
        let step = player.current().unwrap().clone();
        let path = player.recursion_path();
        if step.active_range.is_some() {
            assert_eq!(path.len(), step.depth + 1);
            assert_eq!(path.last().copied(), step.active_range);
            assert_eq!(path[0], IndexRange::new(0, 3));
        }
        if player.step_forward().is_err() {
            break;
        }
    }
}

#[test]
fn test_jump_to_out_of_range() {
    let mut player = player(Algorithm::Merge, &[2, 1]);
    let total = player.total();
    assert!(matches!(
        player.jump_to(total + 5),
        Err(SortError::StepOutOfRange { .. })
    ));
    player.jump_to(total - 1).unwrap();
    assert!(player.is_at_end());
}
