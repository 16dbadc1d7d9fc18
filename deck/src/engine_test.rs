#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn deck(n: usize) -> SwipeDeck<String> {
    SwipeDeck::new((0..n).map(|i| format!("p{i}")).collect())
}

fn swipe(deck: &mut SwipeDeck<String>, dx: f64) -> Vec<Action<String>> {
    let mut actions = deck.on_drag_start(50.0);
    actions.extend(deck.on_drag_move(50.0 + dx / 2.0));
    actions.extend(deck.on_drag_end(50.0 + dx));
    actions
}

fn scheduled_token(actions: &[Action<String>]) -> Option<ExitToken> {
    actions.iter().find_map(|a| match a {
        Action::ScheduleExit { token, .. } => Some(*token),
        _ => None,
    })
}

fn liked(actions: &[Action<String>]) -> Vec<String> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::Liked(p) => Some(p.clone()),
            _ => None,
        })
        .collect()
}

fn disliked(actions: &[Action<String>]) -> Vec<String> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::Disliked(p) => Some(p.clone()),
            _ => None,
        })
        .collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_deck_starts_at_first_card() {
    let d = deck(3);
    assert_eq!(d.index(), 0);
    assert_eq!(d.current().map(String::as_str), Some("p0"));
    assert_eq!(d.preview().map(String::as_str), Some("p1"));
    assert_eq!(d.phase(), Phase::Idle);
    assert_eq!(d.position(), Some((1, 3)));
}

#[test]
fn empty_deck_is_settled() {
    let mut d = deck(0);
    assert!(d.is_empty());
    assert!(d.is_exhausted());
    assert_eq!(d.phase(), Phase::Settled);
    assert!(d.on_drag_start(0.0).is_empty());
    assert!(d.like().is_empty());
    assert_eq!(d.position(), None);
}

#[test]
fn last_card_has_no_preview() {
    let d = deck(1);
    assert!(d.preview().is_none());
}

// =============================================================
// Dragging
// =============================================================

#[test]
fn drag_move_tracks_offset_from_start() {
    let mut d = deck(2);
    d.on_drag_start(120.0);
    d.on_drag_move(80.0);
    assert_eq!(d.phase(), Phase::Dragging { start_x: 120.0, offset: -40.0 });
    assert!((d.transform().rotation_deg - -5.0).abs() < 1e-9);
}

#[test]
fn every_drag_step_requests_a_redraw() {
    let mut d = deck(2);
    let before = d.transform();
    assert_eq!(d.on_drag_start(100.0), vec![Action::RenderNeeded]);
    assert_eq!(d.on_drag_move(160.0), vec![Action::RenderNeeded]);
    assert_ne!(d.transform(), before);
    assert_eq!(d.on_drag_end(130.0), vec![Action::RenderNeeded]);
    assert_eq!(d.transform(), before);
}

#[test]
fn drag_move_without_start_is_ignored() {
    let mut d = deck(2);
    assert!(d.on_drag_move(300.0).is_empty());
    assert_eq!(d.phase(), Phase::Idle);
}

#[test]
fn drag_end_without_start_is_ignored() {
    let mut d = deck(2);
    assert!(d.on_drag_end(300.0).is_empty());
    assert_eq!(d.index(), 0);
}

#[test]
fn short_release_springs_back_without_callback() {
    for dx in [-100.0, -60.0, -1.0, 0.0, 1.0, 60.0, 100.0] {
        let mut d = deck(3);
        let actions = swipe(&mut d, dx);
        assert!(liked(&actions).is_empty(), "dx {dx}");
        assert!(disliked(&actions).is_empty(), "dx {dx}");
        assert!(scheduled_token(&actions).is_none(), "dx {dx}");
        assert_eq!(d.index(), 0);
        assert_eq!(d.phase(), Phase::Idle);
        assert_eq!(d.transform().offset, 0.0);
    }
}

#[test]
fn drag_cancel_springs_back() {
    let mut d = deck(2);
    d.on_drag_start(0.0);
    d.on_drag_move(180.0);
    assert_eq!(d.on_drag_cancel(), vec![Action::RenderNeeded]);
    assert_eq!(d.phase(), Phase::Idle);
    assert!(d.on_drag_cancel().is_empty());
}

// =============================================================
// Committing
// =============================================================

#[test]
fn right_release_past_threshold_likes_current_once() {
    let mut d = deck(3);
    let actions = swipe(&mut d, 101.0);
    assert_eq!(liked(&actions), vec!["p0".to_owned()]);
    assert!(disliked(&actions).is_empty());
    assert!(matches!(d.phase(), Phase::Committing { verdict: Verdict::Like, .. }));
    // Not advanced until the exit completes.
    assert_eq!(d.index(), 0);
}

#[test]
fn left_release_past_threshold_dislikes_current_once() {
    let mut d = deck(3);
    let actions = swipe(&mut d, -250.0);
    assert_eq!(disliked(&actions), vec!["p0".to_owned()]);
    assert!(liked(&actions).is_empty());
    assert_eq!(d.transform().offset, -200.0);
}

#[test]
fn commit_schedules_exit_with_fixed_delay() {
    let mut d = deck(2);
    let actions = swipe(&mut d, 150.0);
    let delay = actions.iter().find_map(|a| match a {
        Action::ScheduleExit { delay_ms, .. } => Some(*delay_ms),
        _ => None,
    });
    assert_eq!(delay, Some(crate::consts::EXIT_DELAY_MS));
}

#[test]
fn complete_exit_advances_by_exactly_one() {
    let mut d = deck(3);
    let token = scheduled_token(&swipe(&mut d, 150.0)).unwrap();
    let actions = d.complete_exit(token);
    assert!(actions.contains(&Action::Advanced { index: 1 }));
    assert_eq!(d.index(), 1);
    assert_eq!(d.phase(), Phase::Idle);
    assert_eq!(d.current().map(String::as_str), Some("p1"));
}

#[test]
fn complete_exit_twice_does_not_double_advance() {
    let mut d = deck(3);
    let token = scheduled_token(&swipe(&mut d, 150.0)).unwrap();
    d.complete_exit(token);
    assert!(d.complete_exit(token).is_empty());
    assert_eq!(d.index(), 1);
}

#[test]
fn stale_token_is_ignored() {
    let mut d = deck(3);
    let first = scheduled_token(&swipe(&mut d, 150.0)).unwrap();
    d.complete_exit(first);
    let second = scheduled_token(&swipe(&mut d, 150.0)).unwrap();
    assert_ne!(first, second);
    assert!(d.complete_exit(first).is_empty());
    assert_eq!(d.index(), 1);
    d.complete_exit(second);
    assert_eq!(d.index(), 2);
}

#[test]
fn input_while_committing_is_ignored() {
    let mut d = deck(3);
    swipe(&mut d, 150.0);
    assert!(d.on_drag_start(0.0).is_empty());
    assert!(d.like().is_empty());
    assert!(d.dislike().is_empty());
    assert!(d.view_profile().is_empty());
    assert!(d.on_drag_cancel().is_empty());
}

#[test]
fn cancel_exit_keeps_index() {
    let mut d = deck(3);
    swipe(&mut d, -150.0);
    assert_eq!(d.cancel_exit(), vec![Action::RenderNeeded]);
    assert_eq!(d.index(), 0);
    assert_eq!(d.phase(), Phase::Idle);
    assert!(d.pending_exit().is_none());
    assert!(d.cancel_exit().is_empty());
}

#[test]
fn cancelled_token_cannot_complete() {
    let mut d = deck(3);
    let token = scheduled_token(&swipe(&mut d, 150.0)).unwrap();
    d.cancel_exit();
    assert!(d.complete_exit(token).is_empty());
    assert_eq!(d.index(), 0);
}

// =============================================================
// Buttons
// =============================================================

#[test]
fn like_button_matches_right_swipe() {
    let mut d = deck(2);
    let actions = d.like();
    assert_eq!(liked(&actions), vec!["p0".to_owned()]);
    assert!(scheduled_token(&actions).is_some());
}

#[test]
fn dislike_button_matches_left_swipe() {
    let mut d = deck(2);
    let actions = d.dislike();
    assert_eq!(disliked(&actions), vec!["p0".to_owned()]);
    assert!(scheduled_token(&actions).is_some());
}

#[test]
fn view_profile_does_not_advance() {
    let mut d = deck(2);
    assert_eq!(d.view_profile(), vec![Action::ViewProfile("p0".to_owned())]);
    assert_eq!(d.index(), 0);
    assert_eq!(d.phase(), Phase::Idle);
}

// =============================================================
// Exhaustion
// =============================================================

#[test]
fn swiping_whole_deck_commits_n_times_then_settles() {
    let n = 5;
    let mut d = deck(n);
    let mut commits = 0;
    for i in 0..n {
        let dx = if i % 2 == 0 { 180.0 } else { -180.0 };
        let actions = swipe(&mut d, dx);
        commits += liked(&actions).len() + disliked(&actions).len();
        let token = scheduled_token(&actions).unwrap();
        let done = d.complete_exit(token);
        if i + 1 == n {
            assert!(done.contains(&Action::Exhausted));
        } else {
            assert!(!done.contains(&Action::Exhausted));
        }
    }
    assert_eq!(commits, n);
    assert!(d.is_exhausted());
    assert_eq!(d.index(), n);
    assert_eq!(d.phase(), Phase::Settled);
    assert!(d.current().is_none());
}

#[test]
fn exhausted_deck_ignores_all_input() {
    let mut d = deck(1);
    let token = scheduled_token(&d.like()).unwrap();
    d.complete_exit(token);

    assert!(swipe(&mut d, 300.0).is_empty());
    assert!(d.like().is_empty());
    assert!(d.dislike().is_empty());
    assert!(d.view_profile().is_empty());
    assert!(d.complete_exit(token).is_empty());
    assert!(d.cancel_exit().is_empty());
    assert_eq!(d.index(), 1);
    assert_eq!(d.phase(), Phase::Settled);
}
