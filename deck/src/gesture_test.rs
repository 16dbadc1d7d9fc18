#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Verdict
// =============================================================

#[test]
fn verdict_from_offset_past_right_threshold_is_like() {
    assert_eq!(Verdict::from_offset(100.5), Some(Verdict::Like));
    assert_eq!(Verdict::from_offset(400.0), Some(Verdict::Like));
}

#[test]
fn verdict_from_offset_past_left_threshold_is_dislike() {
    assert_eq!(Verdict::from_offset(-100.5), Some(Verdict::Dislike));
    assert_eq!(Verdict::from_offset(-400.0), Some(Verdict::Dislike));
}

#[test]
fn verdict_from_offset_at_threshold_springs_back() {
    assert_eq!(Verdict::from_offset(100.0), None);
    assert_eq!(Verdict::from_offset(-100.0), None);
    assert_eq!(Verdict::from_offset(0.0), None);
}

#[test]
fn verdict_exit_offset_matches_direction() {
    assert_eq!(Verdict::Like.exit_offset(), 200.0);
    assert_eq!(Verdict::Dislike.exit_offset(), -200.0);
}

#[test]
fn verdict_as_str() {
    assert_eq!(Verdict::Like.as_str(), "like");
    assert_eq!(Verdict::Dislike.as_str(), "dislike");
}

// =============================================================
// Phase
// =============================================================

#[test]
fn phase_default_is_idle() {
    assert_eq!(Phase::default(), Phase::Idle);
}

#[test]
fn phase_offset_follows_drag() {
    let phase = Phase::Dragging { start_x: 40.0, offset: -35.0 };
    assert_eq!(phase.offset(), -35.0);
    assert!(phase.is_dragging());
    assert!(!phase.is_committing());
}

#[test]
fn phase_offset_while_committing_is_exit_offset() {
    let phase = Phase::Committing { verdict: Verdict::Dislike, token: ExitToken(1) };
    assert_eq!(phase.offset(), -200.0);
    assert!(phase.is_committing());
}

#[test]
fn phase_offset_idle_and_settled_is_zero() {
    assert_eq!(Phase::Idle.offset(), 0.0);
    assert_eq!(Phase::Settled.offset(), 0.0);
}
