//! Gesture model: the per-card phase machine, verdicts, and exit tokens.
//!
//! A card moves through `Idle -> Dragging -> (Idle | Committing)`; a
//! committing card leaves the stack once the host hands back its
//! [`ExitToken`], and the deck becomes `Settled` after the last card leaves.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::consts::{COMMIT_THRESHOLD_PX, EXIT_OFFSET_PX};

/// Outcome of a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Swiped right or pressed the heart button.
    Like,
    /// Swiped left or pressed the cross button.
    Dislike,
}

impl Verdict {
    /// Classify a release offset. `None` means the card springs back.
    #[must_use]
    pub fn from_offset(offset: f64) -> Option<Self> {
        if offset > COMMIT_THRESHOLD_PX {
            Some(Self::Like)
        } else if offset < -COMMIT_THRESHOLD_PX {
            Some(Self::Dislike)
        } else {
            None
        }
    }

    /// Offset the card animates to while leaving the stack.
    #[must_use]
    pub fn exit_offset(self) -> f64 {
        match self {
            Self::Like => EXIT_OFFSET_PX,
            Self::Dislike => -EXIT_OFFSET_PX,
        }
    }

    /// Short lowercase name for log lines.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

/// Handle for one pending exit. Only the most recently issued token can
/// complete an exit; older ones are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitToken(pub u64);

/// Where the active card is in its gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    /// Resting at offset zero, waiting for input.
    #[default]
    Idle,
    /// Pointer is down and the card follows it horizontally.
    Dragging {
        /// Pointer x at gesture start.
        start_x: f64,
        /// Current offset from `start_x`.
        offset: f64,
    },
    /// A verdict was issued; the card is animating out and the deck advances
    /// when `token` is completed.
    Committing {
        /// Which way the card is leaving.
        verdict: Verdict,
        /// Token the host must pass back to finish the exit.
        token: ExitToken,
    },
    /// Every card has been decided. Terminal for the session.
    Settled,
}

impl Phase {
    /// Horizontal card offset implied by this phase.
    #[must_use]
    pub fn offset(&self) -> f64 {
        match self {
            Self::Dragging { offset, .. } => *offset,
            Self::Committing { verdict, .. } => verdict.exit_offset(),
            Self::Idle | Self::Settled => 0.0,
        }
    }

    /// Whether the card should follow the pointer without a CSS transition.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Whether the active card is on its way out.
    #[must_use]
    pub fn is_committing(&self) -> bool {
        matches!(self, Self::Committing { .. })
    }
}
