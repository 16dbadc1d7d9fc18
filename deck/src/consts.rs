//! Shared numeric constants for the deck crate.

// ── Commit ──────────────────────────────────────────────────────

/// Horizontal drag distance (logical px) a release must exceed to commit.
pub const COMMIT_THRESHOLD_PX: f64 = 100.0;

// ── Motion ──────────────────────────────────────────────────────

/// Offset at which the card reaches its maximum tilt and fades out fully.
pub const ROTATION_RANGE_PX: f64 = 200.0;

/// Maximum card tilt in degrees, reached at `±ROTATION_RANGE_PX`.
pub const MAX_ROTATION_DEG: f64 = 25.0;

/// Offset the card animates to when it leaves the stack.
pub const EXIT_OFFSET_PX: f64 = 200.0;

// ── Timing ──────────────────────────────────────────────────────

/// Delay between a commit and the deck advancing to the next card.
pub const EXIT_DELAY_MS: u32 = 200;

/// Duration of the CSS transition used for spring-back and exit.
pub const EXIT_TRANSITION_MS: u32 = 300;
