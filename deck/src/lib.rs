//! Swipe-deck gesture engine for the discover screen.
//!
//! This crate owns the interaction model of the card stack: which card is
//! active, how far it has been dragged, whether a release commits to a like or
//! a dislike, and when the deck advances to the next card. It is pure logic
//! with no browser dependencies. The host UI layer feeds it pointer positions
//! and button presses, renders the card transform it reports, and reacts to
//! the [`engine::Action`]s it returns (firing callbacks and scheduling the
//! one-shot exit timer).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::SwipeDeck`], the card-stack state machine |
//! | [`gesture`] | Phase, verdict and exit-token types |
//! | [`motion`] | Offset-to-rotation/opacity interpolation |
//! | [`consts`] | Thresholds, ranges and timings |

pub mod consts;
pub mod engine;
pub mod gesture;
pub mod motion;
