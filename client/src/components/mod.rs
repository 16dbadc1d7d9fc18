//! Reusable UI components.
//!
//! DESIGN
//! ======
//! Components take owned records and callbacks as props and keep no
//! cross-screen state; the shell and pages own everything else.

pub mod badge_chips;
pub mod compatibility;
pub mod navigation;
pub mod person_card;
pub mod plan_card;
pub mod swipe_cards;
pub mod toaster;
pub mod upcoming_meetings;
