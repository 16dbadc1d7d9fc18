//! Page modules for full screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the fixture catalog from context, keeps its own screen
//! state, and reports navigation intents to the shell through callbacks.
//! Rendering details are delegated to `components`.

pub mod chats;
pub mod create_plan;
pub mod discover;
pub mod person_details;
pub mod plan_details;
pub mod plans_feed;
pub mod user_profile;
