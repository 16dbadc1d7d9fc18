//! Screen and shell state.
//!
//! DESIGN
//! ======
//! One module per screen plus `nav` and `toast` for the shell. Each holds
//! plain data and pure transitions so it can be tested without a browser;
//! components wrap these in signals.

pub mod chats;
pub mod create_plan;
pub mod discover;
pub mod feed;
pub mod meetings;
pub mod nav;
pub mod person;
pub mod profile;
pub mod toast;
