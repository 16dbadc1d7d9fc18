//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `timer` wraps the browser's one-shot timeouts for the hydrated build;
//! `format` holds the Russian display strings (times, day labels, plurals).

pub mod format;
pub mod timer;
