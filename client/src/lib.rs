//! # client
//!
//! Leptos frontend for "Планы": a mobile-first meetup app where people pick
//! plans, swipe through compatible companions, and chat about the details.
//!
//! All content comes from an embedded fixture catalog; nothing is persisted.
//! The swipe deck's gesture and timing rules live in the `deck` crate.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
