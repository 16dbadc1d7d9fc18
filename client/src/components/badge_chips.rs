//! Row of badge chips with an optional "+n" overflow chip.

use leptos::prelude::*;

use crate::data::types::Badge;
use crate::util::format::{badge_overflow, overflow_chip};

/// Badge chips; verified badges get the accent style. With `limit` set, the
/// remainder collapses into a "+n" chip.
#[component]
pub fn BadgeChips(
    badges: Vec<Badge>,
    #[prop(optional)] limit: Option<usize>,
    #[prop(optional)] on_dark: bool,
) -> impl IntoView {
    let (shown, hidden) = badge_overflow(&badges, limit.unwrap_or(badges.len()));
    let chips = shown
        .iter()
        .map(|badge| {
            view! {
                <span
                    class="chip"
                    class:chip--accent=badge.is_verified()
                    class:chip--on-dark=on_dark
                >
                    {badge.chip_text()}
                </span>
            }
        })
        .collect_view();
    let more = overflow_chip(hidden).map(|text| {
        view! { <span class="chip chip--outline" class:chip--on-dark=on_dark>{text}</span> }
    });

    view! {
        <div class="chips">
            {chips}
            {more}
        </div>
    }
}
