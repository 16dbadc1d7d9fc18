//! Compatibility percentage with a progress bar and optional reasons.

use leptos::prelude::*;

/// Width style for a 0..=100 bar.
#[must_use]
pub fn bar_width(value: u32) -> String {
    format!("width: {}%", value.min(100))
}

#[component]
pub fn CompatibilityMeter(
    value: u32,
    #[prop(optional)] reasons: Vec<String>,
    #[prop(optional)] on_dark: bool,
) -> impl IntoView {
    let reasons = (!reasons.is_empty()).then(|| {
        view! {
            <ul class="compat__reasons">
                {reasons.into_iter().map(|r| view! { <li>"• " {r}</li> }).collect_view()}
            </ul>
        }
    });

    view! {
        <div class="compat" class:compat--on-dark=on_dark>
            <div class="compat__head">
                <span class="compat__label">"Совместимость"</span>
                <span class="compat__value">{format!("{value}%")}</span>
            </div>
            <div class="progress">
                <div class="progress__fill" style=bar_width(value)></div>
            </div>
            {reasons}
        </div>
    }
}
