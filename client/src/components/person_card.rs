//! Compact person card used in plan details and lists.

use leptos::prelude::*;

use crate::components::badge_chips::BadgeChips;
use crate::components::compatibility::CompatibilityMeter;
use crate::data::types::Person;

const CARD_BADGE_LIMIT: usize = 4;

/// Read-only person summary. Clickable only when `on_click` is set.
#[component]
pub fn PersonCard(
    person: Person,
    #[prop(optional)] on_click: Option<Callback<Person>>,
    #[prop(optional)] show_compatibility: bool,
) -> impl IntoView {
    let clickable = on_click.is_some();
    let verified = person.verified;
    let on_card_click = {
        let person = person.clone();
        move |_| {
            if let Some(cb) = on_click.as_ref() {
                cb.run(person.clone());
            }
        }
    };
    let compatibility = person
        .compatibility
        .filter(|_| show_compatibility)
        .map(|value| view! { <CompatibilityMeter value=value reasons=person.compatibility_reasons.clone()/> });
    let distance = person.distance.clone().map(|d| view! { <span class="person-card__distance">"📍 " {d}</span> });

    view! {
        <div class="person-card" class:person-card--clickable=clickable on:click=on_card_click>
            <div class="person-card__photo">
                <img src=person.photo.clone() alt=person.name.clone()/>
                <Show when=move || verified>
                    <span class="person-card__verified" title="Верифицирован">"✓"</span>
                </Show>
            </div>
            <div class="person-card__body">
                <div class="person-card__head">
                    <div>
                        <h3 class="person-card__name">{person.headline()}</h3>
                        {distance}
                    </div>
                    <Show when=move || verified>
                        <span class="chip chip--outline chip--blue">"T-ID ✓"</span>
                    </Show>
                </div>
                {compatibility}
                <BadgeChips badges=person.badges.clone() limit=CARD_BADGE_LIMIT/>
            </div>
        </div>
    }
}
