//! Swipeable card stack for the Discover screen.
//!
//! DESIGN
//! ======
//! All gesture logic lives in `deck::SwipeDeck`; this component only feeds it
//! pointer and button input, applies the returned actions, and renders the
//! current `CardTransform`. Exit timers are one-shot and hand the deck's
//! token back, so a stale or disposed timer cannot advance the stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! Discover passes the enriched people and three callbacks. Like/dislike fire
//! at commit time; the card then animates out and the deck advances after
//! the fixed exit delay.

#[cfg(test)]
#[path = "swipe_cards_test.rs"]
mod swipe_cards_test;

use deck::consts::EXIT_TRANSITION_MS;
use deck::engine::{Action, SwipeDeck};
use deck::gesture::Verdict;
use deck::motion::CardTransform;
use leptos::prelude::*;

use crate::components::badge_chips::BadgeChips;
use crate::components::compatibility::CompatibilityMeter;
use crate::data::types::Person;
use crate::util::timer;

const SWIPE_BADGE_LIMIT: usize = 5;

/// Callbacks the deck reports to.
#[derive(Clone, Copy)]
struct DeckCallbacks {
    on_like: Callback<Person>,
    on_dislike: Callback<Person>,
    on_view_profile: Callback<Person>,
}

/// Inline style for the active card.
#[must_use]
pub fn card_style(transform: &CardTransform, dragging: bool) -> String {
    let transition = if dragging {
        "none".to_owned()
    } else {
        format!("transform {EXIT_TRANSITION_MS}ms ease, opacity {EXIT_TRANSITION_MS}ms ease")
    };
    format!("transform: {}; opacity: {:.3}; transition: {transition}", transform.css_transform(), transform.opacity)
}

/// "3 / 7" under the stack.
#[must_use]
pub fn position_text(position: Option<(usize, usize)>) -> String {
    position.map(|(n, total)| format!("{n} / {total}")).unwrap_or_default()
}

#[component]
pub fn SwipeCards(
    people: Vec<Person>,
    on_like: Callback<Person>,
    on_dislike: Callback<Person>,
    on_view_profile: Callback<Person>,
) -> impl IntoView {
    let deck = RwSignal::new(SwipeDeck::new(people));
    let callbacks = DeckCallbacks { on_like, on_dislike, on_view_profile };
    let card_ref = NodeRef::<leptos::html::Div>::new();

    let index = Memo::new(move |_| deck.with(SwipeDeck::index));
    let exhausted = Memo::new(move |_| deck.with(SwipeDeck::is_exhausted));

    let run = move |f: fn(&mut SwipeDeck<Person>) -> Vec<Action<Person>>| {
        if let Some(actions) = deck.try_update(f) {
            process_actions(deck, actions, callbacks);
        }
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(card) = card_ref.get() {
                let _ = card.set_pointer_capture(ev.pointer_id());
            }
        }
        let x = f64::from(ev.client_x());
        if let Some(actions) = deck.try_update(|d| d.on_drag_start(x)) {
            process_actions(deck, actions, callbacks);
        }
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !deck.with_untracked(|d| d.phase().is_dragging()) {
            return;
        }
        let x = f64::from(ev.client_x());
        if let Some(actions) = deck.try_update(|d| d.on_drag_move(x)) {
            process_actions(deck, actions, callbacks);
        }
    };
    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(card) = card_ref.get() {
                let _ = card.release_pointer_capture(ev.pointer_id());
            }
        }
        let x = f64::from(ev.client_x());
        if let Some(actions) = deck.try_update(|d| d.on_drag_end(x)) {
            process_actions(deck, actions, callbacks);
        }
    };
    let on_pointer_cancel = move |_ev: leptos::ev::PointerEvent| run(SwipeDeck::on_drag_cancel);

    let active_card = move || {
        // Re-render only when the index changes; drag updates go through the
        // reactive style below.
        index.track();
        let person = deck.with_untracked(|d| d.current().cloned())?;
        let style = move || deck.with(|d| card_style(&d.transform(), d.phase().is_dragging()));
        let like_opacity = move || format!("opacity: {:.3}", deck.with(|d| d.transform().like_opacity));
        let nope_opacity = move || format!("opacity: {:.3}", deck.with(|d| d.transform().nope_opacity));
        Some(view! {
            <div
                class="swipe-card swipe-card--active"
                class:swipe-card--dragging=move || deck.with(|d| d.phase().is_dragging())
                node_ref=card_ref
                style=style
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
            >
                <span class="swipe-card__stamp swipe-card__stamp--like" style=like_opacity>"LIKE"</span>
                <span class="swipe-card__stamp swipe-card__stamp--nope" style=nope_opacity>"NOPE"</span>
                <CardFace person=person on_info=Callback::new(move |()| run(SwipeDeck::view_profile))/>
            </div>
        })
    };

    let preview_card = move || {
        index.track();
        deck.with_untracked(|d| d.preview().cloned()).map(|p| {
            view! {
                <div class="swipe-card swipe-card--preview" aria-hidden="true">
                    <img class="swipe-card__photo" src=p.photo alt=p.name draggable="false"/>
                </div>
            }
        })
    };

    view! {
        <Show
            when=move || !exhausted.get()
            fallback=|| {
                view! {
                    <div class="swipe__empty">
                        <p class="swipe__empty-title">"Пока всё! 🎉"</p>
                        <p class="swipe__empty-text">"Новые люди скоро появятся"</p>
                    </div>
                }
            }
        >
            <div class="swipe">
                <div class="swipe__stack">
                    {preview_card}
                    {active_card}
                </div>
                <div class="swipe__buttons">
                    <button
                        class="round-btn round-btn--red round-btn--lg"
                        aria-label="Пропустить"
                        on:click=move |_| run(SwipeDeck::dislike)
                    >
                        "✕"
                    </button>
                    <button
                        class="round-btn round-btn--blue"
                        aria-label="Профиль"
                        on:click=move |_| run(SwipeDeck::view_profile)
                    >
                        "ℹ"
                    </button>
                    <button
                        class="round-btn round-btn--green round-btn--lg"
                        aria-label="Нравится"
                        on:click=move |_| run(SwipeDeck::like)
                    >
                        "♥"
                    </button>
                </div>
                <p class="swipe__progress">{move || position_text(deck.with(SwipeDeck::position))}</p>
            </div>
        </Show>
    }
}

/// Photo, identity, compatibility and badges of the active card.
#[component]
fn CardFace(person: Person, on_info: Callback<()>) -> impl IntoView {
    let bio = person.bio.clone().map(|b| view! { <p class="swipe-card__bio">{b}</p> });
    let distance = person.distance.clone().map(|d| view! { <p class="swipe-card__distance">"📍 " {d}</p> });
    let compat = person.compatibility.map(|value| view! { <CompatibilityMeter value=value on_dark=true/> });

    view! {
        <img class="swipe-card__photo" src=person.photo.clone() alt=person.name.clone() draggable="false"/>
        <div class="swipe-card__shade"></div>
        <div class="swipe-card__info">
            <div class="swipe-card__head">
                <div>
                    <h2 class="swipe-card__name">{person.headline()}</h2>
                    {bio}
                    {distance}
                </div>
                <button
                    class="icon-btn icon-btn--glass"
                    aria-label="Подробнее"
                    on:pointerdown=|ev: leptos::ev::PointerEvent| ev.stop_propagation()
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        on_info.run(());
                    }
                >
                    "ℹ"
                </button>
            </div>
            {compat}
            <BadgeChips badges=person.badges.clone() limit=SWIPE_BADGE_LIMIT on_dark=true/>
        </div>
    }
}

/// Apply deck actions: invoke callbacks and schedule exit timers.
fn process_actions(deck: RwSignal<SwipeDeck<Person>>, actions: Vec<Action<Person>>, callbacks: DeckCallbacks) {
    for action in actions {
        match action {
            Action::Liked(person) => {
                log::info!("swipe {}: {}", Verdict::Like.as_str(), person.id);
                callbacks.on_like.run(person);
            }
            Action::Disliked(person) => {
                log::info!("swipe {}: {}", Verdict::Dislike.as_str(), person.id);
                callbacks.on_dislike.run(person);
            }
            Action::ViewProfile(person) => callbacks.on_view_profile.run(person),
            Action::ScheduleExit { token, delay_ms } => {
                timer::after(delay_ms, move || {
                    if let Some(follow_up) = deck.try_update(|d| d.complete_exit(token)) {
                        process_actions(deck, follow_up, callbacks);
                    }
                });
            }
            Action::Advanced { index } => log::debug!("deck advanced to {index}"),
            Action::Exhausted => log::info!("deck exhausted"),
            // The transform is read reactively from the deck signal.
            Action::RenderNeeded => {}
        }
    }
}
