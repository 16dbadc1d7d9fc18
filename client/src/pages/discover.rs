//! Discover: swipe through candidates with mock compatibility.

use leptos::prelude::*;

use crate::components::swipe_cards::SwipeCards;
use crate::components::toaster::push_notice;
use crate::data::fixtures::Catalog;
use crate::data::types::Person;
use crate::state::discover::{DiscoverState, enrich_people};
use crate::state::toast::{NoticeKind, ToastState, liked_text};

#[component]
pub fn DiscoverPage(on_person_select: Callback<Person>) -> impl IntoView {
    let catalog = expect_context::<StoredValue<Catalog>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(DiscoverState::default());

    let people = catalog.with_value(|c| enrich_people(&c.people));

    let on_like = Callback::new(move |person: Person| {
        push_notice(toasts, NoticeKind::Success, liked_text(&person.name));
        state.update(|s| s.record_like(person));
    });
    let on_dislike = Callback::new(move |person: Person| DiscoverState::record_skip(&person));

    view! {
        <div class="screen">
            <header class="screen__header screen__header--sticky">
                <div class="screen__title-row">
                    <div>
                        <h1 class="screen__title">"Открыть"</h1>
                        <p class="screen__subtitle">"Познакомься с новыми людьми"</p>
                    </div>
                    <Show when=move || state.with(|s| !s.liked.is_empty())>
                        <span class="chip chip--green">{move || format!("💚 {}", state.with(|s| s.liked.len()))}</span>
                    </Show>
                </div>
            </header>

            <main class="screen__content">
                <SwipeCards
                    people=people
                    on_like=on_like
                    on_dislike=on_dislike
                    on_view_profile=on_person_select
                />
                <div class="tip tip--blue">
                    <h3 class="tip__title">"💡 Совет"</h3>
                    <p class="tip__text">
                        "Свайпайте вправо, если человек интересен. При взаимном лайке вы сможете начать общение!"
                    </p>
                </div>
            </main>
            <div class="nav-spacer"></div>
        </div>
    }
}
