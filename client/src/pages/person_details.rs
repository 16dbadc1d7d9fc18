//! Full profile of one person: photo gallery, compatibility, and badges.

use leptos::prelude::*;

use crate::components::badge_chips::BadgeChips;
use crate::components::compatibility::CompatibilityMeter;
use crate::data::types::Person;
use crate::state::person::PhotoCursor;

#[component]
pub fn PersonDetailsPage(
    person: Person,
    on_back: Callback<()>,
    on_like: Callback<Person>,
    on_dislike: Callback<Person>,
    on_message: Callback<Person>,
) -> impl IntoView {
    let cursor = RwSignal::new(PhotoCursor::for_person(&person));
    let has_many = cursor.with_untracked(PhotoCursor::has_many);
    let photo_count = cursor.with_untracked(PhotoCursor::len);
    let verified = person.verified;

    // Tap zones and dots only when there is something to flip through.
    let gallery_controls = has_many.then(|| {
        let dots = (0..photo_count)
            .map(|i| {
                view! {
                    <span class="gallery__dot" class:gallery__dot--active=move || cursor.with(|c| c.index() == i)></span>
                }
            })
            .collect_view();
        view! {
            <div class="gallery__dots">{dots}</div>
            <button
                class="gallery__zone gallery__zone--left"
                aria-label="Предыдущее фото"
                on:click=move |_| cursor.update(PhotoCursor::prev_photo)
            ></button>
            <button
                class="gallery__zone gallery__zone--right"
                aria-label="Следующее фото"
                on:click=move |_| cursor.update(PhotoCursor::next_photo)
            ></button>
        }
    });

    let compatibility = person.compatibility.map(|value| {
        view! {
            <section class="card">
                <CompatibilityMeter value=value reasons=person.compatibility_reasons.clone()/>
            </section>
        }
    });
    let bio = person.bio.clone().map(|b| view! { <p class="person__bio">{b}</p> });
    let distance = person.distance.clone().map(|d| view! { <p class="person__distance">"📍 " {d}</p> });
    let about = person.about.clone().map(|text| {
        view! {
            <section class="card">
                <h3 class="section-title">"О себе"</h3>
                <p class="card__text">{text}</p>
            </section>
        }
    });
    let badges = (!person.badges.is_empty()).then(|| {
        view! {
            <section class="card">
                <h3 class="section-title">"Роадмап жизни"</h3>
                <BadgeChips badges=person.badges.clone()/>
            </section>
        }
    });

    let like = {
        let person = person.clone();
        move |_| on_like.run(person.clone())
    };
    let dislike = {
        let person = person.clone();
        move |_| on_dislike.run(person.clone())
    };
    let message = {
        let person = person.clone();
        move |_| on_message.run(person.clone())
    };

    view! {
        <div class="screen screen--person">
            <div class="gallery">
                <img
                    class="gallery__photo"
                    src=move || cursor.with(|c| c.current().unwrap_or_default().to_owned())
                    alt=person.name.clone()
                />
                {gallery_controls}
                <button class="icon-btn icon-btn--glass gallery__back" aria-label="Назад" on:click=move |_| on_back.run(())>
                    "←"
                </button>
                <div class="gallery__shade"></div>
                <div class="gallery__caption">
                    <h1 class="person__name">
                        {person.headline()}
                        <Show when=move || verified>
                            <span class="person__verified">"✓"</span>
                        </Show>
                    </h1>
                    {bio}
                    {distance}
                </div>
            </div>

            <main class="screen__content">
                {compatibility}
                {about}
                {badges}
                <Show when=move || verified>
                    <section class="card card--blue">
                        <p class="card__title">"Профиль верифицирован T-ID"</p>
                        <p class="card__text">"Личность подтверждена через банковскую систему T-Bank"</p>
                    </section>
                </Show>
            </main>

            <footer class="action-bar">
                <button class="round-btn round-btn--red round-btn--lg" aria-label="Пропустить" on:click=dislike>
                    "✕"
                </button>
                <button class="round-btn round-btn--blue" aria-label="Написать" on:click=message>
                    "💬"
                </button>
                <button class="round-btn round-btn--green round-btn--lg" aria-label="Нравится" on:click=like>
                    "♥"
                </button>
            </footer>
        </div>
    }
}
