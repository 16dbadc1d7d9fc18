//! Current user's profile with an editable badge set. Edits are not saved.

use leptos::prelude::*;

use crate::data::fixtures::Catalog;
use crate::data::types::{Badge, Person};
use crate::state::profile::{ProfileState, editable_badges};

#[component]
pub fn UserProfilePage() -> impl IntoView {
    let catalog = expect_context::<StoredValue<Catalog>>();
    catalog.with_value(|c| c.current_user.clone()).map(|user| {
        let choices = catalog.with_value(|c| editable_badges(&c.badges));
        view! { <ProfileBody user=user choices=choices/> }
    })
}

#[component]
fn ProfileBody(user: Person, choices: Vec<Badge>) -> impl IntoView {
    let state = RwSignal::new(ProfileState::new(user.badges.clone()));
    let editing = Memo::new(move |_| state.with(|s| s.editing));
    let verified = user.verified;

    let picker = move || {
        let chips = choices
            .iter()
            .cloned()
            .map(|badge| {
                let id = badge.id.clone();
                let text = badge.chip_text();
                view! {
                    <button
                        class="chip chip--toggle"
                        class:chip--selected=move || state.with(|s| s.is_selected(&id))
                        on:click=move |_| state.update(|s| s.toggle(&badge))
                    >
                        {text}
                    </button>
                }
            })
            .collect_view();
        view! {
            <p class="card__text">"Выберите бейджи, которые лучше всего описывают вас"</p>
            <div class="chips">{chips}</div>
            <p class="hint">
                "💡 Мы автоматически подобрали эти бейджи на основе ваших транзакций и активности. Вы можете добавить или убрать любые."
            </p>
        }
    };
    let selected = move || {
        state.with(|s| {
            s.selected
                .iter()
                .map(|badge| {
                    view! { <span class="chip" class:chip--accent=badge.is_verified()>{badge.chip_text()}</span> }
                })
                .collect_view()
        })
    };

    view! {
        <div class="screen">
            <header class="screen__header">
                <h1 class="screen__title">"Профиль"</h1>
            </header>

            <main class="screen__content">
                <section class="card card--flush">
                    <div class="profile__photo">
                        <img src=user.photo.clone() alt=user.name.clone()/>
                        <Show when=move || verified>
                            <span class="profile__verified">"✓"</span>
                        </Show>
                    </div>
                    <div class="card__body">
                        <h2 class="profile__name">{user.headline()}</h2>
                        <p class="profile__city">"📍 Москва"</p>
                        <Show when=move || verified>
                            <div class="card card--blue card--inner">
                                <p class="card__title">"✓ Профиль верифицирован через T-ID"</p>
                                <p class="card__text">"Ваш профиль защищён от мошенников и фейковых аккаунтов"</p>
                            </div>
                        </Show>
                    </div>
                </section>

                <section class="card">
                    <div class="section-head">
                        <div>
                            <h3 class="section-title">"Роадмап жизни"</h3>
                            <p class="section-head__hint">"Бейджи на основе ваших данных T-Bank"</p>
                        </div>
                        <button
                            class="btn btn--small"
                            class:btn--primary=move || editing.get()
                            class:btn--outline=move || !editing.get()
                            on:click=move |_| state.update(ProfileState::toggle_editing)
                        >
                            {move || state.with(ProfileState::edit_button_label)}
                        </button>
                    </div>
                    {move || {
                        if editing.get() {
                            picker().into_any()
                        } else {
                            view! { <div class="chips">{selected}</div> }.into_any()
                        }
                    }}
                </section>

                <div class="stats">
                    <div class="stat">
                        <span class="stat__value stat__value--purple">"12"</span>
                        <span class="stat__label">"Планов"</span>
                    </div>
                    <div class="stat">
                        <span class="stat__value stat__value--blue">"8"</span>
                        <span class="stat__label">"Встреч"</span>
                    </div>
                    <div class="stat">
                        <span class="stat__value stat__value--green">"94%"</span>
                        <span class="stat__label">"Рейтинг"</span>
                    </div>
                </div>

                <section class="tip tip--purple">
                    <h3 class="tip__title">"🎯 Как работает совместимость"</h3>
                    <p class="tip__text">
                        "Мы анализируем ваш ритм жизни, привычки и предпочтения на основе транзакций и активности. Это помогает находить людей, с которыми у вас высокий шанс хорошей встречи."
                    </p>
                </section>

                <section class="card">
                    <h3 class="card__title">"🔒 Конфиденциальность"</h3>
                    <p class="card__text">
                        "Мы не показываем ваши доходы, суммы трат или кредитные рейтинги. Только агрегированные данные о стиле жизни."
                    </p>
                </section>
            </main>
            <div class="nav-spacer"></div>
        </div>
    }
}
