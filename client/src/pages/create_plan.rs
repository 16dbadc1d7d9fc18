//! Two-step wizard for proposing a custom plan.
//!
//! DESIGN
//! ======
//! All rules live in `CreatePlanForm`; the page binds inputs to it and swaps
//! step bodies on a memoized step number so typing never rebuilds the form.
//! A successful submit hands the draft to the shell, which owns navigation.

use leptos::prelude::*;

use crate::data::types::PlanCategory;
use crate::state::create_plan::{
    ActivityType, CreatePlanForm, GROUP_MAX_PARTICIPANTS, GROUP_MIN_PARTICIPANTS, PlanDraft, WizardStep,
};

#[component]
pub fn CreatePlanPage(on_back: Callback<()>, on_created: Callback<PlanDraft>) -> impl IntoView {
    let form = RwSignal::new(CreatePlanForm::default());
    let step = Memo::new(move |_| form.with(|f| f.step));

    let primary = move |_| match step.get_untracked() {
        WizardStep::Basics => {
            form.update(|f| {
                f.next();
            });
        }
        WizardStep::Details => {
            if let Some(draft) = form.with_untracked(CreatePlanForm::submit) {
                on_created.run(draft);
            }
        }
    };

    view! {
        <div class="screen">
            <header class="screen__header screen__header--sticky">
                <div class="screen__title-row screen__title-row--start">
                    <button class="icon-btn" aria-label="Назад" on:click=move |_| on_back.run(())>
                        "←"
                    </button>
                    <div>
                        <h1 class="screen__title">"Создать план"</h1>
                        <p class="screen__subtitle">{move || format!("Шаг {} из 2", step.get().number())}</p>
                    </div>
                </div>
                <div class="steps">
                    <div class="steps__bar steps__bar--done"></div>
                    <div class="steps__bar" class:steps__bar--done=move || step.get() == WizardStep::Details></div>
                </div>
            </header>

            <main class="screen__content form">
                {move || match step.get() {
                    WizardStep::Basics => view! { <BasicsStep form=form/> }.into_any(),
                    WizardStep::Details => view! { <DetailsStep form=form/> }.into_any(),
                }}
            </main>

            <footer class="action-bar action-bar--fixed">
                <Show when=move || step.get() == WizardStep::Details>
                    <button class="btn btn--outline" on:click=move |_| form.update(CreatePlanForm::back)>
                        "Назад"
                    </button>
                </Show>
                <button
                    class="btn btn--primary"
                    disabled=move || !form.with(CreatePlanForm::primary_enabled)
                    on:click=primary
                >
                    {move || match step.get() {
                        WizardStep::Basics => "Далее",
                        WizardStep::Details => "Создать план",
                    }}
                </button>
            </footer>
            <div class="action-spacer"></div>
        </div>
    }
}

/// Activity type, title, category, and description.
#[component]
fn BasicsStep(form: RwSignal<CreatePlanForm>) -> impl IntoView {
    let activity_options = ActivityType::ALL
        .into_iter()
        .map(|kind| {
            view! {
                <button
                    class="option"
                    class:option--selected=move || form.with(|f| f.activity_type == kind)
                    on:click=move |_| form.update(|f| f.set_activity_type(kind))
                >
                    <span class="option__icon">{kind.icon()}</span>
                    <div>
                        <h3 class="option__title">{kind.label()}</h3>
                        <p class="option__text">{kind.description()}</p>
                    </div>
                </button>
            }
        })
        .collect_view();

    let category_options = PlanCategory::ALL
        .into_iter()
        .map(|category| {
            view! {
                <button
                    class="option option--compact"
                    class:option--selected=move || form.with(|f| f.category == category)
                    on:click=move |_| form.update(|f| f.category = category)
                >
                    <span class="option__icon">{category.icon()}</span>
                    <div>
                        <h3 class="option__title">{category.label()}</h3>
                        <p class="option__text">{category.examples()}</p>
                    </div>
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="form__group">
            <h2 class="form__label">"Как планируешь встретиться?"</h2>
            <div class="option-list">{activity_options}</div>
        </section>

        <section class="form__group">
            <label class="form__label">"Название плана"</label>
            <input
                class="input"
                type="text"
                placeholder="Например: Кофе в центре"
                prop:value=move || form.with(|f| f.title.clone())
                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
            />
        </section>

        <section class="form__group">
            <label class="form__label">"Категория"</label>
            <div class="option-list">{category_options}</div>
        </section>

        <section class="form__group">
            <label class="form__label">"Описание (опционально)"</label>
            <textarea
                class="input input--area"
                rows="4"
                placeholder="Расскажи подробнее о своём плане..."
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            ></textarea>
        </section>
    }
}

/// Place, time, price, group size, and a summary.
#[component]
fn DetailsStep(form: RwSignal<CreatePlanForm>) -> impl IntoView {
    let is_group = move || form.with(|f| f.activity_type == ActivityType::Group);
    let summary_description = move || {
        form.with(|f| {
            (!f.description.is_empty()).then(|| view! { <p class="summary__text">{f.description.clone()}</p> })
        })
    };

    view! {
        <section class="form__group">
            <label class="form__label">"📍 Место встречи"</label>
            <input
                class="input"
                type="text"
                placeholder="Например: Кофейня на Никольской"
                prop:value=move || form.with(|f| f.location.clone())
                on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
            />
        </section>

        <div class="form__row">
            <section class="form__group">
                <label class="form__label">"📅 Дата"</label>
                <input
                    class="input"
                    type="date"
                    prop:value=move || form.with(|f| f.date.clone())
                    on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                />
            </section>
            <section class="form__group">
                <label class="form__label">"🕐 Время"</label>
                <input
                    class="input"
                    type="time"
                    prop:value=move || form.with(|f| f.time.clone())
                    on:input=move |ev| form.update(|f| f.time = event_target_value(&ev))
                />
            </section>
        </div>

        <section class="form__group">
            <label class="form__label">"💰 Примерная стоимость (опционально)"</label>
            <input
                class="input"
                type="text"
                placeholder="Например: ~500 ₽"
                prop:value=move || form.with(|f| f.price.clone())
                on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
            />
        </section>

        <Show when=is_group>
            <section class="form__group">
                <label class="form__label">"👥 Максимум участников"</label>
                <input
                    class="input"
                    type="number"
                    min=GROUP_MIN_PARTICIPANTS.to_string()
                    max=GROUP_MAX_PARTICIPANTS.to_string()
                    prop:value=move || form.with(|f| f.max_participants.to_string())
                    on:input=move |ev| form.update(|f| f.type_max_participants(&event_target_value(&ev)))
                    on:change=move |ev| form.update(|f| f.set_max_participants(&event_target_value(&ev)))
                />
            </section>
        </Show>

        <section class="summary">
            <h3 class="summary__title">"Ваш план"</h3>
            <p class="summary__name">{move || form.with(|f| f.title.clone())}</p>
            {summary_description}
            <div class="chips">
                <span class="chip">
                    {move || if is_group() { "👨‍👩‍👧‍👦 Компанией" } else { "👥 Вдвоём" }}
                </span>
                <span class="chip">
                    {move || form.with(|f| format!("{} {}", f.category.icon(), f.category.label()))}
                </span>
            </div>
        </section>

        <section class="tip tip--green">
            <h3 class="tip__title">"💡 Что дальше?"</h3>
            <p class="tip__text">
                "Мы покажем ваш план людям с высокой совместимостью. Когда кто-то заинтересуется, вы сможете начать общение!"
            </p>
        </section>
    }
}
