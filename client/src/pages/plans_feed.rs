//! Plans feed: search, category chips, meetings, and the plan list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Default tab. Selecting a plan, starting the wizard, and jumping to
//! Discover are reported to the shell through callbacks.

use leptos::prelude::*;

use crate::components::plan_card::PlanCard;
use crate::components::upcoming_meetings::UpcomingMeetings;
use crate::data::fixtures::Catalog;
use crate::data::types::Plan;
use crate::state::feed::{CategoryFilter, filter_plans};

#[component]
pub fn PlansFeedPage(
    on_plan_select: Callback<Plan>,
    on_create_plan: Callback<()>,
    on_discover_people: Callback<()>,
) -> impl IntoView {
    let catalog = expect_context::<StoredValue<Catalog>>();
    let filter = RwSignal::new(CategoryFilter::All);
    let query = RwSignal::new(String::new());

    let visible = Memo::new(move |_| {
        let filter = filter.get();
        query.with(|q| catalog.with_value(|c| filter_plans(&c.plans, filter, q)))
    });

    let chips = CategoryFilter::ALL
        .into_iter()
        .map(|chip| {
            view! {
                <button
                    class="chip chip--filter"
                    class:chip--selected=move || filter.get() == chip
                    on:click=move |_| filter.set(chip)
                >
                    {chip.icon()} " " {chip.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="screen">
            <header class="screen__header screen__header--sticky">
                <div class="screen__title-row">
                    <div>
                        <h1 class="screen__title">"Планы"</h1>
                        <p class="screen__subtitle">"Найди пару для встречи"</p>
                    </div>
                    <button class="icon-btn" aria-label="Открыть людей" on:click=move |_| on_discover_people.run(())>
                        "👥"
                    </button>
                </div>
                <div class="search">
                    <span class="search__icon">"🔍"</span>
                    <input
                        class="input search__input"
                        type="search"
                        placeholder="Поиск планов..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>
                <div class="chip-row">{chips}</div>
            </header>

            <main class="screen__content">
                <UpcomingMeetings meetings=catalog.with_value(|c| c.meetings.clone())/>

                <div class="cta" on:click=move |_| on_create_plan.run(())>
                    <div class="cta__icon">"+"</div>
                    <div>
                        <h3 class="cta__title">"Создать свой план"</h3>
                        <p class="cta__text">"Предложи встречу и найди подходящего человека"</p>
                    </div>
                </div>

                <section>
                    <h3 class="section-title">"Все планы"</h3>
                    <div class="plan-list">
                        <For
                            each=move || visible.get()
                            key=|plan| plan.id.clone()
                            children=move |plan| view! { <PlanCard plan=plan on_select=on_plan_select/> }
                        />
                    </div>
                    <Show when=move || visible.with(Vec::is_empty)>
                        <div class="empty">
                            <p class="empty__title">"Планы не найдены"</p>
                            <p class="empty__text">"Попробуйте изменить фильтры"</p>
                        </div>
                    </Show>
                </section>
            </main>
            <div class="nav-spacer"></div>
        </div>
    }
}
