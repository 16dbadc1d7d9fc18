//! One plan in full: facts, benefits, and people interested in it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Joining is a stub: the click is logged and nothing changes. Person cards
//! open the person detail screen with this plan as the return target.

use leptos::prelude::*;

use crate::components::person_card::PersonCard;
use crate::data::types::{Person, Plan};
use crate::util::format::{interested_title, price_label};

#[component]
pub fn PlanDetailsPage(plan: Plan, on_back: Callback<()>, on_person_select: Callback<Person>) -> impl IntoView {
    let pair = plan.is_pair_activity;

    let pair_badge = pair.then(|| view! { <span class="chip chip--purple">"👥 Вдвоём"</span> });
    let cashback = plan.cashback.clone().map(|cashback| {
        view! {
            <section class="card card--green">
                <h3 class="card__title">"📈 Выгода"</h3>
                <p class="card__text">{cashback} " при оплате через T-Bank"</p>
            </section>
        }
    });
    let tags = plan
        .tags
        .iter()
        .map(|tag| view! { <span class="chip chip--outline">"#" {tag.clone()}</span> })
        .collect_view();
    let interested = (!plan.interested_people.is_empty()).then(|| {
        let title = interested_title(plan.interested_people.len(), pair);
        let cards = plan
            .interested_people
            .iter()
            .cloned()
            .map(|person| view! { <PersonCard person=person on_click=on_person_select show_compatibility=true/> })
            .collect_view();
        view! {
            <section class="interested">
                <div class="section-head">
                    <h3 class="section-title">{title}</h3>
                    <span class="section-head__hint">"По совместимости"</span>
                </div>
                <div class="interested__list">{cards}</div>
            </section>
        }
    });

    let plan_id = plan.id.clone();
    let join = move |_| log::info!("join plan {plan_id} (pair: {pair})");

    view! {
        <div class="screen screen--details">
            <div class="hero">
                <img class="hero__image" src=plan.image.clone() alt=plan.title.clone()/>
                <div class="hero__shade"></div>
                <button class="icon-btn icon-btn--glass hero__back" aria-label="Назад" on:click=move |_| on_back.run(())>
                    "←"
                </button>
                <div class="hero__caption">
                    <div class="chips">
                        <span class="chip chip--glass">{plan.category.badge_text()}</span>
                        {pair_badge}
                    </div>
                    <h1 class="hero__title">{plan.title.clone()}</h1>
                </div>
            </div>

            <main class="screen__content">
                <div class="fact-grid">
                    <div class="fact">
                        <span class="fact__label">"📅 Дата"</span>
                        <p class="fact__value">{plan.date.clone()}</p>
                    </div>
                    <div class="fact">
                        <span class="fact__label">"🕐 Время"</span>
                        <p class="fact__value">{plan.time.clone()}</p>
                    </div>
                    <div class="fact">
                        <span class="fact__label">"👥 Участники"</span>
                        <p class="fact__value">{plan.participants_text()}</p>
                    </div>
                    <div class="fact">
                        <span class="fact__label">"💰 Цена"</span>
                        <p class="fact__value">{price_label(plan.price.as_deref())}</p>
                    </div>
                </div>

                <section class="card">
                    <h3 class="card__title">"📍 Место"</h3>
                    <p class="card__text">{plan.location.clone()}</p>
                </section>

                {cashback}

                <section class="card">
                    <h3 class="card__title">"Описание"</h3>
                    <p class="card__text">{plan.description.clone()}</p>
                    <div class="chips">{tags}</div>
                </section>

                {interested}

                <section class="card card--blue">
                    <h3 class="card__title">"💳 Разделить расходы"</h3>
                    <p class="card__text">"Вы можете легко разделить счёт с помощью встроенного сплитования T-Bank"</p>
                </section>
            </main>

            <footer class="action-bar action-bar--fixed">
                <button class="btn btn--primary btn--block" on:click=join>
                    {if pair { "Найти пару" } else { "Присоединиться к плану" }}
                </button>
            </footer>
            <div class="action-spacer"></div>
        </div>
    }
}
