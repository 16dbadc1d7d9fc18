//! Plan summary card for the feed.

use leptos::prelude::*;

use crate::data::types::Plan;
use crate::util::format::interested_phrase;

const AVATAR_LIMIT: usize = 3;

#[component]
pub fn PlanCard(plan: Plan, on_select: Callback<Plan>) -> impl IntoView {
    let pair = plan.is_pair_activity;
    let cashback = plan.cashback.clone().map(|c| view! { <span class="chip chip--green plan-card__cashback">"📈 " {c}</span> });
    let date = plan.date.clone().map(|d| view! { <span class="chip chip--outline">{d}</span> });
    let time = plan.time.clone().map(|t| view! { <span class="chip chip--outline">{t}</span> });
    let price = plan.price.clone().map(|p| view! { <span class="plan-card__price">{p}</span> });
    let interested = (!plan.interested_people.is_empty()).then(|| {
        let avatars = plan
            .interested_people
            .iter()
            .take(AVATAR_LIMIT)
            .map(|p| view! { <img class="avatar avatar--sm" src=p.photo.clone() alt=p.name.clone()/> })
            .collect_view();
        view! {
            <div class="plan-card__interested">
                <div class="avatar-stack">{avatars}</div>
                <span class="plan-card__interested-text">
                    {interested_phrase(plan.interested_people.len(), pair)}
                </span>
            </div>
        }
    });

    let on_click = {
        let plan = plan.clone();
        move |_| on_select.run(plan.clone())
    };

    view! {
        <article class="plan-card" on:click=on_click>
            <div class="plan-card__cover">
                <img src=plan.image.clone() alt=plan.title.clone()/>
                <div class="plan-card__tags">
                    <span class="chip chip--glass">{plan.category.badge_text()}</span>
                    <Show when=move || pair>
                        <span class="chip chip--purple">"👥 Вдвоём"</span>
                    </Show>
                </div>
                {cashback}
            </div>
            <div class="plan-card__body">
                <h3 class="plan-card__title">{plan.title.clone()}</h3>
                <div class="plan-card__meta">
                    <span>"📍 " {plan.location.clone()}</span>
                    <span>"👤 " {plan.participants}</span>
                </div>
                <div class="plan-card__footer">
                    <div class="plan-card__when">{date} {time}</div>
                    {price}
                </div>
                {interested}
            </div>
        </article>
    }
}
