//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app is a single route. Screen switching is driven by `NavState`, not
//! the URL, so every screen transition goes through the callbacks wired up
//! in `Screens` below.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation::Navigation;
use crate::components::toaster::{Toaster, push_notice};
use crate::data::fixtures::Catalog;
use crate::data::types::{Person, Plan};
use crate::pages::{
    chats::ChatsPage, create_plan::CreatePlanPage, discover::DiscoverPage, person_details::PersonDetailsPage,
    plan_details::PlanDetailsPage, plans_feed::PlansFeedPage, user_profile::UserProfilePage,
};
use crate::state::create_plan::PlanDraft;
use crate::state::nav::{NavState, Screen, Tab};
use crate::state::toast::{CHAT_OPENED_TEXT, NoticeKind, PLAN_CREATED_TEXT, SKIPPED_TEXT, ToastState, liked_text};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the fixture catalog, notices, and navigation state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(StoredValue::new(Catalog::load()));
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(RwSignal::new(NavState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/planmeet.css"/>
        <Title text="Планы"/>

        <Router>
            <Routes fallback=|| "Страница не найдена.".into_view()>
                <Route path=StaticSegment("") view=Screens/>
            </Routes>
        </Router>
    }
}

/// Active screen, bottom navigation, and notices.
#[component]
fn Screens() -> impl IntoView {
    let catalog = expect_context::<StoredValue<Catalog>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    let screen = Memo::new(move |_| nav.with(|n| n.screen));
    let unread = catalog.with_value(Catalog::total_unread);

    let on_plan_select = Callback::new(move |plan: Plan| nav.update(|n| n.select_plan(plan)));
    let on_person_select = Callback::new(move |person: Person| nav.update(|n| n.select_person(person)));
    let on_create_plan = Callback::new(move |()| nav.update(NavState::open_create_plan));
    let on_discover_people = Callback::new(move |()| nav.update(|n| n.change_tab(Tab::Discover)));
    let on_back_to_plans = Callback::new(move |()| nav.update(NavState::back_to_plans));
    let on_back_from_person = Callback::new(move |()| nav.update(NavState::back_from_person));
    let on_tab_change = Callback::new(move |tab: Tab| nav.update(|n| n.change_tab(tab)));

    let on_person_like = Callback::new(move |person: Person| {
        push_notice(toasts, NoticeKind::Success, liked_text(&person.name));
        nav.update(NavState::back_from_person);
    });
    let on_person_dislike = Callback::new(move |_person: Person| {
        push_notice(toasts, NoticeKind::Info, SKIPPED_TEXT);
        nav.update(NavState::back_from_person);
    });
    let on_person_message = Callback::new(move |_person: Person| {
        push_notice(toasts, NoticeKind::Success, CHAT_OPENED_TEXT);
        nav.update(NavState::open_chats);
    });
    let on_plan_created = Callback::new(move |draft: PlanDraft| {
        log::info!("plan created: {draft:?}");
        push_notice(toasts, NoticeKind::Success, PLAN_CREATED_TEXT);
        nav.update(NavState::plan_created);
    });

    let active = move || match screen.get() {
        Screen::Plans => view! {
            <PlansFeedPage
                on_plan_select=on_plan_select
                on_create_plan=on_create_plan
                on_discover_people=on_discover_people
            />
        }
        .into_any(),
        Screen::Discover => view! { <DiscoverPage on_person_select=on_person_select/> }.into_any(),
        Screen::Chats => view! { <ChatsPage/> }.into_any(),
        Screen::Profile => view! { <UserProfilePage/> }.into_any(),
        Screen::PlanDetails => match nav.with_untracked(|n| n.selected_plan.clone()) {
            Some(plan) => view! {
                <PlanDetailsPage plan=plan on_back=on_back_to_plans on_person_select=on_person_select/>
            }
            .into_any(),
            None => ().into_any(),
        },
        Screen::PersonDetails => match nav.with_untracked(|n| n.selected_person.clone()) {
            Some(person) => view! {
                <PersonDetailsPage
                    person=person
                    on_back=on_back_from_person
                    on_like=on_person_like
                    on_dislike=on_person_dislike
                    on_message=on_person_message
                />
            }
            .into_any(),
            None => ().into_any(),
        },
        Screen::CreatePlan => view! { <CreatePlanPage on_back=on_back_to_plans on_created=on_plan_created/> }.into_any(),
    };

    view! {
        <div class="app">
            {active}
            <Show when=move || screen.get().shows_navigation()>
                <Navigation
                    active=Signal::derive(move || screen.get().tab())
                    unread=unread
                    on_tab_change=on_tab_change
                />
            </Show>
            <Toaster/>
        </div>
    }
}
