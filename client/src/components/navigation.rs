//! Bottom tab bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the shell only on tab screens. The Chats tab carries the total
//! unread count from the catalog.

use leptos::prelude::*;

use crate::state::nav::Tab;

#[component]
pub fn Navigation(
    #[prop(into)] active: Signal<Option<Tab>>,
    unread: u32,
    on_tab_change: Callback<Tab>,
) -> impl IntoView {
    let tabs = Tab::ALL
        .into_iter()
        .map(|tab| {
            let badge = (tab == Tab::Chats && unread > 0).then(|| view! { <span class="nav__badge">{unread}</span> });
            view! {
                <button
                    class="nav__tab"
                    class:nav__tab--active=move || active.get() == Some(tab)
                    on:click=move |_| on_tab_change.run(tab)
                >
                    <span class="nav__icon">{tab.icon()} {badge}</span>
                    <span class="nav__label">{tab.label()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="nav">
            <div class="nav__inner">{tabs}</div>
        </nav>
    }
}
