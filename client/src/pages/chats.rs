//! Chats: conversation list and a single conversation view.
//!
//! SYSTEM CONTEXT
//! ==============
//! List and detail share one `ChatsState`; opening a chat swaps the list for
//! the conversation in place, and the back arrow returns to the list without
//! leaving the tab. Sent messages are logged and the draft cleared.

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::data::fixtures::{Catalog, DISPLAY_OFFSET};
use crate::data::types::Chat;
use crate::state::chats::{ChatsState, is_send_key, message_rows};
use crate::util::format::clock;

#[component]
pub fn ChatsPage() -> impl IntoView {
    let catalog = expect_context::<StoredValue<Catalog>>();
    let state = RwSignal::new(ChatsState::default());

    // Keyed on the selection only; draft edits must not rebuild the view.
    let selected = Memo::new(move |_| state.with(|s| s.selected.clone()));
    let open_chat = move || {
        selected.track();
        catalog.with_value(|c| state.with_untracked(|s| s.current(&c.chats).cloned()))
    };

    move || match open_chat() {
        Some(chat) => view! { <ChatView chat=chat state=state/> }.into_any(),
        None => view! { <ChatList chats=catalog.with_value(|c| c.chats.clone()) state=state/> }.into_any(),
    }
}

#[component]
fn ChatList(chats: Vec<Chat>, state: RwSignal<ChatsState>) -> impl IntoView {
    let body = if chats.is_empty() {
        view! {
            <div class="empty">
                <div class="empty__icon">"💬"</div>
                <p class="empty__title">"Нет активных чатов"</p>
                <p class="empty__text">"Начните общение с интересными людьми"</p>
            </div>
        }
        .into_any()
    } else {
        chats
            .into_iter()
            .map(|chat| {
                let id = chat.id.clone();
                let unread = chat.unread_count;
                let last = chat.last_message.as_ref().map(|m| (m.text.clone(), clock(m.timestamp)));
                let (last_text, last_time) = last.unzip();
                view! {
                    <button class="chat-row" on:click=move |_| state.update(|s| s.open(&id))>
                        <div class="avatar avatar--md">
                            <img src=chat.person.photo.clone() alt=chat.person.name.clone()/>
                            <Show when=move || unread != 0>
                                <span class="avatar__badge">{unread}</span>
                            </Show>
                        </div>
                        <div class="chat-row__body">
                            <div class="chat-row__top">
                                <span class="chat-row__name">{chat.person.name.clone()}</span>
                                <span class="chat-row__time">{last_time}</span>
                            </div>
                            <p class="chat-row__plan">{chat.plan.category.icon()} " " {chat.plan.title.clone()}</p>
                            <p class="chat-row__last" class:chat-row__last--unread=unread != 0>{last_text}</p>
                        </div>
                    </button>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="screen">
            <header class="screen__header screen__header--sticky">
                <h1 class="screen__title">"Чаты"</h1>
                <p class="screen__subtitle">"Обсуди детали встречи"</p>
            </header>
            <main class="chat-list">{body}</main>
            <div class="nav-spacer"></div>
        </div>
    }
}

#[component]
fn ChatView(chat: Chat, state: RwSignal<ChatsState>) -> impl IntoView {
    let today = OffsetDateTime::now_utc().to_offset(DISPLAY_OFFSET).date();
    let rows = message_rows(&chat.messages, today)
        .into_iter()
        .map(|row| {
            let separator = row.separator.map(|label| view! { <div class="day-separator"><span>{label}</span></div> });
            view! {
                {separator}
                <div class="bubble-row" class:bubble-row--own=row.own>
                    <div class="bubble" class:bubble--own=row.own>
                        <p class="bubble__text">{row.message.text}</p>
                        <span class="bubble__time">{row.time}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    let send = move || {
        if let Some(Some(_)) = state.try_update(ChatsState::send) {
            log::debug!("draft cleared after send");
        }
    };

    view! {
        <div class="screen screen--chat">
            <header class="chat-header">
                <button class="icon-btn" aria-label="Назад" on:click=move |_| state.update(ChatsState::close)>
                    "←"
                </button>
                <img class="avatar avatar--sm" src=chat.person.photo.clone() alt=chat.person.name.clone()/>
                <div class="chat-header__text">
                    <h2 class="chat-header__name">{chat.person.name.clone()}</h2>
                    <p class="chat-header__plan">{chat.plan.title.clone()}</p>
                </div>
            </header>

            <div class="plan-context">
                <img class="plan-context__image" src=chat.plan.image.clone() alt=chat.plan.title.clone()/>
                <div>
                    <p class="plan-context__title">{chat.plan.title.clone()}</p>
                    <p class="plan-context__meta">
                        {chat.plan.date.clone().unwrap_or_default()} " " {chat.plan.time.clone().unwrap_or_default()}
                    </p>
                    <p class="plan-context__meta">"📍 " {chat.plan.location.clone()}</p>
                </div>
            </div>

            <main class="messages">{rows}</main>

            <footer class="composer">
                <input
                    class="input composer__input"
                    type="text"
                    placeholder="Написать сообщение..."
                    prop:value=move || state.with(|s| s.draft.clone())
                    on:input=move |ev| state.update(|s| s.draft = event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if is_send_key(&ev.key(), ev.shift_key()) {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <button
                    class="round-btn round-btn--blue composer__send"
                    aria-label="Отправить"
                    disabled=move || !state.with(ChatsState::can_send)
                    on:click=move |_| send()
                >
                    "➤"
                </button>
            </footer>
        </div>
    }
}
