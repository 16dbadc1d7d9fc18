//! Stack of transient notices.

use leptos::prelude::*;

use crate::state::toast::{NOTICE_TTL_MS, NoticeKind, ToastState};
use crate::util::timer;

/// Show a notice and schedule its dismissal.
pub fn push_notice(toasts: RwSignal<ToastState>, kind: NoticeKind, text: impl Into<String>) {
    let text = text.into();
    let Some(id) = toasts.try_update(|t| t.push(kind, text)) else {
        return;
    };
    timer::after(NOTICE_TTL_MS, move || {
        toasts.try_update(|t| t.dismiss(id));
    });
}

/// Renders the notices in the shell's `ToastState`. Clicking a notice
/// dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().notices
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=format!("toast {}", notice.kind.as_class())
                            on:click=move |_| {
                                toasts.update(|t| {
                                    t.dismiss(id);
                                });
                            }
                        >
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
