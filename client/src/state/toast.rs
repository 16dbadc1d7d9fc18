//! Transient notices raised by action callbacks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell owns a `ToastState` signal and the `Toaster` component renders
//! it. Each push returns an id; the hydrated build schedules a dismiss for
//! that id after `NOTICE_TTL_MS`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a notice stays on screen.
pub const NOTICE_TTL_MS: u32 = 3_000;

/// Oldest notices are dropped beyond this many.
pub const MAX_VISIBLE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
}

impl NoticeKind {
    #[must_use]
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    /// Oldest first.
    pub notices: Vec<Notice>,
    next_id: u64,
}

impl ToastState {
    /// Show a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let text = text.into();
        log::info!("notice {id}: {text}");
        self.notices.push(Notice { id, kind, text });
        if self.notices.len() > MAX_VISIBLE {
            let excess = self.notices.len() - MAX_VISIBLE;
            self.notices.drain(..excess);
        }
        id
    }

    /// Remove a notice. Returns whether it was still showing.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }
}

// =============================================================================
// CANNED TEXTS
// =============================================================================

#[must_use]
pub fn liked_text(name: &str) -> String {
    format!("Вы лайкнули {name}! 💚")
}

pub const SKIPPED_TEXT: &str = "Пропущено";
pub const CHAT_OPENED_TEXT: &str = "Чат открыт! 💬";
pub const PLAN_CREATED_TEXT: &str = "План создан! 🎉";
