//! Chats screen: list/detail toggle, compose box, and message layout.
//!
//! DESIGN
//! ======
//! Sending is local only. A send validates the draft, logs it, and clears the
//! box; the conversation itself is never appended to.

#[cfg(test)]
#[path = "chats_test.rs"]
mod chats_test;

use time::Date;

use crate::data::types::{Chat, Message};
use crate::util::format::{clock, day_label};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatsState {
    /// Id of the open conversation; `None` shows the list.
    pub selected: Option<String>,
    pub draft: String,
}

impl ChatsState {
    pub fn open(&mut self, chat_id: &str) {
        self.selected = Some(chat_id.to_owned());
        self.draft.clear();
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.draft.clear();
    }

    /// The open conversation, if it still exists in `chats`.
    #[must_use]
    pub fn current<'a>(&self, chats: &'a [Chat]) -> Option<&'a Chat> {
        let id = self.selected.as_deref()?;
        chats.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn can_send(&self) -> bool {
        self.selected.is_some() && !self.draft.trim().is_empty()
    }

    /// Consume the draft. Returns the text that was "sent", or `None` when
    /// the draft is blank or no conversation is open.
    pub fn send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        log::info!("send message to {}: {text}", self.selected.as_deref().unwrap_or_default());
        Some(text)
    }
}

/// Enter sends; Shift+Enter does not.
#[must_use]
pub fn is_send_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// One rendered line of a conversation.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageRow {
    /// Day label to show above this message, when the day changed.
    pub separator: Option<String>,
    pub message: Message,
    pub time: String,
    pub own: bool,
}

/// Lay out `messages` with a day separator before the first message and at
/// every day change.
#[must_use]
pub fn message_rows(messages: &[Message], today: Date) -> Vec<MessageRow> {
    let mut previous: Option<String> = None;
    messages
        .iter()
        .map(|message| {
            let label = day_label(message.timestamp, today);
            let separator = (previous.as_deref() != Some(label.as_str())).then(|| label.clone());
            previous = Some(label);
            MessageRow { separator, time: clock(message.timestamp), own: message.is_own(), message: message.clone() }
        })
        .collect()
}
