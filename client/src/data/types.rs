//! Domain records rendered by the screens.
//!
//! DESIGN
//! ======
//! These are the resolved, owned forms of the fixture data: a `Plan` carries
//! its interested people, a `Chat` carries its person and plan. Screens clone
//! what they need into local state and never mutate these records.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use time::OffsetDateTime;

/// Sender id used for messages written by the current user.
pub const SELF_SENDER_ID: &str = "me";

/// Grouping for badges on profiles and in the badge picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Lifestyle,
    Time,
    Interests,
    Verified,
}

/// A small labeled tag shown on a person.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Badge {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub category: BadgeCategory,
}

impl Badge {
    /// Chip text, icon first.
    #[must_use]
    pub fn chip_text(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }

    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.category == BadgeCategory::Verified
    }
}

/// A candidate person or the current user.
#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub photo: String,
    pub photos: Vec<String>,
    pub badges: Vec<Badge>,
    /// Displayed match percentage; mock data only.
    pub compatibility: Option<u32>,
    pub compatibility_reasons: Vec<String>,
    pub verified: bool,
    pub distance: Option<String>,
    pub bio: Option<String>,
    pub about: Option<String>,
}

impl Person {
    /// "Анна, 26".
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{}, {}", self.name, self.age)
    }

    /// Photos for the detail gallery; the main photo when no gallery exists.
    #[must_use]
    pub fn gallery(&self) -> Vec<String> {
        if self.photos.is_empty() {
            vec![self.photo.clone()]
        } else {
            self.photos.clone()
        }
    }
}

/// Kind of meetup a plan describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanCategory {
    Event,
    #[default]
    Casual,
    Activity,
}

impl PlanCategory {
    pub const ALL: [Self; 3] = [Self::Casual, Self::Event, Self::Activity];

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Event => "🎫",
            Self::Casual => "☕",
            Self::Activity => "🎯",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Event => "Событие",
            Self::Casual => "Casual",
            Self::Activity => "Активность",
        }
    }

    /// Icon and label, as shown on plan badges.
    #[must_use]
    pub fn badge_text(self) -> String {
        format!("{} {}", self.icon(), self.label())
    }

    /// Example activities shown in the create-plan picker.
    #[must_use]
    pub fn examples(self) -> &'static str {
        match self {
            Self::Event => "Концерт, выставка, театр",
            Self::Casual => "Кофе, прогулка, беседа",
            Self::Activity => "Спорт, хобби, игры",
        }
    }
}

/// A proposed meetup.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub id: String,
    pub title: String,
    pub category: PlanCategory,
    pub image: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: String,
    pub participants: u32,
    pub max_participants: Option<u32>,
    pub description: String,
    pub price: Option<String>,
    pub cashback: Option<String>,
    pub tags: Vec<String>,
    /// Ordered by relevance.
    pub interested_people: Vec<Person>,
    pub is_custom: bool,
    pub is_pair_activity: bool,
}

impl Plan {
    /// "3" or "3 / 6".
    #[must_use]
    pub fn participants_text(&self) -> String {
        match self.max_participants {
            Some(max) => format!("{} / {max}", self.participants),
            None => self.participants.to_string(),
        }
    }
}

/// Lifecycle of a meeting between the user and a person.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Confirmed,
    Pending,
    Completed,
}

impl MeetingStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Подтверждено",
            Self::Pending => "Ожидает",
            Self::Completed => "Завершено",
        }
    }
}

/// A plan the user agreed to attend with a specific person.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmedMeeting {
    pub id: String,
    pub plan: Plan,
    pub person: Person,
    pub date: String,
    pub time: String,
    pub status: MeetingStatus,
    pub is_today: bool,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub text: String,
    pub timestamp: OffsetDateTime,
    pub read: bool,
}

impl Message {
    /// Whether the current user wrote this message.
    #[must_use]
    pub fn is_own(&self) -> bool {
        self.sender_id == SELF_SENDER_ID
    }
}

/// A conversation about one plan with one person.
#[derive(Clone, Debug, PartialEq)]
pub struct Chat {
    pub id: String,
    pub person: Person,
    pub plan: Plan,
    /// Oldest first.
    pub messages: Vec<Message>,
    pub last_message: Option<Message>,
    pub unread_count: u32,
}
