//! Embedded mock catalog.
//!
//! DESIGN
//! ======
//! The fixture document stores every record once and links records by id.
//! `Catalog::from_json` validates ids and resolves links into the owned,
//! nested shapes of `data::types`. Message times are stored relative to the
//! load instant so day separators stay meaningful on any day.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell loads the catalog once and provides it as context. A load
//! failure is logged and replaced by an empty catalog; every screen has an
//! empty state for that case.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use std::collections::HashMap;

use serde::Deserialize;
use time::{Duration, OffsetDateTime, UtcOffset};

use super::types::{Badge, Chat, ConfirmedMeeting, MeetingStatus, Message, Person, Plan, PlanCategory};

const FIXTURES_JSON: &str = include_str!("fixtures.json");

/// Offset used for every displayed time (Moscow).
pub const DISPLAY_OFFSET: UtcOffset = time::macros::offset!(+3);

/// Reasons the embedded catalog could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("malformed fixture json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },
    #[error("`{owner}` references unknown {kind} `{id}`")]
    UnknownReference { owner: String, kind: &'static str, id: String },
    #[error("`{owner}` message `{id}` is dated outside the representable range")]
    TimestampOutOfRange { owner: String, id: String },
}

// =============================================================================
// RAW DOCUMENT
// =============================================================================

#[derive(Deserialize)]
struct RawCatalog {
    badges: Vec<Badge>,
    current_user: String,
    people: Vec<RawPerson>,
    plans: Vec<RawPlan>,
    #[serde(default)]
    meetings: Vec<RawMeeting>,
    #[serde(default)]
    chats: Vec<RawChat>,
}

#[derive(Deserialize)]
struct RawPerson {
    id: String,
    name: String,
    age: u32,
    photo: String,
    #[serde(default)]
    photos: Vec<String>,
    #[serde(default)]
    badges: Vec<String>,
    compatibility: Option<u32>,
    #[serde(default)]
    compatibility_reasons: Vec<String>,
    #[serde(default)]
    verified: bool,
    distance: Option<String>,
    bio: Option<String>,
    about: Option<String>,
}

#[derive(Deserialize)]
struct RawPlan {
    id: String,
    title: String,
    category: PlanCategory,
    image: String,
    date: Option<String>,
    time: Option<String>,
    location: String,
    participants: u32,
    max_participants: Option<u32>,
    description: String,
    price: Option<String>,
    cashback: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    interested_people: Vec<String>,
    #[serde(default)]
    is_custom: bool,
    #[serde(default)]
    is_pair_activity: bool,
}

#[derive(Deserialize)]
struct RawMeeting {
    id: String,
    plan: String,
    person: String,
    date: String,
    time: String,
    status: MeetingStatus,
    #[serde(default)]
    is_today: bool,
}

#[derive(Deserialize)]
struct RawChat {
    id: String,
    person: String,
    plan: String,
    #[serde(default)]
    unread_count: u32,
    messages: Vec<RawMessage>,
}

#[derive(Deserialize)]
struct RawMessage {
    id: String,
    sender_id: String,
    text: String,
    minutes_ago: i64,
    #[serde(default)]
    read: bool,
}

// =============================================================================
// CATALOG
// =============================================================================

/// Every record the screens render, fully resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    /// Badge catalog in display order.
    pub badges: Vec<Badge>,
    /// Candidate people, excluding the current user.
    pub people: Vec<Person>,
    pub current_user: Option<Person>,
    pub plans: Vec<Plan>,
    pub meetings: Vec<ConfirmedMeeting>,
    pub chats: Vec<Chat>,
}

impl Catalog {
    /// Decode and resolve a fixture document. Relative message times are
    /// anchored at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] when the JSON is malformed, an id repeats, or a
    /// reference names a record that does not exist.
    pub fn from_json(raw: &str, now: OffsetDateTime) -> Result<Self, FixtureError> {
        let doc: RawCatalog = serde_json::from_str(raw)?;
        resolve(doc, now)
    }

    /// The catalog compiled into the client.
    ///
    /// # Errors
    ///
    /// See [`Catalog::from_json`].
    pub fn embedded(now: OffsetDateTime) -> Result<Self, FixtureError> {
        Self::from_json(FIXTURES_JSON, now)
    }

    /// Load the embedded catalog, falling back to an empty one on failure.
    pub fn load() -> Self {
        let now = OffsetDateTime::now_utc().to_offset(DISPLAY_OFFSET);
        match Self::embedded(now) {
            Ok(catalog) => {
                log::debug!(
                    "catalog loaded: {} people, {} plans, {} chats",
                    catalog.people.len(),
                    catalog.plans.len(),
                    catalog.chats.len()
                );
                catalog
            }
            Err(e) => {
                log::error!("catalog load failed: {e}");
                Self::default()
            }
        }
    }

    /// Sum of unread counts across chats, shown on the Chats tab.
    #[must_use]
    pub fn total_unread(&self) -> u32 {
        self.chats.iter().map(|c| c.unread_count).sum()
    }
}

// =============================================================================
// RESOLUTION
// =============================================================================

fn resolve(doc: RawCatalog, now: OffsetDateTime) -> Result<Catalog, FixtureError> {
    let badges_by_id = index_unique("badge", &doc.badges, |b| &b.id)?;
    index_unique("person", &doc.people, |p| &p.id)?;
    index_unique("plan", &doc.plans, |p| &p.id)?;

    let mut people_by_id = HashMap::with_capacity(doc.people.len());
    let mut order = Vec::with_capacity(doc.people.len());
    for raw in doc.people {
        let person = resolve_person(raw, &badges_by_id)?;
        order.push(person.id.clone());
        people_by_id.insert(person.id.clone(), person);
    }

    let current_user = people_by_id.get(&doc.current_user).cloned().ok_or_else(|| {
        FixtureError::UnknownReference {
            owner: "catalog".to_owned(),
            kind: "person",
            id: doc.current_user.clone(),
        }
    })?;

    let plans = doc
        .plans
        .into_iter()
        .map(|raw| resolve_plan(raw, &people_by_id))
        .collect::<Result<Vec<_>, _>>()?;
    let plans_by_id: HashMap<&str, &Plan> = plans.iter().map(|p| (p.id.as_str(), p)).collect();

    let meetings = doc
        .meetings
        .into_iter()
        .map(|raw| -> Result<ConfirmedMeeting, FixtureError> {
            Ok(ConfirmedMeeting {
                plan: lookup(&plans_by_id, &raw.id, "plan", &raw.plan)?,
                person: lookup_person(&people_by_id, &raw.id, &raw.person)?,
                id: raw.id,
                date: raw.date,
                time: raw.time,
                status: raw.status,
                is_today: raw.is_today,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let chats = doc
        .chats
        .into_iter()
        .map(|raw| resolve_chat(raw, &people_by_id, &plans_by_id, now))
        .collect::<Result<Vec<_>, _>>()?;

    let people = order
        .iter()
        .filter(|id| **id != doc.current_user)
        .filter_map(|id| people_by_id.get(id).cloned())
        .collect();

    Ok(Catalog { badges: doc.badges, people, current_user: Some(current_user), plans, meetings, chats })
}

fn index_unique<'a, T>(
    kind: &'static str,
    items: &'a [T],
    id: impl Fn(&'a T) -> &'a String,
) -> Result<HashMap<&'a str, &'a T>, FixtureError> {
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        let key = id(item).as_str();
        if map.insert(key, item).is_some() {
            return Err(FixtureError::DuplicateId { kind, id: key.to_owned() });
        }
    }
    Ok(map)
}

fn resolve_person(raw: RawPerson, badges: &HashMap<&str, &Badge>) -> Result<Person, FixtureError> {
    let resolved = raw
        .badges
        .iter()
        .map(|id| {
            badges.get(id.as_str()).map(|b| (*b).clone()).ok_or_else(|| FixtureError::UnknownReference {
                owner: raw.id.clone(),
                kind: "badge",
                id: id.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Person {
        id: raw.id,
        name: raw.name,
        age: raw.age,
        photo: raw.photo,
        photos: raw.photos,
        badges: resolved,
        compatibility: raw.compatibility,
        compatibility_reasons: raw.compatibility_reasons,
        verified: raw.verified,
        distance: raw.distance,
        bio: raw.bio,
        about: raw.about,
    })
}

fn resolve_plan(raw: RawPlan, people: &HashMap<String, Person>) -> Result<Plan, FixtureError> {
    let interested_people = raw
        .interested_people
        .iter()
        .map(|id| lookup_person(people, &raw.id, id))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Plan {
        id: raw.id,
        title: raw.title,
        category: raw.category,
        image: raw.image,
        date: raw.date,
        time: raw.time,
        location: raw.location,
        participants: raw.participants,
        max_participants: raw.max_participants,
        description: raw.description,
        price: raw.price,
        cashback: raw.cashback,
        tags: raw.tags,
        interested_people,
        is_custom: raw.is_custom,
        is_pair_activity: raw.is_pair_activity,
    })
}

fn resolve_chat(
    raw: RawChat,
    people: &HashMap<String, Person>,
    plans: &HashMap<&str, &Plan>,
    now: OffsetDateTime,
) -> Result<Chat, FixtureError> {
    let person = lookup_person(people, &raw.id, &raw.person)?;
    let plan = lookup(plans, &raw.id, "plan", &raw.plan)?;
    let messages = raw
        .messages
        .into_iter()
        .map(|m| {
            let timestamp = m
                .minutes_ago
                .checked_mul(60)
                .and_then(|secs| now.checked_sub(Duration::seconds(secs)))
                .ok_or_else(|| FixtureError::TimestampOutOfRange { owner: raw.id.clone(), id: m.id.clone() })?;
            Ok(Message { id: m.id, sender_id: m.sender_id, text: m.text, timestamp, read: m.read })
        })
        .collect::<Result<Vec<Message>, FixtureError>>()?;
    Ok(Chat {
        id: raw.id,
        person,
        plan,
        last_message: messages.last().cloned(),
        messages,
        unread_count: raw.unread_count,
    })
}

fn lookup_person(people: &HashMap<String, Person>, owner: &str, id: &str) -> Result<Person, FixtureError> {
    people.get(id).cloned().ok_or_else(|| FixtureError::UnknownReference {
        owner: owner.to_owned(),
        kind: "person",
        id: id.to_owned(),
    })
}

fn lookup<T: Clone>(
    map: &HashMap<&str, &T>,
    owner: &str,
    kind: &'static str,
    id: &str,
) -> Result<T, FixtureError> {
    map.get(id).map(|v| (*v).clone()).ok_or_else(|| FixtureError::UnknownReference {
        owner: owner.to_owned(),
        kind,
        id: id.to_owned(),
    })
}
