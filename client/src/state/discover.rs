//! Discover screen: the candidate deck and the people liked this visit.

#[cfg(test)]
#[path = "discover_test.rs"]
mod discover_test;

use crate::data::types::Person;

const BASE_COMPATIBILITY: u32 = 85;
const COMPATIBILITY_STEP: u32 = 2;

const REASONS: [&str; 3] = [
    "Вы оба активны в вечернее время",
    "Схожий ритм жизни и предпочтения",
    "Общие интересы",
];

/// Copy `people` for the deck with mock compatibility `85 + 2 * index` and
/// the canned reasons.
#[must_use]
pub fn enrich_people(people: &[Person]) -> Vec<Person> {
    people
        .iter()
        .zip(0u32..)
        .map(|(person, index)| Person {
            compatibility: Some(BASE_COMPATIBILITY + COMPATIBILITY_STEP * index),
            compatibility_reasons: REASONS.iter().map(|r| (*r).to_owned()).collect(),
            ..person.clone()
        })
        .collect()
}

/// Local state of one Discover visit. Dropped on navigation away.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiscoverState {
    pub liked: Vec<Person>,
}

impl DiscoverState {
    pub fn record_like(&mut self, person: Person) {
        log::info!("liked {} ({})", person.name, person.id);
        self.liked.push(person);
    }

    pub fn record_skip(person: &Person) {
        log::debug!("skipped {} ({})", person.name, person.id);
    }
}
