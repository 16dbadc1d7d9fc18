//! Photo gallery cursor for the person detail screen.

#[cfg(test)]
#[path = "person_test.rs"]
mod person_test;

use crate::data::types::Person;

/// Index into a fixed photo list that wraps in both directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoCursor {
    photos: Vec<String>,
    index: usize,
}

impl PhotoCursor {
    /// Cursor over `person`'s gallery, or its main photo when the gallery is
    /// empty.
    #[must_use]
    pub fn for_person(person: &Person) -> Self {
        Self { photos: person.gallery(), index: 0 }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.photos.get(self.index).map(String::as_str)
    }

    /// Indicators and tap zones only make sense with more than one photo.
    #[must_use]
    pub fn has_many(&self) -> bool {
        self.photos.len() > 1
    }

    pub fn next_photo(&mut self) {
        if self.photos.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.photos.len();
    }

    pub fn prev_photo(&mut self) {
        if self.photos.is_empty() {
            return;
        }
        self.index = self.index.checked_sub(1).unwrap_or(self.photos.len() - 1);
    }
}
