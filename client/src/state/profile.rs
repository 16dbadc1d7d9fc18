//! Current-user profile: badge selection and edit mode. Nothing is saved.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::data::types::Badge;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    /// Selected badges in the order they were picked.
    pub selected: Vec<Badge>,
    pub editing: bool,
}

impl ProfileState {
    #[must_use]
    pub fn new(selected: Vec<Badge>) -> Self {
        Self { selected, editing: false }
    }

    #[must_use]
    pub fn is_selected(&self, badge_id: &str) -> bool {
        self.selected.iter().any(|b| b.id == badge_id)
    }

    /// Remove the badge if selected, append it otherwise.
    pub fn toggle(&mut self, badge: &Badge) {
        if self.is_selected(&badge.id) {
            self.selected.retain(|b| b.id != badge.id);
        } else {
            self.selected.push(badge.clone());
        }
    }

    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
    }

    /// "Готово" while editing, "Изменить" otherwise.
    #[must_use]
    pub fn edit_button_label(&self) -> &'static str {
        if self.editing { "Готово" } else { "Изменить" }
    }
}

/// Badges the user may pick; verification badges are granted, not chosen.
#[must_use]
pub fn editable_badges(catalog: &[Badge]) -> Vec<Badge> {
    catalog.iter().filter(|b| !b.is_verified()).cloned().collect()
}
