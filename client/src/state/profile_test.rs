use super::*;
use crate::data::fixtures::Catalog;
use crate::data::types::BadgeCategory;
use time::macros::datetime;

fn catalog() -> Catalog {
    Catalog::embedded(datetime!(2025-10-22 15:00 +3)).unwrap()
}

fn initial() -> ProfileState {
    ProfileState::new(catalog().current_user.unwrap().badges)
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_is_an_involution() {
    let badges = catalog().badges;
    for badge in &badges {
        let mut state = initial();
        let before = state.selected.clone();
        state.toggle(badge);
        assert_ne!(state.selected, before, "{}", badge.id);
        state.toggle(badge);
        let mut a: Vec<&str> = state.selected.iter().map(|b| b.id.as_str()).collect();
        let mut b: Vec<&str> = before.iter().map(|b| b.id.as_str()).collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b, "{}", badge.id);
    }
}

#[test]
fn toggle_appends_new_badge_at_end() {
    let mut state = ProfileState::default();
    let badges = catalog().badges;
    state.toggle(&badges[2]);
    state.toggle(&badges[1]);
    assert_eq!(state.selected, vec![badges[2].clone(), badges[1].clone()]);
}

#[test]
fn toggle_removes_selected_badge() {
    let mut state = initial();
    let first = state.selected[1].clone();
    state.toggle(&first);
    assert!(!state.is_selected(&first.id));
}

// =============================================================
// Edit mode
// =============================================================

#[test]
fn edit_toggle_flips_label() {
    let mut state = initial();
    assert!(!state.editing);
    assert_eq!(state.edit_button_label(), "Изменить");
    state.toggle_editing();
    assert_eq!(state.edit_button_label(), "Готово");
}

#[test]
fn editable_catalog_excludes_verified() {
    let all = catalog().badges;
    let editable = editable_badges(&all);
    assert!(editable.iter().all(|b| b.category != BadgeCategory::Verified));
    assert_eq!(editable.len(), all.len() - 1);
}
