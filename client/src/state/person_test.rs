use super::*;
use crate::data::fixtures::Catalog;
use time::macros::datetime;

fn person_with(photos: usize) -> Person {
    let mut person = Catalog::embedded(datetime!(2025-10-22 15:00 +3)).unwrap().people[0].clone();
    person.photos = (0..photos).map(|i| format!("photo-{i}.jpg")).collect();
    person
}

#[test]
fn empty_gallery_falls_back_to_main_photo() {
    let person = person_with(0);
    let cursor = PhotoCursor::for_person(&person);
    assert_eq!(cursor.len(), 1);
    assert_eq!(cursor.current(), Some(person.photo.as_str()));
    assert!(!cursor.has_many());
}

#[test]
fn next_wraps_forward() {
    for k in 1..=4 {
        let mut cursor = PhotoCursor::for_person(&person_with(k));
        for step in 1..=k {
            cursor.next_photo();
            assert_eq!(cursor.index(), step % k);
        }
        assert_eq!(cursor.index(), 0, "k = {k}");
    }
}

#[test]
fn prev_wraps_backward() {
    for k in 1..=4 {
        let mut cursor = PhotoCursor::for_person(&person_with(k));
        cursor.prev_photo();
        assert_eq!(cursor.index(), k - 1, "k = {k}");
        for _ in 1..k {
            cursor.prev_photo();
        }
        assert_eq!(cursor.index(), 0, "k = {k}");
    }
}

#[test]
fn next_then_prev_returns_home() {
    let mut cursor = PhotoCursor::for_person(&person_with(3));
    cursor.next_photo();
    cursor.prev_photo();
    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.current(), Some("photo-0.jpg"));
}

#[test]
fn indicators_only_with_several_photos() {
    assert!(!PhotoCursor::for_person(&person_with(1)).has_many());
    assert!(PhotoCursor::for_person(&person_with(2)).has_many());
}
