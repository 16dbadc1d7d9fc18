use super::*;

fn person(photos: &[&str]) -> Person {
    Person {
        id: "p1".into(),
        name: "Анна".into(),
        age: 26,
        photo: "main.jpg".into(),
        photos: photos.iter().map(|p| (*p).to_owned()).collect(),
        badges: Vec::new(),
        compatibility: None,
        compatibility_reasons: Vec::new(),
        verified: false,
        distance: None,
        bio: None,
        about: None,
    }
}

// =============================================================
// Person
// =============================================================

#[test]
fn headline_joins_name_and_age() {
    assert_eq!(person(&[]).headline(), "Анна, 26");
}

#[test]
fn gallery_falls_back_to_main_photo() {
    assert_eq!(person(&[]).gallery(), vec!["main.jpg".to_owned()]);
}

#[test]
fn gallery_prefers_photo_list() {
    assert_eq!(person(&["a.jpg", "b.jpg"]).gallery(), vec!["a.jpg".to_owned(), "b.jpg".to_owned()]);
}

// =============================================================
// Enums
// =============================================================

#[test]
fn plan_category_badge_text() {
    assert_eq!(PlanCategory::Event.badge_text(), "🎫 Событие");
    assert_eq!(PlanCategory::Casual.badge_text(), "☕ Casual");
    assert_eq!(PlanCategory::Activity.badge_text(), "🎯 Активность");
}

#[test]
fn meeting_status_labels() {
    assert_eq!(MeetingStatus::Confirmed.label(), "Подтверждено");
    assert_eq!(MeetingStatus::Pending.label(), "Ожидает");
    assert_eq!(MeetingStatus::Completed.label(), "Завершено");
}

#[test]
fn badge_category_decodes_lowercase() {
    let badge: Badge =
        serde_json::from_str(r#"{"id":"b","label":"T-ID","icon":"✓","category":"verified"}"#).unwrap();
    assert!(badge.is_verified());
    assert_eq!(badge.chip_text(), "✓ T-ID");
}

// =============================================================
// Message
// =============================================================

#[test]
fn own_message_uses_self_sender_id() {
    let msg = Message {
        id: "m".into(),
        sender_id: SELF_SENDER_ID.into(),
        text: "Привет".into(),
        timestamp: OffsetDateTime::UNIX_EPOCH,
        read: true,
    };
    assert!(msg.is_own());
    let other = Message { sender_id: "p1".into(), ..msg };
    assert!(!other.is_own());
}
