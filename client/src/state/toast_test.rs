use super::*;

// =============================================================
// Push / dismiss
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(NoticeKind::Success, "a");
    let b = state.push(NoticeKind::Info, "b");
    assert!(b > a);
    assert_eq!(state.notices.len(), 2);
    assert_eq!(state.notices[0].kind, NoticeKind::Success);
    assert_eq!(state.notices[1].kind, NoticeKind::Info);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = ToastState::default();
    let a = state.push(NoticeKind::Success, "a");
    let b = state.push(NoticeKind::Success, "b");
    assert!(state.dismiss(a));
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].id, b);
}

#[test]
fn dismiss_twice_is_noop() {
    let mut state = ToastState::default();
    let a = state.push(NoticeKind::Success, "a");
    assert!(state.dismiss(a));
    assert!(!state.dismiss(a));
}

#[test]
fn oldest_notices_drop_past_limit() {
    let mut state = ToastState::default();
    let ids: Vec<u64> = (0..5).map(|i| state.push(NoticeKind::Info, format!("n{i}"))).collect();
    assert_eq!(state.notices.len(), MAX_VISIBLE);
    let kept: Vec<u64> = state.notices.iter().map(|n| n.id).collect();
    assert_eq!(kept, ids[ids.len() - MAX_VISIBLE..]);
}

// =============================================================
// Texts
// =============================================================

#[test]
fn liked_text_names_person() {
    assert_eq!(liked_text("Анна"), "Вы лайкнули Анна! 💚");
}

#[test]
fn kind_classes() {
    assert_eq!(NoticeKind::Success.as_class(), "toast--success");
    assert_eq!(NoticeKind::Info.as_class(), "toast--info");
}
