use super::*;

// =============================================================
// card_style
// =============================================================

#[test]
fn resting_card_animates_back() {
    let style = card_style(&CardTransform::at(0.0), false);
    assert_eq!(
        style,
        "transform: translateX(0.0px) rotate(0.00deg); opacity: 1.000; transition: transform 300ms ease, opacity 300ms ease"
    );
}

#[test]
fn dragging_card_follows_pointer_without_transition() {
    let style = card_style(&CardTransform::at(-100.0), true);
    assert!(style.starts_with("transform: translateX(-100.0px) rotate(-12.50deg);"));
    assert!(style.ends_with("transition: none"));
}

#[test]
fn exiting_card_is_transparent() {
    let style = card_style(&CardTransform::at(200.0), false);
    assert!(style.contains("opacity: 0.000"));
}

// =============================================================
// position_text
// =============================================================

#[test]
fn position_is_one_based() {
    assert_eq!(position_text(Some((3, 7))), "3 / 7");
}

#[test]
fn exhausted_position_is_blank() {
    assert_eq!(position_text(None), "");
}
