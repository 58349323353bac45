use super::*;

#[test]
fn labels_match_control_kind() {
    assert_eq!(control_label(&PageControl::Prev { target: 0, disabled: true }), "‹ Prev");
    assert_eq!(control_label(&PageControl::Page { number: 12, active: false }), "12");
    assert_eq!(control_label(&PageControl::Ellipsis), "...");
    assert_eq!(control_label(&PageControl::Next { target: 3, disabled: false }), "Next ›");
}

#[test]
fn ellipsis_has_no_aria_label() {
    assert_eq!(control_aria_label(&PageControl::Ellipsis), None);
    assert_eq!(control_aria_label(&PageControl::Page { number: 2, active: true }).as_deref(), Some("Page 2"));
    assert_eq!(control_aria_label(&PageControl::Prev { target: 1, disabled: false }).as_deref(), Some("Previous page"));
}
