use super::*;

#[test]
fn submit_then_sent() {
    let mut form = ContactForm::default();
    assert!(form.submit());
    assert!(!form.submit());
    assert_eq!(form.sent(), Some(1));
    assert!(form.submit());
}

#[test]
fn double_submit_is_ignored() {
    let mut form = ContactForm::default();
    assert!(form.submit());
    assert!(!form.submit());
}

#[test]
fn sent_without_submit_is_noop() {
    let mut form = ContactForm::default();
    assert_eq!(form.sent(), None);
}

#[test]
fn older_auto_hide_does_not_hide_newer_status() {
    let mut form = ContactForm::default();
    form.submit();
    let first = form.sent().unwrap();
    form.submit();
    let second = form.sent().unwrap();
    assert!(!form.status_expired(first));
    assert!(form.status_expired(second));
}

