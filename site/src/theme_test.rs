use super::*;
use crate::storage::MemoryStore;

#[test]
fn stored_preference_beats_system() {
    let store = MemoryStore::with_entries([("theme", "light")]);
    let theme = ThemeController::new(store, "theme", true);
    assert_eq!(theme.current(), Theme::Light);
    assert!(theme.has_explicit_choice());
}

#[test]
fn system_preference_used_without_stored_choice() {
    assert_eq!(ThemeController::new(MemoryStore::new(), "theme", true).current(), Theme::Dark);
    assert_eq!(ThemeController::new(MemoryStore::new(), "theme", false).current(), Theme::Light);
}

#[test]
fn invalid_stored_value_falls_back_to_system() {
    let store = MemoryStore::with_entries([("theme", "sepia")]);
    let theme = ThemeController::new(store, "theme", true);
    assert_eq!(theme.current(), Theme::Dark);
    assert!(!theme.has_explicit_choice());
}

#[test]
fn toggle_persists_choice() {
    let store = MemoryStore::new();
    let mut theme = ThemeController::new(store.clone(), "theme", false);
    assert_eq!(theme.toggle(), Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(theme.toggle(), Theme::Light);
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn system_changes_followed_until_user_toggles() {
    let mut theme = ThemeController::new(MemoryStore::new(), "theme", false);
    assert_eq!(theme.system_changed(true), Some(Theme::Dark));
    assert_eq!(theme.system_changed(true), None);

    theme.toggle();
    assert_eq!(theme.current(), Theme::Light);
    assert_eq!(theme.system_changed(true), None);
    assert_eq!(theme.current(), Theme::Light);
}
