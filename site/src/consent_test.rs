use super::*;
use crate::analytics::RecordingAnalytics;
use crate::storage::MemoryStore;

const CHOICE_KEY: &str = "wulkan_kibo_consent";
const VERSION_KEY: &str = "wulkan_kibo_consent_version";

fn manager(store: &MemoryStore) -> (ConsentManager<MemoryStore, RecordingAnalytics>, RecordingAnalytics) {
    let analytics = RecordingAnalytics::new();
    (ConsentManager::new(store.clone(), analytics.clone(), SiteConfig::default()), analytics)
}

fn granted_update() -> GtagCommand {
    GtagCommand::ConsentUpdate(ConsentFlags::all(FlagState::Granted))
}

// =============================================================
// init
// =============================================================

#[test]
fn current_granted_record_applies_without_modal() {
    let store = MemoryStore::with_entries([(CHOICE_KEY, "granted"), (VERSION_KEY, "1.0")]);
    let (mut consent, analytics) = manager(&store);

    assert_eq!(consent.init(), ConsentDecision::Applied(ConsentChoice::Granted));
    assert_eq!(consent.phase(), ConsentPhase::Applied(ConsentChoice::Granted));
    assert_eq!(analytics.commands(), vec![granted_update()]);
}

#[test]
fn current_denied_record_applies_without_analytics_call() {
    let store = MemoryStore::with_entries([(CHOICE_KEY, "denied"), (VERSION_KEY, "1.0")]);
    let (mut consent, analytics) = manager(&store);

    assert_eq!(consent.init(), ConsentDecision::Applied(ConsentChoice::Denied));
    assert!(analytics.commands().is_empty());
}

#[test]
fn outdated_version_shows_modal() {
    let store = MemoryStore::with_entries([(CHOICE_KEY, "granted"), (VERSION_KEY, "0.9")]);
    let (mut consent, analytics) = manager(&store);

    assert_eq!(consent.init(), ConsentDecision::ShowModal);
    assert_eq!(consent.phase(), ConsentPhase::ModalShown);
    assert!(analytics.commands().is_empty());
}

#[test]
fn missing_version_shows_modal() {
    let store = MemoryStore::with_entries([(CHOICE_KEY, "granted")]);
    let (mut consent, _) = manager(&store);
    assert_eq!(consent.init(), ConsentDecision::ShowModal);
}

#[test]
fn empty_storage_shows_modal() {
    let (mut consent, _) = manager(&MemoryStore::new());
    assert_eq!(consent.init(), ConsentDecision::ShowModal);
}

#[test]
fn garbage_choice_is_treated_as_absent() {
    let store = MemoryStore::with_entries([(CHOICE_KEY, "maybe"), (VERSION_KEY, "1.0")]);
    let (mut consent, _) = manager(&store);
    assert_eq!(consent.init(), ConsentDecision::ShowModal);
}

// =============================================================
// choose / reset
// =============================================================

#[test]
fn accepting_persists_current_version_and_grants() {
    let store = MemoryStore::with_entries([(CHOICE_KEY, "denied"), (VERSION_KEY, "0.9")]);
    let (mut consent, analytics) = manager(&store);
    consent.init();

    let fade = consent.choose(ConsentChoice::Granted);

    assert_eq!(fade, Duration::from_millis(300));
    assert_eq!(store.get(CHOICE_KEY).as_deref(), Some("granted"));
    assert_eq!(store.get(VERSION_KEY).as_deref(), Some("1.0"));
    assert_eq!(consent.phase(), ConsentPhase::Applied(ConsentChoice::Granted));
    assert_eq!(analytics.commands(), vec![granted_update()]);
}

#[test]
fn rejecting_persists_without_analytics_call() {
    let store = MemoryStore::new();
    let (mut consent, analytics) = manager(&store);
    consent.init();

    consent.choose(ConsentChoice::Denied);

    assert_eq!(store.get(CHOICE_KEY).as_deref(), Some("denied"));
    assert!(analytics.commands().is_empty());
}

#[test]
fn reset_clears_both_keys_and_next_load_is_unknown() {
    let store = MemoryStore::with_entries([(CHOICE_KEY, "granted"), (VERSION_KEY, "1.0")]);
    let (mut consent, _) = manager(&store);
    consent.init();

    consent.reset().unwrap();

    assert_eq!(consent.phase(), ConsentPhase::Unknown);
    assert!(store.is_empty());
    let (mut reloaded, _) = manager(&store);
    assert_eq!(reloaded.phase(), ConsentPhase::Unknown);
    assert_eq!(reloaded.init(), ConsentDecision::ShowModal);
}

#[test]
fn choice_survives_reload() {
    let store = MemoryStore::new();
    let (mut first, _) = manager(&store);
    first.init();
    first.choose(ConsentChoice::Granted);

    let (mut second, analytics) = manager(&store);
    assert_eq!(second.init(), ConsentDecision::Applied(ConsentChoice::Granted));
    assert_eq!(analytics.commands().len(), 1);
}

#[test]
fn bumped_config_version_reprompts() {
    let store = MemoryStore::with_entries([(CHOICE_KEY, "granted"), (VERSION_KEY, "1.0")]);
    let config = SiteConfig { consent_version: "2.0".into(), ..SiteConfig::default() };
    let mut consent = ConsentManager::new(store, RecordingAnalytics::new(), config);
    assert_eq!(consent.init(), ConsentDecision::ShowModal);
}

// =============================================================
// status
// =============================================================

#[test]
fn status_reports_stored_record() {
    let store = MemoryStore::with_entries([(CHOICE_KEY, "granted"), (VERSION_KEY, "1.0")]);
    let (consent, _) = manager(&store);
    let status = consent.status();
    assert!(status.current);
    assert_eq!(status.to_string(), "Consent: granted; Version: 1.0; Status: stored (current)");
}

#[test]
fn status_without_record() {
    let (consent, _) = manager(&MemoryStore::new());
    let status = consent.status();
    assert!(!status.current);
    assert_eq!(status.to_string(), "Status: no consent stored (modal should show)");
}

#[test]
fn status_flags_outdated_record() {
    let store = MemoryStore::with_entries([(CHOICE_KEY, "denied")]);
    let (consent, _) = manager(&store);
    assert_eq!(
        consent.status().to_string(),
        "Consent: denied; Version: N/A; Status: stored (outdated, modal will show)"
    );
}

#[test]
fn choice_parses_from_storage_strings() {
    assert_eq!("granted".parse::<ConsentChoice>(), Ok(ConsentChoice::Granted));
    assert_eq!("denied".parse::<ConsentChoice>(), Ok(ConsentChoice::Denied));
    assert!("Granted".parse::<ConsentChoice>().is_err());
}
