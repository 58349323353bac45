use serde_json::json;

use super::*;
use crate::storage::MemoryStore;

#[derive(Default)]
struct FakeElement {
    key: Option<String>,
    html: bool,
    attr: Option<String>,
    text: String,
    inner_html: String,
    attributes: Vec<(String, String)>,
}

impl FakeElement {
    fn keyed(key: &str, text: &str) -> Self {
        Self { key: Some(key.to_owned()), text: text.to_owned(), ..Self::default() }
    }
}

impl TranslationTarget for FakeElement {
    fn key(&self) -> Option<String> {
        self.key.clone()
    }
    fn renders_html(&self) -> bool {
        self.html
    }
    fn target_attribute(&self) -> Option<String> {
        self.attr.clone()
    }
    fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
    }
    fn set_html(&mut self, html: &str) {
        self.inner_html = html.to_owned();
    }
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.push((name.to_owned(), value.to_owned()));
    }
}

fn dict() -> Dictionary {
    Dictionary::new(json!({
        "nav": { "home": "Home", "recipes": "Recipes" },
        "hero": { "title": "<em>Taste</em> of Africa", "count": 14, "flag": true, "none": null },
        "list": ["a", "b"],
    }))
}

// =============================================================
// lookup
// =============================================================

#[test]
fn lookup_returns_exact_nested_value() {
    let d = dict();
    assert_eq!(d.lookup("nav.home"), Some(&json!("Home")));
    assert_eq!(d.lookup("nav"), Some(&json!({ "home": "Home", "recipes": "Recipes" })));
}

#[test]
fn lookup_missing_segment_is_not_found() {
    let d = dict();
    assert_eq!(d.lookup("nav.about"), None);
    assert_eq!(d.lookup("footer.copy"), None);
    assert_eq!(d.lookup("nav.home.deeper"), None);
    assert_eq!(d.lookup("list.2"), None);
    assert_eq!(d.lookup("list.first"), None);
}

#[test]
fn lookup_walks_arrays_by_index() {
    let d = dict();
    assert_eq!(d.lookup("list.0"), Some(&json!("a")));
    assert_eq!(d.lookup("list.1"), Some(&json!("b")));
}

#[test]
fn text_reaches_scalars_through_an_index() {
    let d = Dictionary::new(json!({ "recipe": { "steps": ["Boil rice", "Add tomato"] } }));
    assert_eq!(d.text("recipe.steps.1").as_deref(), Some("Add tomato"));
    assert_eq!(d.text("recipe.steps"), None);

    let mut el = FakeElement::keyed("recipe.steps.1", "Step two");
    assert_eq!(apply_translations(&d, [&mut el]), 1);
    assert_eq!(el.text, "Add tomato");
}

#[test]
fn text_renders_scalars_only() {
    let d = dict();
    assert_eq!(d.text("hero.count").as_deref(), Some("14"));
    assert_eq!(d.text("hero.flag").as_deref(), Some("true"));
    assert_eq!(d.text("hero.none"), None);
    assert_eq!(d.text("nav"), None);
    assert_eq!(d.text("list"), None);
}

#[test]
fn from_json_reports_parse_errors_with_url() {
    let err = Dictionary::from_json("assets/i18n/en.json", "{nope").unwrap_err();
    assert!(matches!(err, I18nError::Parse { ref url, .. } if url == "assets/i18n/en.json"));
}

// =============================================================
// apply_translations
// =============================================================

#[test]
fn apply_sets_text_html_or_attribute() {
    let mut plain = FakeElement::keyed("nav.home", "Strona główna");
    let mut html = FakeElement { html: true, ..FakeElement::keyed("hero.title", "") };
    let mut attr = FakeElement { attr: Some("title".into()), ..FakeElement::keyed("nav.recipes", "Przepisy") };
    let mut missing = FakeElement::keyed("nav.missing", "Zostaw");
    let mut untagged = FakeElement::default();

    let applied = apply_translations(&dict(), [&mut plain, &mut html, &mut attr, &mut missing, &mut untagged]);

    assert_eq!(applied, 3);
    assert_eq!(plain.text, "Home");
    assert_eq!(html.inner_html, "<em>Taste</em> of Africa");
    assert_eq!(attr.attributes, vec![("title".to_owned(), "Recipes".to_owned())]);
    assert_eq!(attr.text, "Przepisy");
    assert_eq!(missing.text, "Zostaw");
}

// =============================================================
// URLs
// =============================================================

#[test]
fn dictionary_url_resolves_by_page_depth() {
    let sections = vec!["recipes".to_owned()];
    assert_eq!(dictionary_url("/index.html", Language::Pl, &sections), "assets/i18n/pl.json");
    assert_eq!(dictionary_url("/recipes/peanut-stew.html", Language::En, &sections), "../assets/i18n/en.json");
    assert_eq!(dictionary_url("/site/recipes/index.html", Language::Fr, &sections), "../assets/i18n/fr.json");
    assert_eq!(dictionary_url("/recipes-archive.html", Language::Pl, &sections), "assets/i18n/pl.json");
}

// =============================================================
// language preference
// =============================================================

#[test]
fn current_language_defaults_when_absent_or_invalid() {
    let store = MemoryStore::new();
    let i18n = I18n::new(store.clone(), SiteConfig::default(), "/");
    assert_eq!(i18n.current_language(), Language::Pl);

    store.set("site.lang", "de").unwrap();
    assert_eq!(i18n.current_language(), Language::Pl);

    store.set("site.lang", "fr").unwrap();
    assert_eq!(i18n.current_language(), Language::Fr);
}

#[test]
fn current_language_respects_supported_subset() {
    let store = MemoryStore::with_entries([("site.lang", "fr")]);
    let config = SiteConfig { supported_languages: vec![Language::Pl, Language::En], ..SiteConfig::default() };
    let i18n = I18n::new(store, config, "/");
    assert_eq!(i18n.current_language(), Language::Pl);
}

#[test]
fn set_language_persists_and_issues_ticket() {
    let store = MemoryStore::new();
    let mut i18n = I18n::new(store.clone(), SiteConfig::default(), "/recipes/index.html");

    let ticket = i18n.set_language("en").unwrap();

    assert_eq!(store.get("site.lang").as_deref(), Some("en"));
    assert_eq!(ticket.lang, Language::En);
    assert_eq!(ticket.url, "../assets/i18n/en.json");
}

#[test]
fn set_language_rejects_unsupported_code() {
    let store = MemoryStore::new();
    let mut i18n = I18n::new(store.clone(), SiteConfig::default(), "/");
    assert_eq!(i18n.set_language("de"), Err(I18nError::UnsupportedLanguage("de".into())));
    assert!(store.is_empty());
}

// =============================================================
// load sequencing
// =============================================================

#[test]
fn newest_load_applies() {
    let mut i18n = I18n::new(MemoryStore::new(), SiteConfig::default(), "/");
    let ticket = i18n.begin_initial_load();
    assert_eq!(ticket.lang, Language::Pl);

    let outcome = i18n.complete(ticket, Ok(dict()));
    assert_eq!(outcome, LoadOutcome::Apply { lang: Language::Pl, dict: dict() });
}

#[test]
fn earlier_switch_finishing_late_is_stale() {
    let mut i18n = I18n::new(MemoryStore::new(), SiteConfig::default(), "/");
    let first = i18n.set_language("en").unwrap();
    let second = i18n.set_language("fr").unwrap();

    assert_eq!(i18n.complete(second, Ok(dict())), LoadOutcome::Apply { lang: Language::Fr, dict: dict() });
    assert_eq!(i18n.complete(first, Ok(dict())), LoadOutcome::Stale);
}

#[test]
fn failed_newest_load_reports_error() {
    let mut i18n = I18n::new(MemoryStore::new(), SiteConfig::default(), "/");
    let ticket = i18n.begin_initial_load();
    let err = I18nError::Status { url: ticket.url.clone(), status: 404 };

    assert_eq!(i18n.complete(ticket, Err(err.clone())), LoadOutcome::Failed(err));
}

#[test]
fn status_error_message_names_url() {
    let err = I18nError::Status { url: "assets/i18n/pl.json".into(), status: 404 };
    assert_eq!(err.to_string(), "failed to load translations from assets/i18n/pl.json: HTTP 404");
}
