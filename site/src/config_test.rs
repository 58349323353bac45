use super::*;

#[test]
fn defaults_match_site_constants() {
    let config = SiteConfig::default();
    assert_eq!(config.consent_version, "1.0");
    assert_eq!(config.keys.consent, "wulkan_kibo_consent");
    assert_eq!(config.keys.consent_version, "wulkan_kibo_consent_version");
    assert_eq!(config.keys.language, "site.lang");
    assert_eq!(config.page_size, 6);
    assert_eq!(config.search_debounce(), Duration::from_millis(300));
    assert!(config.validate().is_ok());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{"consent_version":"2.0","keys":{"theme":"kibo.theme"}}"#).unwrap();
    assert_eq!(config.consent_version, "2.0");
    assert_eq!(config.keys.theme, "kibo.theme");
    assert_eq!(config.keys.consent, "wulkan_kibo_consent");
    assert_eq!(config.page_size, 6);
}

#[test]
fn zero_page_size_is_rejected() {
    let err = SiteConfig::from_json(r#"{"page_size":0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroPageSize));
}

#[test]
fn default_language_must_be_supported() {
    let err = SiteConfig::from_json(r#"{"default_language":"fr","supported_languages":["pl","en"]}"#).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedDefault(Language::Fr)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(SiteConfig::from_json("{"), Err(ConfigError::Parse(_))));
}
