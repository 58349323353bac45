//! Site configuration injected into every component at construction.
//!
//! DESIGN
//! ======
//! Storage keys, versions, and timer delays used to live as constants spread
//! over page scripts. They are gathered here so a page can override them with
//! an inline `<script id="site-config" type="application/json">` block and tests
//! can build components against a known configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::i18n::Language;

/// Storage keys for every persisted preference.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub consent: String,
    pub consent_version: String,
    pub theme: String,
    pub language: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            consent: "wulkan_kibo_consent".to_owned(),
            consent_version: "wulkan_kibo_consent_version".to_owned(),
            theme: "theme".to_owned(),
            language: "site.lang".to_owned(),
        }
    }
}

/// Runtime configuration for the consent manager, i18n loader, and page core.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Consent schema version; stored records with another version are ignored.
    pub consent_version: String,
    pub keys: StorageKeys,
    pub default_language: Language,
    pub supported_languages: Vec<Language>,
    /// Directories one level below the site root whose pages load assets via `../`.
    pub nested_sections: Vec<String>,
    pub page_size: usize,
    pub search_debounce_ms: u32,
    pub consent_fade_ms: u32,
    pub contact_send_ms: u32,
    pub form_status_ttl_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            consent_version: "1.0".to_owned(),
            keys: StorageKeys::default(),
            default_language: Language::Pl,
            supported_languages: vec![Language::Pl, Language::En, Language::Fr],
            nested_sections: vec!["recipes".to_owned()],
            page_size: 6,
            search_debounce_ms: 300,
            consent_fade_ms: 300,
            contact_send_ms: 1000,
            form_status_ttl_ms: 5000,
        }
    }
}

/// Error returned when a configuration override cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("default language `{0}` is not in the supported set")]
    UnsupportedDefault(Language),
}

impl SiteConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON or inconsistent values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the page size is zero or the default language
    /// is not supported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if !self.supported_languages.contains(&self.default_language) {
            return Err(ConfigError::UnsupportedDefault(self.default_language));
        }
        Ok(())
    }

    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.search_debounce_ms))
    }

    #[must_use]
    pub fn consent_fade(&self) -> Duration {
        Duration::from_millis(u64::from(self.consent_fade_ms))
    }
}
