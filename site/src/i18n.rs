//! Language preference and dictionary-driven text replacement.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages ship with Polish text. Elements opt into translation with
//! `data-i18n="dot.path"`, optionally `data-i18n-html` (render as HTML) and
//! `data-i18n-attr="title"` (write that attribute instead of the content).
//! A dictionary is fetched from `assets/i18n/<lang>.json`, relative to the
//! page, so pages one directory deep resolve through `../`.
//!
//! DESIGN
//! ======
//! Every dictionary load takes a [`LoadTicket`] carrying a sequence number.
//! Only the newest ticket may apply its result, so a slow response for an
//! earlier language switch cannot overwrite a later one.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SiteConfig;
use crate::storage::{KeyValueStore, persist};

/// Element whose content receives the load-failure notice, when present.
pub const STATUS_ELEMENT_ID: &str = "consent-status";
/// The language `<select>` kept in sync with the active language.
pub const LANG_SELECT_ID: &str = "lang-select";

/// Notice shown when dictionaries cannot be fetched (usually `file://` pages).
pub const FETCH_FAILURE_NOTICE: &str = "⚠️ Translation files couldn't be loaded. If you're opening this HTML \
     directly (file://), please use a local server so fetch() can load JSON: <code>wulkan-kibo</code>, \
     <code>python -m http.server</code> or <code>npx serve</code>.";

/// A supported site language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pl,
    En,
    Fr,
}

impl Language {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Pl => "pl",
            Self::En => "en",
            Self::Fr => "fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pl" => Ok(Self::Pl),
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            other => Err(I18nError::UnsupportedLanguage(other.to_owned())),
        }
    }
}

/// Errors from language selection and dictionary loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
    #[error("unsupported language `{0}`")]
    UnsupportedLanguage(String),
    #[error("failed to load translations from {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("failed to load translations from {url}: HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("invalid dictionary {url}: {reason}")]
    Parse { url: String, reason: String },
}

/// A nested key/value document for one language.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    #[must_use]
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse a dictionary body fetched from `url`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::Parse`] if the body is not JSON.
    pub fn from_json(url: &str, body: &str) -> Result<Self, I18nError> {
        serde_json::from_str(body)
            .map(Self::new)
            .map_err(|e| I18nError::Parse { url: url.to_owned(), reason: e.to_string() })
    }

    /// Walk `path` segment by segment. Objects are entered by key and arrays
    /// by numeric index; `None` when any segment is missing or a scalar sits
    /// in the middle of the path.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.root, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
            _ => None,
        })
    }

    /// Look up `path` and render it as text. Objects, arrays, and null count
    /// as missing.
    #[must_use]
    pub fn text(&self, path: &str) -> Option<String> {
        match self.lookup(path)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// An element tagged for translation.
pub trait TranslationTarget {
    /// Value of `data-i18n`.
    fn key(&self) -> Option<String>;
    /// Whether `data-i18n-html` is present.
    fn renders_html(&self) -> bool;
    /// Value of `data-i18n-attr`.
    fn target_attribute(&self) -> Option<String>;
    fn set_text(&mut self, text: &str);
    fn set_html(&mut self, html: &str);
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Rewrite every target whose key resolves. Returns how many were updated.
pub fn apply_translations<'a, T>(dict: &Dictionary, targets: impl IntoIterator<Item = &'a mut T>) -> usize
where
    T: TranslationTarget + 'a,
{
    let mut applied = 0;
    for target in targets {
        let Some(key) = target.key() else {
            continue;
        };
        let Some(value) = dict.text(&key) else {
            continue;
        };
        if let Some(attr) = target.target_attribute() {
            target.set_attribute(&attr, &value);
        } else if target.renders_html() {
            target.set_html(&value);
        } else {
            target.set_text(&value);
        }
        applied += 1;
    }
    applied
}

/// Prefix that takes a page at `pathname` back to the site root.
#[must_use]
pub fn root_prefix(pathname: &str, nested_sections: &[String]) -> &'static str {
    let nested = nested_sections
        .iter()
        .any(|section| pathname.contains(&format!("/{section}/")));
    if nested { "../" } else { "" }
}

/// Relative URL of the dictionary for `lang` as seen from `pathname`.
#[must_use]
pub fn dictionary_url(pathname: &str, lang: Language, nested_sections: &[String]) -> String {
    format!("{}assets/i18n/{}.json", root_prefix(pathname, nested_sections), lang.code())
}

/// Permission to apply one dictionary load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub lang: Language,
    pub url: String,
}

/// What to do with a finished load.
#[derive(Debug, PartialEq)]
pub enum LoadOutcome {
    /// Newest load succeeded: apply and sync the language selector.
    Apply { lang: Language, dict: Dictionary },
    /// A newer load was issued since; drop this result.
    Stale,
    /// Newest load failed; keep the current page text.
    Failed(I18nError),
}

/// Language preference plus load sequencing.
pub struct I18n<S> {
    store: S,
    config: SiteConfig,
    pathname: String,
    latest_seq: u64,
}

impl<S: KeyValueStore> I18n<S> {
    pub fn new(store: S, config: SiteConfig, pathname: impl Into<String>) -> Self {
        Self { store, config, pathname: pathname.into(), latest_seq: 0 }
    }

    /// The persisted language if supported, else the configured default.
    #[must_use]
    pub fn current_language(&self) -> Language {
        self.store
            .get(&self.config.keys.language)
            .and_then(|raw| raw.parse::<Language>().ok())
            .filter(|lang| self.config.supported_languages.contains(lang))
            .unwrap_or(self.config.default_language)
    }

    /// Start loading the current language.
    pub fn begin_initial_load(&mut self) -> LoadTicket {
        let lang = self.current_language();
        self.issue(lang)
    }

    /// Persist `code` as the active language and start loading it.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::UnsupportedLanguage`] if `code` is not a supported
    /// language; nothing is persisted in that case.
    pub fn set_language(&mut self, code: &str) -> Result<LoadTicket, I18nError> {
        let lang: Language = code.parse()?;
        if !self.config.supported_languages.contains(&lang) {
            return Err(I18nError::UnsupportedLanguage(code.to_owned()));
        }
        persist(&self.store, &self.config.keys.language, lang.code());
        Ok(self.issue(lang))
    }

    /// Resolve a finished load against the newest ticket.
    pub fn complete(&self, ticket: LoadTicket, result: Result<Dictionary, I18nError>) -> LoadOutcome {
        if ticket.seq != self.latest_seq {
            log::debug!("dropping stale {} dictionary (seq {} < {})", ticket.lang, ticket.seq, self.latest_seq);
            return LoadOutcome::Stale;
        }
        match result {
            Ok(dict) => LoadOutcome::Apply { lang: ticket.lang, dict },
            Err(e) => {
                log::error!("{e}");
                LoadOutcome::Failed(e)
            }
        }
    }

    fn issue(&mut self, lang: Language) -> LoadTicket {
        self.latest_seq += 1;
        LoadTicket {
            seq: self.latest_seq,
            lang,
            url: dictionary_url(&self.pathname, lang, &self.config.nested_sections),
        }
    }
}
