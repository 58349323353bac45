//! Light/dark theme resolution and persistence.
//!
//! The stored preference wins; without one the system color scheme decides,
//! and system changes keep being followed until the user toggles explicitly.
//! The browser binding applies the result as `data-theme` on `<html>`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::storage::{KeyValueStore, persist};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Tracks the active theme and who chose it.
pub struct ThemeController<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Resolve the initial theme from storage, else from `system_prefers_dark`.
    pub fn new(store: S, key: impl Into<String>, system_prefers_dark: bool) -> Self {
        let key = key.into();
        let current = store
            .get(&key)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_else(|| Theme::from_system(system_prefers_dark));
        Self { store, key, current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Whether the user has an explicit, valid preference stored.
    #[must_use]
    pub fn has_explicit_choice(&self) -> bool {
        self.store.get(&self.key).as_deref().and_then(Theme::parse).is_some()
    }

    /// Flip the theme and persist it as an explicit choice.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        persist(&self.store, &self.key, self.current.as_str());
        self.current
    }

    /// Follow a system color-scheme change unless the user chose explicitly.
    /// Returns the theme to apply, if it changed.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_explicit_choice() {
            return None;
        }
        let next = Theme::from_system(prefers_dark);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }
}
