//! Key/value storage seam for persisted preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consent, theme, and language preferences all live in browser
//! `localStorage`. Components take a [`KeyValueStore`] so tests and non-browser
//! builds can substitute [`MemoryStore`].
//!
//! TRADE-OFFS
//! ==========
//! Reads and writes are last-write-wins with no cross-tab coordination. That is
//! fine for one tab; two tabs racing on the same key simply keep the later write.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Error returned by storage writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend refused the operation (quota, privacy mode).
    #[error("storage rejected `{key}`: {reason}")]
    Rejected { key: String, reason: String },
}

/// Plain string key/value storage.
pub trait KeyValueStore {
    /// Read `key`; `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend is missing or refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend is missing or refuses the delete.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share one map, like handles to the same `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `pairs`.
    #[must_use]
    pub fn with_entries<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .extend(pairs.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())));
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser `localStorage`. Every call re-resolves the storage object, so a
/// page that loses storage access mid-session degrades to absent values.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "hydrate")]
impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }

    fn rejected(key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
        StorageError::Rejected { key: key.to_owned(), reason: format!("{err:?}") }
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| Self::rejected(key, &e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| Self::rejected(key, &e))
    }
}

/// Write and log instead of failing; preferences are best-effort.
pub(crate) fn persist(store: &impl KeyValueStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("failed to persist `{key}`: {e}");
    }
}
