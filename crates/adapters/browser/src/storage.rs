//! `localStorage`-backed preference store.

use portfolio_app::ports::PreferenceStore;
use portfolio_app::preference_store::InMemoryPreferenceStore;
use portfolio_domain::error::PortfolioError;

use crate::error::{BrowserError, describe, storage_failure};

/// Preference store over `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    /// Open the window's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::StorageUnavailable`] when the browser does not
    /// expose `localStorage` or throws on access (e.g. cookies blocked).
    pub fn open(window: &web_sys::Window) -> Result<Self, BrowserError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(BrowserError::StorageUnavailable(
                "not provided by this browser".to_string(),
            )),
            Err(err) => Err(BrowserError::StorageUnavailable(describe(&err))),
        }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError> {
        self.storage
            .get_item(key)
            .map_err(|err| storage_failure(describe(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| storage_failure(describe(&err)))
    }
}

/// The store the page actually uses.
#[derive(Debug)]
pub enum BrowserStore {
    /// Persisted across reloads.
    Local(LocalStorageStore),
    /// Forgotten on reload; used when `localStorage` is denied.
    Memory(InMemoryPreferenceStore),
}

impl BrowserStore {
    /// Use `localStorage` when available, memory otherwise.
    #[must_use]
    pub fn open_or_fallback(window: &web_sys::Window) -> Self {
        match LocalStorageStore::open(window) {
            Ok(store) => Self::Local(store),
            Err(err) => {
                tracing::warn!(error = %err, "theme preference will not survive reloads");
                Self::Memory(InMemoryPreferenceStore::new())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError> {
        match self {
            Self::Local(store) => store.get(key),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        match self {
            Self::Local(store) => store.set(key, value),
            Self::Memory(store) => store.set(key, value),
        }
    }
}
