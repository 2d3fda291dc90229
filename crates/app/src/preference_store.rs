//! In-process preference store backed by a `HashMap`.

use std::cell::RefCell;
use std::collections::HashMap;

use portfolio_domain::error::PortfolioError;

use crate::ports::PreferenceStore;

/// Preference store that lives only as long as the page.
///
/// Used when the browser denies access to `localStorage` (private browsing,
/// sandboxed iframes): the theme still flips, it just isn't remembered.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `key = value`.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.into(), value.into());
        store
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
