//! Preference store port — a string key-value store that survives reloads.

use std::rc::Rc;

use portfolio_domain::error::PortfolioError;

/// Persistent string key-value storage (the browser's `localStorage`).
///
/// Methods take `&self`: the browser store is shared, mutable state behind an
/// immutable handle, and implementations follow the same shape.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Storage`] if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Storage`] if the store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        (**self).set(key, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        (**self).set(key, value)
    }
}
