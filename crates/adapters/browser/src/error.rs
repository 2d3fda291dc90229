//! Browser adapter error types.

use wasm_bindgen::JsValue;

use portfolio_domain::error::PortfolioError;

/// Errors specific to the browser adapter.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// `window.localStorage` is missing or access was denied.
    #[error("localStorage unavailable: {0}")]
    StorageUnavailable(String),

    /// A `localStorage` read or write threw.
    #[error("localStorage call failed: {0}")]
    Storage(String),

    /// `addEventListener` threw.
    #[error("failed to register {event} listener: {reason}")]
    Listener {
        /// Event type, e.g. `click`.
        event: &'static str,
        /// Browser-provided description.
        reason: String,
    },
}

/// A failed `localStorage` call, as seen through the preference store port.
pub(crate) fn storage_failure(reason: String) -> PortfolioError {
    PortfolioError::Storage(Box::new(BrowserError::Storage(reason)))
}

/// Best-effort text for a thrown JS value.
///
/// Strings are used as-is; `DOMException`s and other objects fall back to
/// their debug rendering.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
