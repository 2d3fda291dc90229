//! Application services — use-case implementations.
//!
//! Each service owns the explicit state for its concern and accepts port
//! trait implementations via generic parameters, keeping this layer
//! decoupled from the browser. Port failures never propagate out of a
//! service: they are logged and the remaining steps still run.

pub mod dropdown_service;
pub mod theme_service;

use portfolio_domain::error::PortfolioError;

use crate::ports::PageElement;

/// Run `mutate` on `element` if it was found at setup.
///
/// A missing element is logged at `debug`, a failed mutation at `warn`.
pub(crate) fn apply_to<E, F>(element: Option<&E>, name: &'static str, mutate: F)
where
    E: PageElement,
    F: FnOnce(&E) -> Result<(), PortfolioError>,
{
    let Some(element) = element else {
        tracing::debug!(element = name, "element not found on page, skipping");
        return;
    };
    if let Err(err) = mutate(element) {
        tracing::warn!(element = name, error = ?err, "failed to update element");
    }
}
