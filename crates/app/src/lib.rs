//! # portfolio-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `PreferenceStore` — read/write the persisted theme preference
//!   - `PageElement` — class-list and inline-style mutations on one element
//! - Define the use-case services:
//!   - `ThemeService` — flip the theme, initialize it from the store
//!   - `DropdownService` — toggle/hide the menu, react to document clicks
//! - Compose both into the [`controller::PortfolioController`], which owns
//!   the page element handles captured at setup
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (`InMemoryPreferenceStore`)
//!
//! ## Dependency rule
//! Depends on `portfolio-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod controller;
pub mod ports;
pub mod preference_store;
pub mod services;

#[cfg(test)]
mod test_support;
