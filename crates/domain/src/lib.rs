//! # portfolio-domain
//!
//! Pure domain model for the portfolio page controller.
//!
//! ## Responsibilities
//! - Define the two-valued **theme** ([`theme::Theme`]) and its persisted form
//! - Define the dropdown **menu state** ([`menu::MenuState`])
//! - Classify **click targets** by the class names they carry
//! - Describe the **page contract**: CSS class names and the storage key the
//!   surrounding markup and stylesheet agree on
//! - Describe the theme-matched **icon assets**
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser bindings.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod assets;
pub mod click;
pub mod contract;
pub mod error;
pub mod menu;
pub mod theme;
