//! # portfolio-adapter-browser
//!
//! Browser adapter — implements the `portfolio-app` ports on top of
//! `web-sys`.
//!
//! ## What it provides
//!
//! | Port / concern | Type | Backed by |
//! |----------------|------|-----------|
//! | `PreferenceStore` | [`BrowserStore`] | `window.localStorage`, or memory when denied |
//! | `PageElement` | [`DomElement`] | `Element.classList`, `HTMLElement.style` |
//! | element lookup | [`find_page_elements`] | `document.getElementsByClassName` |
//! | click targets | [`click_target`] | `Event.target` `class` attribute |
//! | log output | [`ConsoleMakeWriter`] | `console.error/warn/info/debug` |
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `portfolio-app` and `portfolio-domain`.

mod console;
mod dom;
mod error;
mod storage;

pub use console::{ConsoleMakeWriter, ConsoleWriter};
pub use dom::{DomElement, click_target, find_page_elements};
pub use error::BrowserError;
pub use storage::{BrowserStore, LocalStorageStore};
