//! # portfolio-web — page entry point
//!
//! Composition root compiled to WebAssembly and loaded by the portfolio page.
//!
//! ## Responsibilities
//! - Install the panic hook and the console tracing subscriber
//! - Read the optional page configuration
//! - Capture the page elements and the preference store (adapters)
//! - Construct the [`PortfolioController`], injecting both via port traits
//! - Register the click listeners and run the load-time sequence
//! - Export `flipTheme`, `initTheme`, `toggleDropDown`, `hideDropDown` to JS
//!
//! ## Listener order
//! Button listeners are registered on the buttons themselves and the
//! close-on-click listener on `window`. A click on the hamburger runs its own
//! listener first (target phase) and the window listener last (bubble phase),
//! so the toggle happens before the close-unless-hamburger check. The check
//! only looks at the click target's own classes: clicking an icon nested
//! inside the hamburger opens the menu and immediately closes it again.
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

pub mod config;
mod logging;

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use portfolio_adapter_browser::{
    BrowserError, BrowserStore, DomElement, click_target, find_page_elements,
};
use portfolio_app::controller::PortfolioController;

use crate::config::Config;

type Controller = PortfolioController<BrowserStore, DomElement>;

thread_local! {
    static CONTROLLER: RefCell<Option<Controller>> = const { RefCell::new(None) };
}

/// Run `f` against the page controller, if it has been set up.
fn with_controller<R>(f: impl FnOnce(&mut Controller) -> R) -> Option<R> {
    CONTROLLER.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            tracing::warn!("controller busy, dropping re-entrant call");
            return None;
        };
        if let Some(controller) = slot.as_mut() {
            Some(f(controller))
        } else {
            tracing::debug!("controller not set up yet");
            None
        }
    })
}

/// Module start: runs once when the page instantiates the module.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = web_sys::window().and_then(|window| window.document());
    let loaded = document
        .as_ref()
        .map_or_else(|| Ok(Config::default()), Config::from_document);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    logging::init(&config.logging.filter);
    if let Err(err) = &loaded {
        tracing::warn!(error = ?err, "ignoring page config, using defaults");
    }

    if let Err(err) = run(config) {
        tracing::warn!(error = %err, "portfolio controller not started");
    }
}

fn run(config: Config) -> Result<(), BrowserError> {
    let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
    let document = window.document().ok_or(BrowserError::NoDocument)?;

    let store = BrowserStore::open_or_fallback(&window);
    let elements = find_page_elements(&document, &config.contract);

    if config.behavior.attach_button_listeners {
        if let Some(button) = &elements.hamburger_button {
            on_click(button.as_element(), |controller| {
                controller.toggle_drop_down();
            })?;
        }
        if let Some(button) = &elements.theme_button {
            on_click(button.as_element(), |controller| {
                controller.flip_theme();
            })?;
        }
    }
    on_window_click(&window)?;

    let controller = PortfolioController::setup(store, elements, config.contract, config.assets);
    CONTROLLER.with(|cell| *cell.borrow_mut() = Some(controller));
    with_controller(Controller::boot);
    Ok(())
}

/// Register `handler` for clicks dispatched to `target`.
fn on_click(
    target: &web_sys::EventTarget,
    handler: impl Fn(&mut Controller) + 'static,
) -> Result<(), BrowserError> {
    let listener = Closure::<dyn Fn()>::new(move || {
        with_controller(&handler);
    });
    add_click_listener(target, &listener)?;
    listener.forget();
    Ok(())
}

/// Close the menu on any click whose target is not the hamburger button.
fn on_window_click(window: &web_sys::Window) -> Result<(), BrowserError> {
    let listener = Closure::<dyn Fn(web_sys::Event)>::new(|event: web_sys::Event| {
        let target = click_target(&event);
        with_controller(|controller| controller.handle_document_click(&target));
    });
    add_click_listener(window, &listener)?;
    listener.forget();
    Ok(())
}

fn add_click_listener<T: ?Sized>(
    target: &web_sys::EventTarget,
    listener: &Closure<T>,
) -> Result<(), BrowserError> {
    target
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .map_err(|err| BrowserError::Listener {
            event: "click",
            reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        })
}

/// Switch to the opposite theme. Returns the new theme name.
#[wasm_bindgen(js_name = flipTheme)]
pub fn flip_theme() -> Option<String> {
    with_controller(|controller| controller.flip_theme().to_string())
}

/// Apply the stored theme preference. Only the first call has an effect.
#[wasm_bindgen(js_name = initTheme)]
pub fn init_theme() -> Option<String> {
    with_controller(|controller| controller.init_theme().to_string())
}

/// Open the menu if closed, close it if open. Returns whether it is open.
#[wasm_bindgen(js_name = toggleDropDown)]
pub fn toggle_drop_down() -> Option<bool> {
    with_controller(|controller| controller.toggle_drop_down().is_open())
}

/// Close the menu.
#[wasm_bindgen(js_name = hideDropDown)]
pub fn hide_drop_down() {
    with_controller(Controller::hide_drop_down);
}
