//! Theme & navigation controller — the page's single stateful component.
//!
//! Holds the element handles captured at setup and the two services that
//! own the theme and menu state. Adapters call into it from event listeners;
//! it never reads state back from the page.

use portfolio_domain::assets::ThemeAssets;
use portfolio_domain::click::{ClickOutcome, ClickTarget};
use portfolio_domain::contract::PageContract;
use portfolio_domain::menu::MenuState;
use portfolio_domain::theme::Theme;

use crate::ports::{PageElement, PageElements, PreferenceStore};
use crate::services::dropdown_service::DropdownService;
use crate::services::theme_service::ThemeService;

/// Drives the theme and the dropdown menu of one page.
pub struct PortfolioController<S, E> {
    elements: PageElements<E>,
    theme: ThemeService<S>,
    dropdown: DropdownService,
}

impl<S: PreferenceStore, E: PageElement> PortfolioController<S, E> {
    /// Capture the page elements and start in the light theme with the menu closed.
    ///
    /// Nothing on the page is touched until [`boot`](Self::boot) or one of the
    /// operations runs.
    pub fn setup(
        store: S,
        elements: PageElements<E>,
        contract: PageContract,
        assets: ThemeAssets,
    ) -> Self {
        let dropdown = DropdownService::new(&contract);
        let theme = ThemeService::new(store, contract, assets);
        Self {
            elements,
            theme,
            dropdown,
        }
    }

    /// Load-time sequence: close the menu, sync the body class with the
    /// starting theme, then restore the stored theme.
    #[tracing::instrument(skip(self))]
    pub fn boot(&mut self) {
        self.hide_drop_down();
        self.theme.apply_body_class(&self.elements);
        let theme = self.init_theme();
        tracing::info!(%theme, "portfolio controller ready");
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.dropdown.state()
    }

    #[must_use]
    pub fn elements(&self) -> &PageElements<E> {
        &self.elements
    }

    /// See [`ThemeService::flip_theme`].
    pub fn flip_theme(&mut self) -> Theme {
        self.theme.flip_theme(&self.elements)
    }

    /// See [`ThemeService::init_theme`].
    pub fn init_theme(&mut self) -> Theme {
        self.theme.init_theme(&self.elements)
    }

    /// See [`DropdownService::toggle_drop_down`].
    pub fn toggle_drop_down(&mut self) -> MenuState {
        self.dropdown.toggle_drop_down(&self.elements)
    }

    /// See [`DropdownService::hide_drop_down`].
    pub fn hide_drop_down(&mut self) {
        self.dropdown.hide_drop_down(&self.elements);
    }

    /// See [`DropdownService::handle_document_click`].
    pub fn handle_document_click(&mut self, target: &ClickTarget) -> ClickOutcome {
        self.dropdown.handle_document_click(target, &self.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference_store::InMemoryPreferenceStore;
    use crate::test_support::{RecordingElement, light_page};

    fn make_controller(
        store: InMemoryPreferenceStore,
    ) -> PortfolioController<InMemoryPreferenceStore, RecordingElement> {
        PortfolioController::setup(
            store,
            light_page(),
            PageContract::default(),
            ThemeAssets::default(),
        )
    }

    #[test]
    fn should_start_light_and_closed() {
        let ctrl = make_controller(InMemoryPreferenceStore::new());
        assert_eq!(ctrl.theme(), Theme::Light);
        assert_eq!(ctrl.menu(), MenuState::Closed);
    }

    #[test]
    fn should_boot_light_and_closed_without_preference() {
        let mut ctrl = make_controller(InMemoryPreferenceStore::new());
        ctrl.boot();

        assert_eq!(ctrl.theme(), Theme::Light);
        assert_eq!(ctrl.menu(), MenuState::Closed);
        assert!(!ctrl.elements().menu.as_ref().unwrap().has_class("active"));
    }

    #[test]
    fn should_boot_dark_with_dark_icons_when_dark_stored() {
        let mut ctrl = make_controller(InMemoryPreferenceStore::with_value(
            "portfolio-theme",
            "dark",
        ));
        ctrl.boot();

        let page = ctrl.elements();
        assert!(page.body.as_ref().unwrap().has_class("dark-body-theme"));
        assert_eq!(
            page.hamburger_button.as_ref().unwrap().background_image().as_deref(),
            Some("assets/images/hamburger-dark.svg")
        );
        assert_eq!(
            page.theme_button.as_ref().unwrap().background_image().as_deref(),
            Some("assets/images/theme-dark.svg")
        );
    }

    #[test]
    fn should_replace_markup_dark_class_on_boot_without_preference() {
        let mut page = light_page();
        page.body = Some(RecordingElement::with_classes(&["dark-body-theme"]));
        let mut ctrl = PortfolioController::setup(
            InMemoryPreferenceStore::new(),
            page,
            PageContract::default(),
            ThemeAssets::default(),
        );
        ctrl.boot();

        let body = ctrl.elements().body.as_ref().unwrap();
        assert!(body.has_class("light-body-theme"));
        assert!(!body.has_class("dark-body-theme"));
    }

    #[test]
    fn should_add_light_class_on_boot_when_markup_has_none() {
        let mut page = light_page();
        page.body = Some(RecordingElement::default());
        let mut ctrl = PortfolioController::setup(
            InMemoryPreferenceStore::new(),
            page,
            PageContract::default(),
            ThemeAssets::default(),
        );
        ctrl.boot();

        assert!(ctrl.elements().body.as_ref().unwrap().has_class("light-body-theme"));
        assert_eq!(
            ctrl.elements().theme_button.as_ref().unwrap().background_image(),
            None
        );
    }

    #[test]
    fn should_keep_theme_and_menu_independent() {
        let mut ctrl = make_controller(InMemoryPreferenceStore::new());
        ctrl.toggle_drop_down();
        ctrl.flip_theme();

        assert_eq!(ctrl.menu(), MenuState::Open);
        assert_eq!(ctrl.theme(), Theme::Dark);
    }
}
