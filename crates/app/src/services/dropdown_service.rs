//! Dropdown service — opens and closes the navigation menu.

use portfolio_domain::click::{ClickOutcome, ClickTarget};
use portfolio_domain::contract::PageContract;
use portfolio_domain::menu::MenuState;

use crate::ports::{PageElement, PageElements};
use crate::services::apply_to;

/// Owns the current [`MenuState`] and mirrors it onto the menu's class list.
pub struct DropdownService {
    active_class: String,
    hamburger_class: String,
    state: MenuState,
}

impl DropdownService {
    /// Create a service with the menu closed.
    #[must_use]
    pub fn new(contract: &PageContract) -> Self {
        Self {
            active_class: contract.active_class.clone(),
            hamburger_class: contract.hamburger_button_class.clone(),
            state: MenuState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Close the menu if it is open, open it otherwise.
    #[tracing::instrument(skip(self, page))]
    pub fn toggle_drop_down<E: PageElement>(&mut self, page: &PageElements<E>) -> MenuState {
        if self.state.is_open() {
            self.hide_drop_down(page);
        } else {
            apply_to(page.menu.as_ref(), "menu", |menu| {
                menu.add_class(&self.active_class)
            });
            self.state = MenuState::Open;
            tracing::debug!(menu = %self.state, "menu toggled");
        }
        self.state
    }

    /// Close the menu unconditionally. Closing a closed menu changes nothing.
    #[tracing::instrument(skip(self, page))]
    pub fn hide_drop_down<E: PageElement>(&mut self, page: &PageElements<E>) {
        apply_to(page.menu.as_ref(), "menu", |menu| {
            menu.remove_class(&self.active_class)
        });
        self.state = MenuState::Closed;
    }

    /// React to a click anywhere in the document.
    ///
    /// Every click closes the menu unless its target is the hamburger button
    /// itself. Only the target's own classes are consulted, so a click on an
    /// element nested inside the hamburger button also closes the menu.
    ///
    /// The hamburger's own click handler toggles the menu; whether that runs
    /// before or after this one depends on how the listeners were registered.
    /// For a target carrying the hamburger class both orders end with the menu
    /// open, because this handler ignores such clicks.
    #[tracing::instrument(skip(self, page))]
    pub fn handle_document_click<E: PageElement>(
        &mut self,
        target: &ClickTarget,
        page: &PageElements<E>,
    ) -> ClickOutcome {
        if target.has_class(&self.hamburger_class) {
            return ClickOutcome::Ignored;
        }
        self.hide_drop_down(page);
        tracing::debug!(target = ?target.classes(), "click outside hamburger closed menu");
        ClickOutcome::ClosedMenu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingElement, light_page};

    fn make_service() -> DropdownService {
        DropdownService::new(&PageContract::default())
    }

    fn menu_is_active(page: &PageElements<RecordingElement>) -> bool {
        page.menu.as_ref().unwrap().has_class("active")
    }

    #[test]
    fn should_start_closed() {
        assert_eq!(make_service().state(), MenuState::Closed);
    }

    #[test]
    fn should_open_closed_menu_on_toggle() {
        let mut svc = make_service();
        let page = light_page();

        assert_eq!(svc.toggle_drop_down(&page), MenuState::Open);
        assert!(menu_is_active(&page));
    }

    #[test]
    fn should_close_open_menu_on_toggle() {
        let mut svc = make_service();
        let page = light_page();

        svc.toggle_drop_down(&page);
        assert_eq!(svc.toggle_drop_down(&page), MenuState::Closed);
        assert!(!menu_is_active(&page));
    }

    #[test]
    fn should_leave_closed_menu_unchanged_on_hide() {
        let mut svc = make_service();
        let page = light_page();

        svc.hide_drop_down(&page);
        svc.hide_drop_down(&page);

        assert_eq!(svc.state(), MenuState::Closed);
        assert!(!menu_is_active(&page));
        assert!(page.menu.as_ref().unwrap().has_class("nav-menu"));
    }

    #[test]
    fn should_close_open_menu_on_hide() {
        let mut svc = make_service();
        let page = light_page();

        svc.toggle_drop_down(&page);
        svc.hide_drop_down(&page);

        assert_eq!(svc.state(), MenuState::Closed);
        assert!(!menu_is_active(&page));
    }

    #[test]
    fn should_clear_stale_active_class_on_hide() {
        let mut svc = make_service();
        let mut page = light_page();
        page.menu = Some(RecordingElement::with_classes(&["nav-menu", "active"]));

        svc.hide_drop_down(&page);
        assert!(!menu_is_active(&page));
    }

    #[test]
    fn should_ignore_click_on_hamburger_button() {
        let mut svc = make_service();
        let page = light_page();
        svc.toggle_drop_down(&page);

        let outcome =
            svc.handle_document_click(&ClickTarget::new(["hamburger-button"]), &page);

        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(svc.state(), MenuState::Open);
        assert!(menu_is_active(&page));
    }

    #[test]
    fn should_close_menu_on_click_elsewhere() {
        let mut svc = make_service();
        let page = light_page();
        svc.toggle_drop_down(&page);

        let outcome = svc.handle_document_click(&ClickTarget::new(["hero-title"]), &page);

        assert_eq!(outcome, ClickOutcome::ClosedMenu);
        assert_eq!(svc.state(), MenuState::Closed);
        assert!(!menu_is_active(&page));
    }

    #[test]
    fn should_close_menu_on_click_without_classes() {
        let mut svc = make_service();
        let page = light_page();
        svc.toggle_drop_down(&page);

        svc.handle_document_click(&ClickTarget::default(), &page);
        assert_eq!(svc.state(), MenuState::Closed);
    }

    #[test]
    fn should_track_state_when_menu_element_missing() {
        let mut svc = make_service();
        let page = PageElements::<RecordingElement>::default();

        assert_eq!(svc.toggle_drop_down(&page), MenuState::Open);
        svc.hide_drop_down(&page);
        assert_eq!(svc.state(), MenuState::Closed);
    }

    #[test]
    fn should_open_when_menu_rejects_class_change() {
        let mut svc = make_service();
        let mut page = light_page();
        page.menu = Some(RecordingElement::rejecting());

        assert_eq!(svc.toggle_drop_down(&page), MenuState::Open);
    }
}
