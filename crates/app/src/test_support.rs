//! In-memory fakes of the ports, shared by the unit tests.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use portfolio_domain::error::{DomError, PortfolioError};

use crate::ports::{PageElement, PageElements, PreferenceStore};

#[derive(Debug, Default)]
struct ElementState {
    classes: BTreeSet<String>,
    background_image: Option<String>,
    reject_mutations: bool,
}

/// Element that records its class list and background image.
///
/// Clones share state, so a test can keep one handle while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingElement(Rc<RefCell<ElementState>>);

impl RecordingElement {
    pub(crate) fn with_classes(classes: &[&str]) -> Self {
        let element = Self::default();
        element
            .0
            .borrow_mut()
            .classes
            .extend(classes.iter().map(ToString::to_string));
        element
    }

    /// Make every subsequent mutation fail.
    pub(crate) fn rejecting() -> Self {
        let element = Self::default();
        element.0.borrow_mut().reject_mutations = true;
        element
    }

    pub(crate) fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    pub(crate) fn background_image(&self) -> Option<String> {
        self.0.borrow().background_image.clone()
    }

    fn check(&self, class: &str) -> Result<(), PortfolioError> {
        if self.0.borrow().reject_mutations {
            return Err(DomError::ClassList {
                class: class.to_string(),
                reason: "rejected".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl PageElement for RecordingElement {
    fn add_class(&self, class: &str) -> Result<(), PortfolioError> {
        self.check(class)?;
        self.0.borrow_mut().classes.insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), PortfolioError> {
        self.check(class)?;
        self.0.borrow_mut().classes.remove(class);
        Ok(())
    }

    fn set_background_image(&self, path: &str) -> Result<(), PortfolioError> {
        if self.0.borrow().reject_mutations {
            return Err(DomError::Style {
                property: "background-image",
                reason: "rejected".to_string(),
            }
            .into());
        }
        self.0.borrow_mut().background_image = Some(path.to_string());
        Ok(())
    }
}

/// A full set of recording elements, with the body starting in the light theme.
pub(crate) fn light_page() -> PageElements<RecordingElement> {
    PageElements {
        body: Some(RecordingElement::with_classes(&["light-body-theme"])),
        menu: Some(RecordingElement::with_classes(&["nav-menu"])),
        theme_button: Some(RecordingElement::with_classes(&["theme-button"])),
        hamburger_button: Some(RecordingElement::with_classes(&["hamburger-button"])),
    }
}

/// Store whose reads and writes always fail.
pub(crate) struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PortfolioError> {
        Err(PortfolioError::Storage(Box::new(std::io::Error::other(
            "SecurityError",
        ))))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PortfolioError> {
        Err(PortfolioError::Storage(Box::new(std::io::Error::other(
            "QuotaExceededError",
        ))))
    }
}
