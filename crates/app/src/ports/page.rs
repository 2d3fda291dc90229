//! Page port — the handful of element mutations the controller performs.

use std::rc::Rc;

use portfolio_domain::error::PortfolioError;

/// One element of the page the controller can restyle.
pub trait PageElement {
    /// Add `class` to the element's class list. Adding a present class is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Dom`] if the class list rejects the token.
    fn add_class(&self, class: &str) -> Result<(), PortfolioError>;

    /// Remove `class` from the element's class list. Removing an absent class is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Dom`] if the class list rejects the token.
    fn remove_class(&self, class: &str) -> Result<(), PortfolioError>;

    /// Point the element's `background-image` at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Dom`] if the style cannot be written.
    fn set_background_image(&self, path: &str) -> Result<(), PortfolioError>;
}

impl<T: PageElement + ?Sized> PageElement for Rc<T> {
    fn add_class(&self, class: &str) -> Result<(), PortfolioError> {
        (**self).add_class(class)
    }

    fn remove_class(&self, class: &str) -> Result<(), PortfolioError> {
        (**self).remove_class(class)
    }

    fn set_background_image(&self, path: &str) -> Result<(), PortfolioError> {
        (**self).set_background_image(path)
    }
}

/// Typed handles to the elements the controller drives, captured once at setup.
///
/// Any handle may be missing; operations touching a missing element skip it.
#[derive(Debug, Clone)]
pub struct PageElements<E> {
    /// The document `<body>`, carrying the theme class.
    pub body: Option<E>,
    /// The navigation dropdown container.
    pub menu: Option<E>,
    /// The theme toggle button.
    pub theme_button: Option<E>,
    /// The hamburger button that opens the menu.
    pub hamburger_button: Option<E>,
}

impl<E> Default for PageElements<E> {
    fn default() -> Self {
        Self {
            body: None,
            menu: None,
            theme_button: None,
            hamburger_button: None,
        }
    }
}
