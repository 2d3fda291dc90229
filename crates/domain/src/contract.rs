//! Page contract — the class names and storage key shared with the markup.
//!
//! The HTML and stylesheet of the portfolio page are maintained outside this
//! workspace. [`PageContract`] names every hook the controller relies on so
//! the two sides can be kept in sync from one place.

use serde::Deserialize;

use crate::error::{PortfolioError, ValidationError};
use crate::theme::Theme;

/// Class names and storage key the controller expects the page to provide.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageContract {
    /// Class of the dropdown menu container.
    pub menu_class: String,
    /// Class of the theme toggle button.
    pub theme_button_class: String,
    /// Class of the hamburger button that opens the menu.
    pub hamburger_button_class: String,
    /// Class marking the menu as open.
    pub active_class: String,
    /// Body class applied in the light theme.
    pub light_body_class: String,
    /// Body class applied in the dark theme.
    pub dark_body_class: String,
    /// `localStorage` key holding the theme preference.
    pub storage_key: String,
}

impl PageContract {
    /// Body class matching `theme`.
    #[must_use]
    pub fn body_class(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light_body_class,
            Theme::Dark => &self.dark_body_class,
        }
    }

    /// Check that every class name is a single non-empty token and the
    /// storage key is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), PortfolioError> {
        let classes = [
            ("menu_class", &self.menu_class),
            ("theme_button_class", &self.theme_button_class),
            ("hamburger_button_class", &self.hamburger_button_class),
            ("active_class", &self.active_class),
            ("light_body_class", &self.light_body_class),
            ("dark_body_class", &self.dark_body_class),
        ];
        for (field, value) in classes {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField(field).into());
            }
            if value.chars().any(char::is_whitespace) {
                return Err(ValidationError::NotAClassName {
                    field,
                    value: value.clone(),
                }
                .into());
            }
        }
        if self.storage_key.is_empty() {
            return Err(ValidationError::EmptyField("storage_key").into());
        }
        Ok(())
    }
}

impl Default for PageContract {
    fn default() -> Self {
        Self {
            menu_class: "nav-menu".to_string(),
            theme_button_class: "theme-button".to_string(),
            hamburger_button_class: "hamburger-button".to_string(),
            active_class: "active".to_string(),
            light_body_class: "light-body-theme".to_string(),
            dark_body_class: "dark-body-theme".to_string(),
            storage_key: "portfolio-theme".to_string(),
        }
    }
}
