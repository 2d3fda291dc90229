//! Theme-matched icon assets for the two icon buttons.

use serde::Deserialize;

use crate::theme::Theme;

/// Icon paths used while one theme is active.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IconSet {
    /// Background image of the hamburger button.
    pub hamburger: String,
    /// Background image of the theme toggle button.
    pub theme_button: String,
}

/// Icon paths for both themes, relative to the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeAssets {
    pub light: IconSet,
    pub dark: IconSet,
}

impl ThemeAssets {
    #[must_use]
    pub fn for_theme(&self, theme: Theme) -> &IconSet {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

impl Default for ThemeAssets {
    fn default() -> Self {
        Self {
            light: IconSet {
                hamburger: "assets/images/hamburger-light.svg".to_string(),
                theme_button: "assets/images/theme-light.svg".to_string(),
            },
            dark: IconSet {
                hamburger: "assets/images/hamburger-dark.svg".to_string(),
                theme_button: "assets/images/theme-dark.svg".to_string(),
            },
        }
    }
}
