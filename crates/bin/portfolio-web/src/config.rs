//! Configuration loading — TOML embedded in the page.
//!
//! Looks for `<script type="application/toml" id="portfolio-config">` in the
//! document. Every field has a default matching the stock markup, so the
//! element is optional.

use serde::Deserialize;

use portfolio_domain::assets::ThemeAssets;
use portfolio_domain::contract::PageContract;
use portfolio_domain::error::PortfolioError;

/// `id` of the element holding the configuration.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Class names and storage key shared with the markup.
    pub contract: PageContract,
    /// Icon paths per theme.
    pub assets: ThemeAssets,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Listener wiring.
    pub behavior: BehaviorConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// How the controller hooks into the page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Register click listeners on the hamburger and theme buttons.
    ///
    /// Turn off when the markup calls `toggleDropDown()` / `flipTheme()`
    /// itself, otherwise each click would act twice.
    pub attach_button_listeners: bool,
}

impl Config {
    /// Read the configuration element from `document`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the element exists but its TOML is malformed or
    /// fails validation.
    pub fn from_document(document: &web_sys::Document) -> Result<Self, ConfigError> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        {
            Some(text) => Self::from_toml(&text),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] when the page contract is unusable.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.contract.validate().map_err(ConfigError::Validation)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            attach_button_listeners: true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse page config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid page config")]
    Validation(#[source] PortfolioError),
}
