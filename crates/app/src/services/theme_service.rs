//! Theme service — flips the page theme and restores it from the store.

use portfolio_domain::assets::ThemeAssets;
use portfolio_domain::contract::PageContract;
use portfolio_domain::theme::Theme;

use crate::ports::{PageElement, PageElements, PreferenceStore};
use crate::services::apply_to;

/// Owns the current [`Theme`] and keeps the page and the store in line with it.
pub struct ThemeService<S> {
    store: S,
    contract: PageContract,
    assets: ThemeAssets,
    theme: Theme,
    initialized: bool,
}

impl<S: PreferenceStore> ThemeService<S> {
    /// Create a service in the light theme, backed by the given store.
    pub fn new(store: S, contract: PageContract, assets: ThemeAssets) -> Self {
        Self {
            store,
            contract,
            assets,
            theme: Theme::default(),
            initialized: false,
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch to the opposite theme.
    ///
    /// Swaps the body class, persists the new theme name, and points both icon
    /// buttons at the new theme's assets. Returns the theme now active.
    #[tracing::instrument(skip(self, page))]
    pub fn flip_theme<E: PageElement>(&mut self, page: &PageElements<E>) -> Theme {
        let previous = self.theme;
        let next = previous.flipped();

        let old_class = self.contract.body_class(previous);
        let new_class = self.contract.body_class(next);
        apply_to(page.body.as_ref(), "body", |body| {
            body.remove_class(old_class)?;
            body.add_class(new_class)
        });

        if let Err(err) = self.store.set(&self.contract.storage_key, next.as_str()) {
            tracing::warn!(error = ?err, theme = %next, "failed to persist theme preference");
        }

        let icons = self.assets.for_theme(next);
        apply_to(page.hamburger_button.as_ref(), "hamburger button", |button| {
            button.set_background_image(&icons.hamburger)
        });
        apply_to(page.theme_button.as_ref(), "theme button", |button| {
            button.set_background_image(&icons.theme_button)
        });

        self.theme = next;
        tracing::debug!(from = %previous, to = %next, "theme flipped");
        next
    }

    /// Put the current theme's body class on the page and drop the other one.
    ///
    /// Nothing is persisted and the icons are left alone.
    #[tracing::instrument(skip(self, page))]
    pub fn apply_body_class<E: PageElement>(&self, page: &PageElements<E>) {
        let stale = self.contract.body_class(self.theme.flipped());
        let current = self.contract.body_class(self.theme);
        apply_to(page.body.as_ref(), "body", |body| {
            body.remove_class(stale)?;
            body.add_class(current)
        });
    }

    /// Apply the persisted preference, once.
    ///
    /// The page starts in the light theme, so only a stored `"dark"` changes
    /// anything. Later calls are ignored: the preference has already been
    /// applied and every flip since has been persisted.
    #[tracing::instrument(skip(self, page))]
    pub fn init_theme<E: PageElement>(&mut self, page: &PageElements<E>) -> Theme {
        if self.initialized {
            tracing::debug!(theme = %self.theme, "theme already initialized");
            return self.theme;
        }
        self.initialized = true;

        let stored = match self.store.get(&self.contract.storage_key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = ?err, "failed to read theme preference, using default");
                None
            }
        };
        let preferred = match stored.as_deref().map(str::parse::<Theme>) {
            Some(Ok(theme)) => theme,
            Some(Err(err)) => {
                tracing::debug!(error = %err, "ignoring unrecognised theme preference");
                Theme::default()
            }
            None => Theme::default(),
        };
        tracing::debug!(stored = ?stored, theme = %preferred, "restoring theme");

        if preferred != self.theme {
            self.flip_theme(page);
        }
        self.theme
    }
}
