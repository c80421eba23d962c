//! Site-wide context for the WingsPay landing page.
//!
//! Provides the parsed [`SiteConfig`] and the theme store to every
//! component via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! ThemeProvider { Landing {} }
//!
//! // In child components
//! let theme = use_theme();
//! if theme.mode().is_dark() { ... }
//! ```

use dioxus::prelude::*;
use tracing::{info, warn};
use wingspay_core::{SiteConfig, ThemeMode, ThemeStore};

use crate::web::WebThemeHost;

/// `site.json`, embedded at build time
const SITE_CONFIG: &str = include_str!("../site.json");

/// Parse the embedded config, falling back to defaults if it is invalid
pub fn load_site_config() -> SiteConfig {
    match SiteConfig::from_json(SITE_CONFIG) {
        Ok(config) => {
            info!("Loaded site config");
            config
        }
        Err(e) => {
            warn!("Invalid site.json, using defaults: {}", e);
            SiteConfig::default()
        }
    }
}

/// Hook to access the site config provided by `App`
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Shared theme store type
pub type SharedTheme = Signal<ThemeStore<WebThemeHost>>;

/// Handle to the theme store.
///
/// Reading [`ThemeContext::mode`] subscribes the calling component, so the
/// toggle icon re-renders after [`ThemeContext::toggle`].
#[derive(Clone, Copy)]
pub struct ThemeContext {
    store: SharedTheme,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.store.read().mode()
    }

    /// Flip the theme, apply the root marker and persist it
    pub fn toggle(&self) -> ThemeMode {
        let mut store = self.store;
        let mode = store.write().toggle();
        info!("Theme toggled to {}", mode);
        mode
    }
}

/// Owns the theme store and applies the resolved mode once mounted.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let config = use_site_config();
    let store: SharedTheme =
        use_signal(|| ThemeStore::new(WebThemeHost::detect(), config.theme.clone()));
    use_context_provider(|| ThemeContext { store });

    // Authoritative on mount: overrides whatever marker the page shipped with
    use_effect(move || store.peek().sync());

    rsx! {
        {children}
    }
}

/// Hook to access the theme.
///
/// # Panics
///
/// When called from a component that is not below [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    try_use_context::<ThemeContext>()
        .unwrap_or_else(|| panic!("use_theme() must be called inside a ThemeProvider"))
}
