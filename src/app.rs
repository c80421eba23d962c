use dioxus::prelude::*;

use crate::context::{load_site_config, ThemeProvider};
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the site config and the theme store.
#[component]
pub fn App() -> Element {
    use_context_provider(load_site_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        ThemeProvider {
            Landing {}
        }
    }
}
