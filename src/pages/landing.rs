//! Landing page - the whole marketing site on one scroll.

use dioxus::prelude::*;

use crate::components::{CursorTracker, Features, Footer, Hero, Highlights, LogoSlider, Navbar};

/// Landing page component.
///
/// `CursorTracker` comes last so its mount effect runs after every link and
/// button above it is in the DOM.
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "page",
            div { class: "page-backdrop" }
            Navbar {}
            main { class: "sections",
                Hero {}
                LogoSlider {}
                Features {}
                Highlights {}
            }
            Footer {}
            CursorTracker {}
        }
    }
}
