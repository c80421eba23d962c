//! Theme Toggle
//!
//! Navbar button that flips the site theme. Shows a sun while the page is
//! dark (click to go light) and a moon while it is light.

use dioxus::prelude::*;
use wingspay_core::ThemeMode;

/// Glyph shown on the toggle
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToggleGlyph {
    Sun,
    Moon,
}

impl ToggleGlyph {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => ToggleGlyph::Sun,
            ThemeMode::Light => ToggleGlyph::Moon,
        }
    }

    /// SVG path data, 24x24 stroke icons
    pub fn path(&self) -> &'static str {
        match self {
            ToggleGlyph::Sun => "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z",
            ToggleGlyph::Moon => "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z",
        }
    }
}

/// Stroke icon for the current mode
#[component]
pub fn ThemeToggleIcon(mode: ThemeMode) -> Element {
    let glyph = ToggleGlyph::for_mode(mode);

    rsx! {
        svg {
            class: "icon",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            "data-glyph": if glyph == ToggleGlyph::Sun { "sun" } else { "moon" },
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: glyph.path(),
            }
        }
    }
}

/// Properties for the ThemeToggle component
#[derive(Clone, PartialEq, Props)]
pub struct ThemeToggleProps {
    /// Current theme
    pub mode: ThemeMode,
    /// Called on click; the owner flips the theme
    pub on_toggle: EventHandler<()>,
}

/// The toggle button itself
///
/// # Example
///
/// ```rust,ignore
/// let theme = use_theme();
/// rsx! {
///     ThemeToggle { mode: theme.mode(), on_toggle: move |_| theme.toggle() }
/// }
/// ```
#[component]
pub fn ThemeToggle(props: ThemeToggleProps) -> Element {
    rsx! {
        button {
            class: "icon-btn theme-toggle",
            r#type: "button",
            "aria-label": "Toggle theme",
            onclick: move |_| props.on_toggle.call(()),
            ThemeToggleIcon { mode: props.mode }
        }
    }
}
