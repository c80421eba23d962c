//! WingsPay UI Components
//!
//! Presentational Dioxus components shared by the landing page sections.
//!
//! ## Theming
//!
//! Components never branch on the theme themselves. Colours come from CSS
//! custom properties that switch under `:root.dark` / `:root.light`, so a
//! toggle only has to move the marker class on the document root.
//!
//! The one exception is [`ThemeToggle`], which picks its glyph from the
//! current [`wingspay_core::ThemeMode`].

pub mod components;

pub use components::*;
