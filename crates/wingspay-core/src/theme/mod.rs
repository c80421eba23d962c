//! Light/dark theme state.
//!
//! [`ThemeMode`] is the value; [`ThemeStore`] owns it and keeps the
//! document root marker and persisted preference in step with it.

mod mode;
mod store;

pub use mode::ThemeMode;
pub use store::{resolve_initial_theme, ThemeHost, ThemeStore};
