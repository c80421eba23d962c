//! Browser implementations of the core host traits.
//!
//! Everything that touches `web_sys` lives here; the theme store and the
//! particle driver only see [`ThemeHost`](wingspay_core::ThemeHost) and
//! [`ParticleHost`](wingspay_core::ParticleHost).

mod particle_host;
mod theme_host;

pub use particle_host::{WebParticleHost, OVERLAY_ID};
pub use theme_host::WebThemeHost;

use wasm_bindgen::JsValue;

/// Best-effort text for a thrown JS value
pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
