//! "Trusted by" marquee.
//!
//! The logo set is rendered three times in a track three viewports wide;
//! the `marquee` keyframes shift it left by one set every 20 s, so the loop
//! point is invisible.

use dioxus::prelude::*;

pub const LOGOS: [&str; 8] = [
    "Northwind",
    "Kestrel",
    "Lumenly",
    "Orbitra",
    "Paperfold",
    "Tidewater",
    "Quanta",
    "Brightline",
];

/// Copies of the logo set in the track
pub const REPEATS: usize = 3;

/// Logo names in track order
pub fn track() -> impl Iterator<Item = &'static str> {
    LOGOS.iter().copied().cycle().take(LOGOS.len() * REPEATS)
}

#[component]
pub fn LogoSlider() -> Element {
    rsx! {
        section { class: "logo-slider", id: "partners",
            div { class: "container",
                p { class: "eyebrow center", "Trusted by leading companies" }

                div { class: "logo-viewport",
                    div { class: "logo-track",
                        for (i, name) in track().enumerate() {
                            div { key: "{i}", class: "logo-item", "{name}" }
                        }
                    }
                    div { class: "logo-fade logo-fade-left" }
                    div { class: "logo-fade logo-fade-right" }
                }
            }
        }
    }
}
