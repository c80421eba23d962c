//! Fixed navigation bar.
//!
//! Brand, section links, theme toggle and the auth buttons. Switches to a
//! solid style once the page scrolls past `nav.scroll_threshold`.

use std::rc::Rc;

use dioxus::prelude::*;
use gloo::events::EventListener;
use wingspay_ui::{BrandMark, Button, ButtonVariant, ThemeToggle};

use crate::context::{use_site_config, use_theme};

/// (label, anchor)
pub const NAV_LINKS: [(&str, &str); 7] = [
    ("Payments", "#payments"),
    ("Banking+", "#banking"),
    ("Payroll", "#payroll"),
    ("Engage", "#engage"),
    ("Partners", "#partners"),
    ("Resources", "#resources"),
    ("Pricing", "#pricing"),
];

#[component]
pub fn Navbar() -> Element {
    let theme = use_theme();
    let nav = use_site_config().nav;
    let mut scrolled = use_signal(|| false);

    // Window scroll listener, detached when the navbar unmounts
    use_hook(move || {
        let window = web_sys::window()?;
        let listener = EventListener::new(&window, "scroll", move |_| {
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            let next = nav.is_scrolled(y);
            if *scrolled.peek() != next {
                scrolled.set(next);
            }
        });
        Some(Rc::new(listener))
    });

    let header_class = if scrolled() { "navbar scrolled" } else { "navbar" };

    rsx! {
        header { class: "{header_class}",
            div { class: "container navbar-inner",
                a { class: "navbar-brand", href: "#", BrandMark {} }

                nav { class: "navbar-links",
                    for (label, href) in NAV_LINKS {
                        a { key: "{label}", href: "{href}", "{label}" }
                    }
                }

                div { class: "navbar-actions",
                    ThemeToggle {
                        mode: theme.mode(),
                        on_toggle: move |_| {
                            theme.toggle();
                        },
                    }
                    Button { variant: ButtonVariant::Outline, class: "hide-mobile".to_string(), "Login" }
                    Button { variant: ButtonVariant::Gradient,
                        "Sign Up"
                        svg {
                            class: "icon icon-sm",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M9 5l7 7-7 7",
                            }
                        }
                    }
                }
            }
        }
    }
}
