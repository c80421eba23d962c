//! Site footer.

use chrono::Datelike;
use dioxus::prelude::*;
use wingspay_ui::{BrandMark, Button, ButtonVariant, DotList};

pub const SALES_EMAIL: &str = "sales@wingspay.in";

/// (heading, items); the last column holds the social buttons instead
pub const FOOTER_COLUMNS: [(&str, &[&str]); 4] = [
    ("Products", &["Payment Gateway", "Payouts", "UPI Stack", "Subscriptions"]),
    ("Solutions", &["Marketplaces", "SaaS & B2B", "Fintech & Lending", "D2C & Ecommerce"]),
    ("Resources", &["API Docs", "Integration Guides", "Status & Uptime", "Security"]),
    ("Connect", &[]),
];

const SOCIALS: [(&str, &str); 3] = [("in", "LinkedIn"), ("X", "X"), ("↗", "Blog")];

pub fn copyright(year: i32) -> String {
    format!("© {} WingsPay Technologies.", year)
}

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();
    let legal = vec![copyright(year), "All rights reserved.".to_string()];

    rsx! {
        footer { class: "footer", id: "pricing",
            div { class: "container footer-grid",
                div { class: "footer-brand",
                    BrandMark { compact: true }
                    p { class: "footer-blurb",
                        "WingsPay is a modern payments and payouts platform helping "
                        "internet-first businesses orchestrate money movement securely and "
                        "at scale."
                    }
                    DotList { items: legal, class: "footer-legal".to_string() }
                    div { class: "footer-policies",
                        a { href: "#support", "Terms" }
                        span { class: "dot-sep" }
                        a { href: "#support", "Privacy" }
                    }
                }

                for (title, items) in FOOTER_COLUMNS {
                    div { key: "{title}", class: "footer-column",
                        h4 { "{title}" }
                        if items.is_empty() {
                            div { class: "footer-connect",
                                div { class: "footer-socials",
                                    for (glyph, name) in SOCIALS {
                                        Button {
                                            key: "{name}",
                                            variant: ButtonVariant::Social,
                                            class: format!("social-{}", name.to_lowercase()),
                                            "{glyph}"
                                        }
                                    }
                                }
                                p { class: "footer-note",
                                    "For enterprise pricing, reach out to "
                                    a { href: "mailto:{SALES_EMAIL}", "{SALES_EMAIL}" }
                                }
                            }
                        } else {
                            ul {
                                for item in items.iter() {
                                    li { key: "{item}", "{item}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
