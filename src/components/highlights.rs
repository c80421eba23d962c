//! Highlight blocks, alternating copy and artwork sides.

use dioxus::prelude::*;
use wingspay_ui::{Pill, StatChip};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub label: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub stats: [&'static str; 3],
    /// Artwork class, drawn in CSS
    pub art: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        label: "Enterprise Payments",
        title: "Designed for scale from day zero.",
        body: "Orchestrate complex payment flows across multiple entities, currencies and methods while maintaining complete control and observability.",
        stats: ["10M+ monthly transactions", "Active-active architecture", "99.95% uptime SLA"],
        art: "art-payments",
    },
    Highlight {
        label: "Payouts & Disbursals",
        title: "Instant payouts for your ecosystem.",
        body: "Disburse funds to vendors, partners and customers in real time with powerful approval workflows and audit-ready logs.",
        stats: ["1.3s median payout time", "Real-time reconciliation", "Configurable approval rules"],
        art: "art-payouts",
    },
    Highlight {
        label: "Compliance & Security",
        title: "Compliance handled, by design.",
        body: "Built with India-first regulatory requirements at the core so your teams can move fast while staying compliant and secure.",
        stats: ["PCI-DSS Level 1", "Tokenization & vaulting", "Granular access controls"],
        art: "art-compliance",
    },
];

#[component]
pub fn Highlights() -> Element {
    rsx! {
        section { class: "container highlights", id: "banking",
            div { class: "section-head left",
                h2 { class: "section-title", "Everything you need to run payments at internet scale." }
                p { class: "section-body",
                    "Combine powerful payment acceptance, intelligent payouts and "
                    "compliance-ready infrastructure in one modern platform."
                }
            }

            div { class: "highlight-list",
                for (i, item) in HIGHLIGHTS.iter().enumerate() {
                    HighlightBlock { key: "{item.title}", item: *item, flipped: i % 2 == 1 }
                }
            }
        }
    }
}

#[component]
fn HighlightBlock(item: Highlight, flipped: bool) -> Element {
    let class = if flipped {
        "highlight-block reveal flipped"
    } else {
        "highlight-block reveal"
    };

    rsx! {
        div { class: "{class}",
            div { class: "highlight-copy",
                Pill { label: item.label.to_string(), class: "highlight-label".to_string() }
                h3 { class: "highlight-title", "{item.title}" }
                p { class: "highlight-body", "{item.body}" }
                div { class: "highlight-stats",
                    for stat in item.stats {
                        StatChip { key: "{stat}", text: stat.to_string() }
                    }
                }
            }
            div { class: "highlight-art {item.art}", role: "img", "aria-label": "{item.label}" }
        }
    }
}
