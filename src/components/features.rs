//! Feature grid.

use dioxus::prelude::*;
use wingspay_ui::Pill;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Gradient class for the card wash and border
    pub gradient: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "💳",
        title: "Unified Payments Stack",
        description: "Accept cards, UPI, netbanking and more with a single, modern API that scales as you grow.",
        gradient: "grad-sky",
    },
    Feature {
        icon: "⚡",
        title: "Smart Routing Engine",
        description: "Auto-route transactions via the best-performing gateways for higher success rates and uptime.",
        gradient: "grad-emerald",
    },
    Feature {
        icon: "🛡️",
        title: "Real-time Risk Controls",
        description: "Detect anomalies, set granular limits and protect every transaction with machine-led intelligence.",
        gradient: "grad-violet",
    },
    Feature {
        icon: "💸",
        title: "Instant Settlements",
        description: "Accelerate cash flow with configurable settlement cycles and automated reconciliation.",
        gradient: "grad-amber",
    },
    Feature {
        icon: "🔒",
        title: "Enterprise-grade Security",
        description: "PCI-DSS Level 1, tokenization, encryption at rest and in transit. Secure by default.",
        gradient: "grad-rose",
    },
    Feature {
        icon: "⚙️",
        title: "Developer-first Experience",
        description: "Clear documentation, SDKs and observability tools so you can ship payment experiences faster.",
        gradient: "grad-indigo",
    },
];

#[component]
pub fn Features() -> Element {
    rsx! {
        section { class: "container features", id: "features",
            div { class: "section-head",
                Pill { label: "Features".to_string() }
                h2 { class: "section-title",
                    "Built for modern "
                    span { class: "gradient-text", "internet-first " }
                    "businesses."
                }
                p { class: "section-body",
                    "From high-volume marketplaces to fast-growing SaaS companies, WingsPay "
                    "offers a complete suite of payment capabilities with enterprise-grade "
                    "reliability."
                }
            }

            div { class: "feature-grid",
                for (i, feature) in FEATURES.iter().enumerate() {
                    FeatureCard { key: "{feature.title}", feature: *feature, index: i }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> Element {
    // staggered reveal
    let delay = index * 80;

    rsx! {
        article {
            class: "feature-card reveal {feature.gradient}",
            style: "animation-delay: {delay}ms",
            div { class: "feature-wash" }
            div { class: "feature-icon", "{feature.icon}" }
            h3 { class: "feature-title", "{feature.title}" }
            p { class: "feature-body", "{feature.description}" }
        }
    }
}
