//! Hero section: pitch on the left, live transaction card on the right.

use dioxus::prelude::*;
use wingspay_ui::{Button, ButtonVariant, DotList, Pill, StatTile, StatTone};

/// (label, value, tone) tiles under the volume chart
const HERO_STATS: [(&str, &str, StatTone); 3] = [
    ("Success rate", "99.32%", StatTone::Success),
    ("Average latency", "182 ms", StatTone::Info),
    ("Smart retries", "Enabled", StatTone::Accent),
];

/// Relative bar heights for the volume sparkline
const VOLUME_BARS: [u8; 12] = [38, 52, 44, 61, 57, 70, 64, 78, 72, 85, 80, 94];

#[component]
pub fn Hero() -> Element {
    let compliance = vec![
        "PCI-DSS Level 1 compliant".to_string(),
        "99.95% uptime SLA".to_string(),
        "Trusted by leading internet-first brands".to_string(),
    ];

    rsx! {
        section { class: "container hero", id: "payments",
            div { class: "hero-copy load-in",
                Pill {
                    label: "India's modern payments stack for high-growth businesses".to_string(),
                    dot: true,
                    class: "hero-badge".to_string(),
                }

                h1 { class: "hero-title",
                    span { class: "block", "Powering the next generation" }
                    span { class: "gradient-text", "of digital-first payments." }
                }

                p { class: "hero-body",
                    "WingsPay offers enterprise-grade payment APIs, smart routing, and "
                    "intelligent risk controls to help you collect, disburse and manage "
                    "money at scale, securely and in real time."
                }

                div { class: "hero-ctas",
                    Button { variant: ButtonVariant::Gradient, pill: true, "Get started for free" }
                    Button { variant: ButtonVariant::Outline, pill: true, "Talk to sales" }
                }

                DotList { items: compliance, class: "hero-compliance".to_string() }
            }

            div { class: "hero-visual",
                div { class: "hero-card load-in-right",
                    div { class: "hero-glow hero-glow-sky" }
                    div { class: "hero-glow hero-glow-indigo" }

                    div { class: "hero-card-head",
                        span { class: "chip", "Live transaction overview" }
                        span { class: "stat-success", "+23.4% this week" }
                    }

                    div { class: "hero-volume",
                        div { class: "hero-volume-head",
                            span { "Today's volume" }
                            span { class: "muted", "INR" }
                        }
                        p { class: "hero-volume-value", "₹ 12,84,92,310" }
                        div { class: "sparkline", "aria-hidden": "true",
                            for (i, height) in VOLUME_BARS.iter().enumerate() {
                                span { key: "{i}", style: "height: {height}%" }
                            }
                        }
                    }

                    div { class: "hero-stats",
                        for (label, value, tone) in HERO_STATS {
                            StatTile {
                                key: "{label}",
                                label: label.to_string(),
                                value: value.to_string(),
                                tone: tone,
                            }
                        }
                    }
                }
            }
        }
    }
}
