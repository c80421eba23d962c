//! Pills and Tags
//!
//! Rounded labels: the hero badge with its status dot, section eyebrows
//! ("Features") and highlight labels.

use dioxus::prelude::*;

use crate::components::button::class_list;

/// Properties for the Pill component
#[derive(Clone, PartialEq, Props)]
pub struct PillProps {
    /// Label text
    pub label: String,
    /// Show the small green status dot before the label
    #[props(default = false)]
    pub dot: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// A rounded badge
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Pill { label: "Features".to_string() }
///     Pill { label: "Live".to_string(), dot: true }
/// }
/// ```
#[component]
pub fn Pill(props: PillProps) -> Element {
    let full_class = class_list("pill", props.class.as_deref());

    rsx! {
        span { class: "{full_class}",
            if props.dot {
                span { class: "pill-dot" }
            }
            span { "{props.label}" }
        }
    }
}

/// Dot-separated row of short facts (compliance strip, copyright line)
#[derive(Clone, PartialEq, Props)]
pub struct DotListProps {
    pub items: Vec<String>,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn DotList(props: DotListProps) -> Element {
    let full_class = class_list("dot-list", props.class.as_deref());
    let last = props.items.len().saturating_sub(1);

    rsx! {
        div { class: "{full_class}",
            for (i, item) in props.items.iter().enumerate() {
                span { "{item}" }
                if i < last {
                    span { class: "dot-sep" }
                }
            }
        }
    }
}
