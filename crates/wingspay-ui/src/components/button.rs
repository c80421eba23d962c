//! Button Components
//!
//! Button styles used across the landing page:
//! - Gradient: primary call to action ("Sign Up", "Get started for free")
//! - Outline: secondary action ("Login", "Talk to sales")
//! - Social: small square buttons in the footer

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Sky-to-indigo gradient, white text
    #[default]
    Gradient,
    /// Bordered, transparent background
    Outline,
    /// Compact square used for social links
    Social,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Gradient => "btn-gradient",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Social => "btn-social",
        }
    }
}

/// Joins a base class with optional extra classes
pub(crate) fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Rounded-full pill shape instead of the default rounded-lg
    #[props(default = false)]
    pub pill: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button { variant: ButtonVariant::Gradient, pill: true, "Get started for free" }
///     Button { variant: ButtonVariant::Outline, "Login" }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = if props.pill {
        format!("{} btn-pill", props.variant.class())
    } else {
        props.variant.class().to_string()
    };
    let full_class = class_list(&base, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
