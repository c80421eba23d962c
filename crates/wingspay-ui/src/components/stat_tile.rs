//! Stat Tile Component
//!
//! Small label/value card used in the hero's live transaction overview,
//! plus the single-line stat chip used in highlight blocks.

use dioxus::prelude::*;

/// Accent colour for a stat value
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StatTone {
    /// Emerald, good news
    Success,
    /// Sky blue
    #[default]
    Info,
    /// Indigo
    Accent,
}

impl StatTone {
    /// Returns the CSS class for the value text
    pub fn class(&self) -> &'static str {
        match self {
            StatTone::Success => "stat-success",
            StatTone::Info => "stat-info",
            StatTone::Accent => "stat-accent",
        }
    }
}

/// Properties for the StatTile component
#[derive(Clone, PartialEq, Props)]
pub struct StatTileProps {
    pub label: String,
    pub value: String,
    #[props(default)]
    pub tone: StatTone,
}

/// Label above a large coloured value
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatTile { label: "Success rate", value: "99.32%", tone: StatTone::Success }
/// }
/// ```
#[component]
pub fn StatTile(props: StatTileProps) -> Element {
    let tone = props.tone.class();

    rsx! {
        div { class: "stat-tile",
            p { class: "stat-label", "{props.label}" }
            p { class: "stat-value {tone}", "{props.value}" }
        }
    }
}

/// Single-line stat chip
#[component]
pub fn StatChip(text: String) -> Element {
    rsx! {
        div { class: "stat-chip", "{text}" }
    }
}
