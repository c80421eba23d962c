//! Brand Mark
//!
//! The gradient "W" tile followed by the WingsPay wordmark.

use dioxus::prelude::*;

pub const BRAND_NAME: &str = "WingsPay";

/// Tile letter, the brand name's first character
pub fn brand_initial() -> char {
    BRAND_NAME.chars().next().unwrap_or('W')
}

#[component]
pub fn BrandMark(#[props(default = false)] compact: bool) -> Element {
    let class = if compact { "brand brand-compact" } else { "brand" };
    let initial = brand_initial();

    rsx! {
        div { class: "{class}",
            div { class: "brand-tile", "{initial}" }
            span { class: "brand-name", "{BRAND_NAME}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_w() {
        assert_eq!(brand_initial(), 'W');
    }
}
