//! Reusable UI components
//!
//! - Buttons (gradient CTA, outline, social)
//! - Pills and tags
//! - Stat tiles for the hero card and highlight blocks
//! - The brand mark
//! - The theme toggle

mod brand_mark;
mod button;
mod pill;
mod stat_tile;
mod theme_toggle;

pub use brand_mark::*;
pub use button::*;
pub use pill::*;
pub use stat_tile::*;
pub use theme_toggle::*;
