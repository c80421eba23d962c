//! UI Components for the WingsPay landing page.
//!
//! One component per page section, plus the particle overlay.

mod cursor_tracker;
mod features;
mod footer;
mod hero;
mod highlights;
mod logo_slider;
mod navbar;

pub use cursor_tracker::CursorTracker;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use highlights::Highlights;
pub use logo_slider::LogoSlider;
pub use navbar::Navbar;
