//! Page components for the WingsPay site.

mod landing;

pub use landing::Landing;
