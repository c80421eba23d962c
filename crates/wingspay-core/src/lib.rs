//! WingsPay Landing Site Core Library
//!
//! Host-independent state behind the landing page's two interactive
//! mechanisms.
//!
//! ## Overview
//!
//! - **Theme store**: the active light/dark theme, resolved once from
//!   persisted storage, then the OS colour-scheme preference, then a
//!   fallback. Every mutation re-applies the document root marker and
//!   persists the new value.
//! - **Particle pool driver**: a fixed ring of reusable particle elements
//!   released by pointer movement and by pointer-enter on interactive
//!   elements, with no allocation after mount.
//!
//! Both talk to the browser only through the [`ThemeHost`] and
//! [`ParticleHost`] traits, so they run unchanged against in-memory fakes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wingspay_core::{ThemeConfig, ThemeStore};
//!
//! let mut store = ThemeStore::new(Some(host), ThemeConfig::default());
//! store.sync();
//! let mode = store.toggle();
//! ```

pub mod config;
pub mod error;
pub mod particles;
pub mod theme;
pub mod types;

// Re-exports
pub use config::{Band, NavConfig, ParticleConfig, SiteConfig, ThemeConfig};
pub use error::{SiteError, SiteResult};
pub use particles::{
    burst_spawns, jitter_around, trail_spawns, ParticleDriver, ParticleHost, ParticlePool,
    ParticleSlot, ScheduledSpawn, SpawnOrigin, SpawnParams,
};
pub use theme::{resolve_initial_theme, ThemeHost, ThemeMode, ThemeStore};
pub use types::{Point, Rect};
