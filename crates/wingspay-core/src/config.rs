//! Site configuration
//!
//! The web binary embeds `site.json` and parses it with
//! [`SiteConfig::from_json`]. Every field has a default, so a partial file
//! (or `{}`) is valid.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::theme::ThemeMode;

/// Top-level configuration for the landing page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub particles: ParticleConfig,
    pub nav: NavConfig,
}

impl SiteConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SiteResult<()> {
        self.theme.validate()?;
        self.particles.validate()?;
        self.nav.validate()
    }
}

/// Theme store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// localStorage key holding `"dark"` or `"light"`
    pub storage_key: String,
    /// Used when neither storage nor the OS has an opinion
    pub fallback: ThemeMode,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            fallback: ThemeMode::Dark,
        }
    }
}

impl ThemeConfig {
    fn validate(&self) -> SiteResult<()> {
        if self.storage_key.is_empty() {
            return Err(SiteError::Config("theme.storage_key is empty".into()));
        }
        Ok(())
    }
}

/// A closed-open sampling band `[min, max)`; `min == max` is a constant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.max > self.min {
            rng.random_range(self.min..self.max)
        } else {
            self.min
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if self.max > self.min {
            value >= self.min && value < self.max
        } else {
            value == self.min
        }
    }

    fn validate(&self, name: &str) -> SiteResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(SiteError::Config(format!(
                "{name}: band [{}, {}) is not a valid range",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Particle pool and spawn policy settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Number of pooled particle elements
    pub capacity: usize,
    pub speed: Band,
    pub distance: Band,
    pub glow_radius: Band,
    pub duration_ms: Band,
    /// Accent colours, one picked per spawn
    pub palette: Vec<String>,
    /// Chance that a pointer-move event releases a trail
    pub trail_probability: f64,
    /// Trail length is drawn from `1..=max_trail`
    pub max_trail: usize,
    /// Full width of the square jitter window around the pointer
    pub trail_jitter: f64,
    pub trail_stagger_ms: u32,
    pub burst_count: usize,
    pub burst_stagger_ms: u32,
    /// Elements that get the pointer-enter burst, captured once at mount
    pub interactive_selector: String,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            capacity: 20,
            speed: Band::new(2.0, 5.0),
            distance: Band::new(30.0, 80.0),
            glow_radius: Band::new(8.0, 16.0),
            duration_ms: Band::new(800.0, 1200.0),
            palette: vec![
                "rgba(14, 165, 233, 0.8)".to_string(),
                "rgba(129, 140, 248, 0.8)".to_string(),
                "rgba(59, 130, 246, 0.8)".to_string(),
                "rgba(139, 92, 246, 0.8)".to_string(),
            ],
            trail_probability: 0.7,
            max_trail: 3,
            trail_jitter: 20.0,
            trail_stagger_ms: 50,
            burst_count: 8,
            burst_stagger_ms: 30,
            interactive_selector: r#"a, button, input, textarea, [role="button"]"#.to_string(),
        }
    }
}

impl ParticleConfig {
    /// Range the trail length is drawn from
    pub fn trail_len(&self) -> RangeInclusive<usize> {
        1..=self.max_trail
    }

    /// Reject settings the spawn policy cannot sample from
    pub fn validate(&self) -> SiteResult<()> {
        if self.capacity == 0 {
            return Err(SiteError::Config("particles.capacity must be > 0".into()));
        }
        self.speed.validate("particles.speed")?;
        self.distance.validate("particles.distance")?;
        self.glow_radius.validate("particles.glow_radius")?;
        self.duration_ms.validate("particles.duration_ms")?;
        if self.duration_ms.min < 0.0 {
            return Err(SiteError::Config(
                "particles.duration_ms must not be negative".into(),
            ));
        }
        if self.palette.is_empty() {
            return Err(SiteError::Config("particles.palette is empty".into()));
        }
        if !(0.0..=1.0).contains(&self.trail_probability) {
            return Err(SiteError::Config(format!(
                "particles.trail_probability {} is outside [0, 1]",
                self.trail_probability
            )));
        }
        if self.max_trail == 0 {
            return Err(SiteError::Config("particles.max_trail must be >= 1".into()));
        }
        if !self.trail_jitter.is_finite() || self.trail_jitter < 0.0 {
            return Err(SiteError::Config(
                "particles.trail_jitter must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}

/// Navigation bar settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// `scrollY` beyond which the bar switches to its solid style
    pub scroll_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 20.0,
        }
    }
}

impl NavConfig {
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.scroll_threshold
    }

    fn validate(&self) -> SiteResult<()> {
        if !self.scroll_threshold.is_finite() {
            return Err(SiteError::Config("nav.scroll_threshold is not finite".into()));
        }
        Ok(())
    }
}
