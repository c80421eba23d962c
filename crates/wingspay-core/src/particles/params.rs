use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ParticleConfig;
use crate::types::Point;

/// Per-spawn parameters, drawn fresh every time a slot is reused
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnParams {
    /// Where the particle starts, in viewport pixels
    pub origin: Point,
    /// Direction of travel in radians, `[0, 2π)`
    pub angle: f64,
    pub speed: f64,
    pub distance: f64,
    pub color: String,
    pub glow_radius: f64,
    pub duration_ms: f64,
}

impl SpawnParams {
    /// Draw a new set of parameters for a particle released at `origin`.
    ///
    /// `config.palette` must be non-empty; validated configs guarantee it.
    pub fn draw<R: Rng>(origin: Point, rng: &mut R, config: &ParticleConfig) -> Self {
        let angle = rng.random_range(0.0..TAU);
        let speed = config.speed.sample(rng);
        let distance = config.distance.sample(rng);
        let color = if config.palette.is_empty() {
            String::new()
        } else {
            config.palette[rng.random_range(0..config.palette.len())].clone()
        };
        let glow_radius = config.glow_radius.sample(rng);
        let duration_ms = config.duration_ms.sample(rng);

        Self {
            origin,
            angle,
            speed,
            distance,
            color,
            glow_radius,
            duration_ms,
        }
    }

    /// Velocity vector `(cos θ · speed, sin θ · speed)`
    pub fn velocity(&self) -> Point {
        Point::new(self.angle.cos() * self.speed, self.angle.sin() * self.speed)
    }

    /// Total displacement at the end of the animation
    pub fn translation(&self) -> Point {
        let v = self.velocity();
        Point::new(v.x * self.distance, v.y * self.distance)
    }

    /// CSS `box-shadow` for the glow
    pub fn box_shadow(&self) -> String {
        format!("0 0 {:.1}px {}", self.glow_radius, self.color)
    }
}
