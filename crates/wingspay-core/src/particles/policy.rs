//! When and where particles are released.
//!
//! Both functions only plan; the driver turns each [`ScheduledSpawn`] into a
//! delayed host task.

use rand::Rng;

use crate::config::ParticleConfig;
use crate::types::{Point, Rect};

/// Where a scheduled spawn lands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnOrigin {
    /// Fixed when the event fired
    At(Point),
    /// Jittered around the pointer position at the moment the spawn runs
    NearPointer,
}

/// A spawn to run `delay_ms` after the triggering event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledSpawn {
    pub origin: SpawnOrigin,
    pub delay_ms: u32,
}

/// Trail behind a pointer-move event.
///
/// With `trail_probability`, releases 1..=`max_trail` particles staggered by
/// `trail_stagger_ms` (0, 50, 100 ...). Each one lands near wherever the
/// pointer is when it runs, so a moving cursor drags the cluster along.
/// Otherwise returns nothing.
pub fn trail_spawns<R: Rng>(rng: &mut R, config: &ParticleConfig) -> Vec<ScheduledSpawn> {
    if !rng.random_bool(config.trail_probability) {
        return Vec::new();
    }

    let count = rng.random_range(config.trail_len());
    (0..count)
        .map(|i| ScheduledSpawn {
            origin: SpawnOrigin::NearPointer,
            delay_ms: i as u32 * config.trail_stagger_ms,
        })
        .collect()
}

/// A point inside the `trail_jitter` square centred on `pointer`
pub fn jitter_around<R: Rng>(pointer: Point, rng: &mut R, config: &ParticleConfig) -> Point {
    let dx = (rng.random::<f64>() - 0.5) * config.trail_jitter;
    let dy = (rng.random::<f64>() - 0.5) * config.trail_jitter;
    pointer.offset(dx, dy)
}

/// Burst over an interactive element the pointer just entered.
///
/// Always `burst_count` spawns, each inside `bounds`, staggered by
/// `burst_stagger_ms`.
pub fn burst_spawns<R: Rng>(
    bounds: Rect,
    rng: &mut R,
    config: &ParticleConfig,
) -> Vec<ScheduledSpawn> {
    let center = bounds.center();
    (0..config.burst_count)
        .map(|i| {
            let dx = (rng.random::<f64>() - 0.5) * bounds.width;
            let dy = (rng.random::<f64>() - 0.5) * bounds.height;
            ScheduledSpawn {
                origin: SpawnOrigin::At(center.offset(dx, dy)),
                delay_ms: i as u32 * config.burst_stagger_ms,
            }
        })
        .collect()
}
