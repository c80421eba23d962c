//! Cursor particle effect.
//!
//! - [`SpawnParams`]: randomised per-spawn motion and colour
//! - [`ParticlePool`]: fixed ring of reusable slots, round-robin reuse
//! - [`trail_spawns`] / [`burst_spawns`]: event-to-spawn policy
//! - [`ParticleDriver`]: wires the above to a [`ParticleHost`]

mod driver;
mod host;
mod params;
mod policy;
mod pool;

pub use driver::ParticleDriver;
pub use host::ParticleHost;
pub use params::SpawnParams;
pub use policy::{burst_spawns, jitter_around, trail_spawns, ScheduledSpawn, SpawnOrigin};
pub use pool::{Claim, ParticlePool, ParticleSlot};
