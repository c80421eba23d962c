//! Pointer-driven particle driver.
//!
//! ## Lifecycle
//!
//! ```text
//! mount ──► touch host?  ── yes ──► None (no elements, no listeners)
//!             │ no
//!             ▼
//!           create N elements ──► pointer-move listener
//!                             ──► pointer-enter listener per target
//!
//! pointer-move  ──► record pointer ──► trail_spawns() ──► host.schedule(delay)
//!               ──► jitter_around(latest pointer) ──► spawn_at()
//! pointer-enter ──► burst_spawns() ──► host.schedule(delay) ──► spawn_at()
//! spawn_at      ──► pool.claim() ──► host.render_spawn(on_finish ──► pool.release())
//!
//! unmount ──► drop move listener ──► drop enter listeners
//!         ──► cancel pending timers
//!         ──► remove every element ──► clear slots
//! ```
//!
//! State lives behind `Rc<RefCell<_>>`; every callback handed to the host
//! holds a `Weak`, so nothing keeps the driver alive and late callbacks are
//! no-ops.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::ParticleConfig;
use crate::error::SiteResult;
use crate::types::{Point, Rect};

use super::{
    burst_spawns, jitter_around, trail_spawns, ParticleHost, ParticlePool, ScheduledSpawn,
    SpawnOrigin, SpawnParams,
};

type SharedState<H> = Rc<RefCell<DriverState<H>>>;

struct DriverState<H: ParticleHost> {
    host: H,
    config: ParticleConfig,
    pool: ParticlePool<H::Element>,
    rng: SmallRng,
    /// Latest pointer position; trail spawns jitter around it when they run
    pointer: Point,
    pointer_listener: Option<H::Listener>,
    enter_listeners: Vec<H::Listener>,
    /// Scheduled spawns by id; dropping a timer cancels it
    pending: HashMap<u64, H::Timer>,
    /// Ids whose timers already ran, pruned on the next schedule
    fired: Vec<u64>,
    next_timer_id: u64,
    mounted: bool,
}

impl<H: ParticleHost> DriverState<H> {
    fn prune_fired(&mut self) {
        for id in self.fired.drain(..) {
            self.pending.remove(&id);
        }
    }
}

/// Owns the particle pool and every listener and timer attached for it
pub struct ParticleDriver<H: ParticleHost> {
    state: SharedState<H>,
}

impl<H: ParticleHost> ParticleDriver<H> {
    /// Mount the effect on `host`.
    ///
    /// Returns `Ok(None)` on touch-capable hosts, where nothing is created or
    /// attached. An invalid `config` is rejected before touching the host.
    /// If any element fails to create, the ones already created are removed
    /// again before the error is returned.
    pub fn mount(host: H, config: ParticleConfig, seed: u64) -> SiteResult<Option<Self>> {
        config.validate()?;

        if host.is_touch_capable() {
            tracing::info!("Touch-capable display, cursor particles disabled");
            return Ok(None);
        }

        let mut elements = Vec::with_capacity(config.capacity);
        for index in 0..config.capacity {
            match host.create_particle(index) {
                Ok(element) => elements.push(element),
                Err(e) => {
                    for element in &elements {
                        host.remove_particle(element);
                    }
                    return Err(e);
                }
            }
        }

        let driver = Self {
            state: Rc::new(RefCell::new(DriverState {
                host,
                config,
                pool: ParticlePool::from_elements(elements),
                rng: SmallRng::seed_from_u64(seed),
                pointer: Point::default(),
                pointer_listener: None,
                enter_listeners: Vec::new(),
                pending: HashMap::new(),
                fired: Vec::new(),
                next_timer_id: 0,
                mounted: true,
            })),
        };

        // On error the driver is dropped here, which unmounts it.
        driver.attach_listeners()?;

        let state = driver.state.borrow();
        tracing::info!(
            capacity = state.pool.capacity(),
            targets = state.enter_listeners.len(),
            "Cursor particles mounted"
        );
        drop(state);

        Ok(Some(driver))
    }

    fn attach_listeners(&self) -> SiteResult<()> {
        let weak = Rc::downgrade(&self.state);
        let on_move = Box::new(move |pointer: Point| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let plan = {
                let mut guard = state.borrow_mut();
                let s = &mut *guard;
                s.pointer = pointer;
                trail_spawns(&mut s.rng, &s.config)
            };
            schedule_spawns(&state, plan);
        });
        let pointer_listener = self.state.borrow().host.listen_pointer_move(on_move)?;
        self.state.borrow_mut().pointer_listener = Some(pointer_listener);

        let enter_listeners = {
            let state = self.state.borrow();
            let targets = state.host.interactive_targets(&state.config.interactive_selector);
            let listeners = targets
                .iter()
                .map(|target| {
                    let weak = Rc::downgrade(&self.state);
                    let on_enter = Box::new(move |bounds: Rect| {
                        let Some(state) = weak.upgrade() else {
                            return;
                        };
                        let plan = {
                            let mut guard = state.borrow_mut();
                            let s = &mut *guard;
                            burst_spawns(bounds, &mut s.rng, &s.config)
                        };
                        schedule_spawns(&state, plan);
                    });
                    state.host.listen_pointer_enter(target, on_enter)
                })
                .collect::<Vec<_>>();
            listeners
        };
        self.state.borrow_mut().enter_listeners = enter_listeners;

        Ok(())
    }

    /// Release one particle at `(x, y)` immediately.
    ///
    /// Returns the slot index used, or `None` once unmounted.
    pub fn spawn_particle(&self, x: f64, y: f64) -> Option<usize> {
        spawn_at(&self.state, Point::new(x, y))
    }

    pub fn capacity(&self) -> usize {
        self.state.borrow().pool.capacity()
    }

    /// Slot the next spawn will use
    pub fn cursor(&self) -> usize {
        self.state.borrow().pool.cursor()
    }

    pub fn active_count(&self) -> usize {
        self.state.borrow().pool.active_count()
    }

    /// Whether slot `index` currently has an animation in flight
    pub fn is_slot_active(&self, index: usize) -> bool {
        self.state
            .borrow()
            .pool
            .slot(index)
            .is_some_and(|slot| slot.is_active())
    }

    /// Parameters of the latest spawn on slot `index`
    pub fn slot_params(&self, index: usize) -> Option<SpawnParams> {
        self.state.borrow().pool.slot(index)?.params().cloned()
    }

    /// Scheduled spawns that have not run yet
    pub fn pending_spawns(&self) -> usize {
        let state = self.state.borrow();
        state.pending.len().saturating_sub(state.fired.len())
    }

    pub fn is_mounted(&self) -> bool {
        self.state.borrow().mounted
    }

    /// Detach every listener, cancel pending spawns and remove all elements.
    ///
    /// Safe to call more than once; also runs on drop.
    pub fn unmount(&self) {
        let mut guard = self.state.borrow_mut();
        let s = &mut *guard;
        if !s.mounted {
            return;
        }
        s.mounted = false;

        s.pointer_listener = None;
        s.enter_listeners.clear();
        s.pending.clear();
        s.fired.clear();

        let mut removed = 0usize;
        for element in s.pool.drain() {
            s.host.remove_particle(&element);
            removed += 1;
        }
        tracing::debug!(removed, "Cursor particles unmounted");
    }
}

impl<H: ParticleHost> Drop for ParticleDriver<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn schedule_spawns<H: ParticleHost>(state: &SharedState<H>, spawns: Vec<ScheduledSpawn>) {
    if spawns.is_empty() {
        return;
    }

    let mut guard = state.borrow_mut();
    let s = &mut *guard;
    if !s.mounted {
        return;
    }
    s.prune_fired();

    for spawn in spawns {
        let id = s.next_timer_id;
        s.next_timer_id += 1;

        let weak: Weak<RefCell<DriverState<H>>> = Rc::downgrade(state);
        let task = Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let at = {
                let mut guard = state.borrow_mut();
                let s = &mut *guard;
                if !s.mounted {
                    return;
                }
                s.fired.push(id);
                match spawn.origin {
                    SpawnOrigin::At(at) => at,
                    SpawnOrigin::NearPointer => jitter_around(s.pointer, &mut s.rng, &s.config),
                }
            };
            spawn_at(&state, at);
        });

        let timer = s.host.schedule(spawn.delay_ms, task);
        s.pending.insert(id, timer);
    }
}

fn spawn_at<H: ParticleHost>(state: &SharedState<H>, at: Point) -> Option<usize> {
    let weak = Rc::downgrade(state);
    let mut guard = state.borrow_mut();
    let s = &mut *guard;
    if !s.mounted {
        return None;
    }

    let params = SpawnParams::draw(at, &mut s.rng, &s.config);
    let claim = s.pool.claim(params)?;
    let (index, generation) = (claim.index, claim.generation);

    let on_finish = Box::new(move || {
        if let Some(state) = weak.upgrade() {
            state.borrow_mut().pool.release(index, generation);
        }
    });
    s.host.render_spawn(claim.element, claim.params, on_finish);

    Some(index)
}
