//! In-memory hosts shared by the integration tests.
//!
//! `ThemePage` and `ParticlePage` stand in for the browser document; the
//! hosts handed to the store/driver hold an `Rc` to them so tests can
//! inspect what was written after ownership moves.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wingspay_core::{ParticleHost, Point, Rect, SiteError, SiteResult, SpawnParams, ThemeHost};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// ============================================================================
// Theme
// ============================================================================

#[derive(Default)]
pub struct ThemePage {
    pub storage: RefCell<HashMap<String, String>>,
    pub storage_disabled: Cell<bool>,
    pub prefers_dark: Cell<Option<bool>>,
    pub root_classes: RefCell<Vec<String>>,
    /// Largest number of theme markers ever present at once
    pub max_markers: Cell<usize>,
    pub storage_reads: Cell<usize>,
}

impl ThemePage {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_saved(self: &Rc<Self>, value: &str) -> Rc<Self> {
        self.storage
            .borrow_mut()
            .insert("theme".to_string(), value.to_string());
        Rc::clone(self)
    }

    pub fn with_os(self: &Rc<Self>, prefers_dark: Option<bool>) -> Rc<Self> {
        self.prefers_dark.set(prefers_dark);
        Rc::clone(self)
    }

    pub fn saved(&self) -> Option<String> {
        self.storage.borrow().get("theme").cloned()
    }

    pub fn classes(&self) -> Vec<String> {
        self.root_classes.borrow().clone()
    }

    pub fn host(self: &Rc<Self>) -> MemoryThemeHost {
        MemoryThemeHost {
            page: Rc::clone(self),
        }
    }
}

pub struct MemoryThemeHost {
    page: Rc<ThemePage>,
}

impl ThemeHost for MemoryThemeHost {
    fn read_persisted(&self, key: &str) -> SiteResult<Option<String>> {
        self.page.storage_reads.set(self.page.storage_reads.get() + 1);
        if self.page.storage_disabled.get() {
            return Err(SiteError::Storage("localStorage is disabled".into()));
        }
        Ok(self.page.storage.borrow().get(key).cloned())
    }

    fn write_persisted(&self, key: &str, value: &str) -> SiteResult<()> {
        if self.page.storage_disabled.get() {
            return Err(SiteError::Storage("localStorage is disabled".into()));
        }
        self.page
            .storage
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.page.prefers_dark.get()
    }

    fn remove_root_marker(&self, marker: &str) -> SiteResult<()> {
        self.page.root_classes.borrow_mut().retain(|c| c != marker);
        Ok(())
    }

    fn add_root_marker(&self, marker: &str) -> SiteResult<()> {
        let mut classes = self.page.root_classes.borrow_mut();
        if !classes.iter().any(|c| c == marker) {
            classes.push(marker.to_string());
        }
        let markers = classes
            .iter()
            .filter(|c| *c == "light" || *c == "dark")
            .count();
        self.page
            .max_markers
            .set(self.page.max_markers.get().max(markers));
        Ok(())
    }
}

// ============================================================================
// Particles
// ============================================================================

type MoveHandler = Box<dyn FnMut(Point)>;
type EnterHandler = Box<dyn FnMut(Rect)>;
type Task = Box<dyn FnOnce()>;

#[derive(Clone, Copy, Debug)]
pub struct FakeTarget {
    pub id: usize,
    pub bounds: Rect,
}

/// Simulated document: overlay children, listeners and a virtual clock
#[derive(Default)]
pub struct ParticlePage {
    pub touch: Cell<bool>,
    /// `create_particle` fails for this index
    pub fail_at: Cell<Option<usize>>,
    pub targets: RefCell<Vec<FakeTarget>>,

    pub attached: RefCell<Vec<usize>>,
    pub renders: RefCell<Vec<(usize, SpawnParams)>>,
    finishers: RefCell<Vec<Task>>,

    next_listener_id: Cell<u64>,
    move_handlers: RefCell<Vec<(u64, MoveHandler)>>,
    enter_handlers: RefCell<Vec<(u64, usize, EnterHandler)>>,

    now_ms: Cell<u64>,
    next_timer_id: Cell<u64>,
    timers: RefCell<Vec<(u64, u64, Task)>>,
}

impl ParticlePage {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn touch() -> Rc<Self> {
        let page = Self::new();
        page.touch.set(true);
        page
    }

    pub fn host(self: &Rc<Self>) -> FakeParticleHost {
        FakeParticleHost {
            page: Rc::clone(self),
        }
    }

    pub fn add_target(&self, bounds: Rect) -> usize {
        let mut targets = self.targets.borrow_mut();
        let id = targets.len();
        targets.push(FakeTarget { id, bounds });
        id
    }

    pub fn attached_count(&self) -> usize {
        self.attached.borrow().len()
    }

    pub fn render_count(&self) -> usize {
        self.renders.borrow().len()
    }

    pub fn listener_count(&self) -> usize {
        self.move_handlers.borrow().len() + self.enter_handlers.borrow().len()
    }

    pub fn move_listener_count(&self) -> usize {
        self.move_handlers.borrow().len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn fire_move(&self, pointer: Point) {
        let mut handlers = std::mem::take(&mut *self.move_handlers.borrow_mut());
        for (_, handler) in handlers.iter_mut() {
            handler(pointer);
        }
        let mut current = self.move_handlers.borrow_mut();
        handlers.append(&mut current);
        *current = handlers;
    }

    pub fn fire_enter(&self, target_id: usize) {
        let bounds = self.targets.borrow()[target_id].bounds;
        let mut handlers = std::mem::take(&mut *self.enter_handlers.borrow_mut());
        for (_, target, handler) in handlers.iter_mut() {
            if *target == target_id {
                handler(bounds);
            }
        }
        let mut current = self.enter_handlers.borrow_mut();
        handlers.append(&mut current);
        *current = handlers;
    }

    /// Run every timer due within the next `ms` milliseconds, in order
    pub fn advance(&self, ms: u64) {
        let deadline = self.now_ms.get() + ms;
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                let due = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, at, _))| *at <= deadline)
                    .min_by_key(|(_, (id, at, _))| (*at, *id))
                    .map(|(i, _)| i);
                due.map(|i| timers.remove(i))
            };
            match next {
                Some((_, at, task)) => {
                    self.now_ms.set(at);
                    task();
                }
                None => break,
            }
        }
        self.now_ms.set(deadline);
    }

    /// Complete every animation started so far
    pub fn finish_animations(&self) {
        let finishers = std::mem::take(&mut *self.finishers.borrow_mut());
        for finish in finishers {
            finish();
        }
    }
}

pub struct FakeParticleHost {
    page: Rc<ParticlePage>,
}

pub struct FakeListener {
    page: Rc<ParticlePage>,
    id: u64,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        self.page.move_handlers.borrow_mut().retain(|(id, _)| *id != self.id);
        self.page
            .enter_handlers
            .borrow_mut()
            .retain(|(id, _, _)| *id != self.id);
    }
}

pub struct FakeTimer {
    page: Rc<ParticlePage>,
    id: u64,
}

impl Drop for FakeTimer {
    fn drop(&mut self) {
        self.page.timers.borrow_mut().retain(|(id, _, _)| *id != self.id);
    }
}

impl FakeParticleHost {
    fn listener_id(&self) -> u64 {
        let id = self.page.next_listener_id.get();
        self.page.next_listener_id.set(id + 1);
        id
    }
}

impl ParticleHost for FakeParticleHost {
    type Element = usize;
    type Target = FakeTarget;
    type Listener = FakeListener;
    type Timer = FakeTimer;

    fn is_touch_capable(&self) -> bool {
        self.page.touch.get()
    }

    fn create_particle(&self, index: usize) -> SiteResult<usize> {
        if self.page.fail_at.get() == Some(index) {
            return Err(SiteError::Dom(format!("cannot create particle {index}")));
        }
        self.page.attached.borrow_mut().push(index);
        Ok(index)
    }

    fn remove_particle(&self, element: &usize) {
        self.page.attached.borrow_mut().retain(|e| e != element);
    }

    fn render_spawn(&self, element: &usize, params: &SpawnParams, on_finish: Box<dyn FnOnce()>) {
        self.page.renders.borrow_mut().push((*element, params.clone()));
        self.page.finishers.borrow_mut().push(on_finish);
    }

    fn interactive_targets(&self, _selector: &str) -> Vec<FakeTarget> {
        self.page.targets.borrow().clone()
    }

    fn listen_pointer_move(&self, handler: Box<dyn FnMut(Point)>) -> SiteResult<FakeListener> {
        let id = self.listener_id();
        self.page.move_handlers.borrow_mut().push((id, handler));
        Ok(FakeListener {
            page: Rc::clone(&self.page),
            id,
        })
    }

    fn listen_pointer_enter(
        &self,
        target: &FakeTarget,
        handler: Box<dyn FnMut(Rect)>,
    ) -> FakeListener {
        let id = self.listener_id();
        self.page
            .enter_handlers
            .borrow_mut()
            .push((id, target.id, handler));
        FakeListener {
            page: Rc::clone(&self.page),
            id,
        }
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> FakeTimer {
        let id = self.page.next_timer_id.get();
        self.page.next_timer_id.set(id + 1);
        let at = self.page.now_ms.get() + u64::from(delay_ms);
        self.page.timers.borrow_mut().push((id, at, task));
        FakeTimer {
            page: Rc::clone(&self.page),
            id,
        }
    }
}
