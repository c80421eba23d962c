use crate::error::SiteResult;
use crate::types::{Point, Rect};

use super::SpawnParams;

/// Everything the particle driver needs from the page.
///
/// `Listener` and `Timer` are guards: dropping a listener detaches it and
/// dropping a timer cancels it if it has not fired yet. The driver relies on
/// this for teardown.
///
/// Callbacks handed to the host (`on_finish`, handlers, scheduled tasks)
/// must only be invoked from the event loop, never from inside the host call
/// that registered them.
pub trait ParticleHost: 'static {
    /// One pooled particle element
    type Element: 'static;
    /// An interactive element that receives the pointer-enter burst
    type Target: 'static;
    type Listener: 'static;
    type Timer: 'static;

    /// Touch-capable displays get no cursor effect at all
    fn is_touch_capable(&self) -> bool;

    /// Create particle `index` and attach it to the overlay layer
    fn create_particle(&self, index: usize) -> SiteResult<Self::Element>;

    /// Detach a particle element from the document
    fn remove_particle(&self, element: &Self::Element);

    /// Position and colour `element` from `params`, then start a finite
    /// fade/shrink/translate animation that calls `on_finish` when done.
    ///
    /// An animation that is cut short need not call `on_finish`.
    fn render_spawn(
        &self,
        element: &Self::Element,
        params: &SpawnParams,
        on_finish: Box<dyn FnOnce()>,
    );

    /// Snapshot of the elements matching `selector`
    fn interactive_targets(&self, selector: &str) -> Vec<Self::Target>;

    fn listen_pointer_move(&self, handler: Box<dyn FnMut(Point)>) -> SiteResult<Self::Listener>;

    /// `handler` receives the target's bounding box at the time of entry
    fn listen_pointer_enter(
        &self,
        target: &Self::Target,
        handler: Box<dyn FnMut(Rect)>,
    ) -> Self::Listener;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Timer;
}
