//! Pointer particle effect.
//!
//! Renders the overlay layer and mounts a [`ParticleDriver`] against it
//! once the rest of the page is in the DOM, so the interactive-element
//! snapshot sees every link and button. Unmounting the component tears the
//! driver down.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, warn};
use wingspay_core::{ParticleConfig, ParticleDriver, SiteResult};

use crate::context::use_site_config;
use crate::web::{WebParticleHost, OVERLAY_ID};

type WebDriver = ParticleDriver<WebParticleHost>;

fn mount_driver(config: ParticleConfig) -> SiteResult<Option<WebDriver>> {
    let host = WebParticleHost::attach()?;
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    ParticleDriver::mount(host, config, seed)
}

#[component]
pub fn CursorTracker() -> Element {
    let config = use_site_config().particles;
    let driver: Rc<RefCell<Option<WebDriver>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let slot = driver.clone();
    use_effect(move || {
        if slot.borrow().is_some() {
            return;
        }
        match mount_driver(config.clone()) {
            Ok(Some(mounted)) => *slot.borrow_mut() = Some(mounted),
            Ok(None) => debug!("Touch-capable display, cursor effect disabled"),
            Err(e) => warn!("Cursor effect unavailable: {}", e),
        }
    });

    use_drop(move || {
        if let Some(mounted) = driver.borrow_mut().take() {
            mounted.unmount();
        }
    });

    rsx! {
        div { id: OVERLAY_ID, class: "particle-overlay", "aria-hidden": "true" }
    }
}
