use std::cell::RefCell;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use serde_json::json;
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wingspay_core::{ParticleHost, Point, Rect, SiteError, SiteResult, SpawnParams};

use super::js_message;

/// Id of the fixed, input-transparent layer the particles live in
pub const OVERLAY_ID: &str = "particle-overlay";

/// GSAP `power2.out`
const EASE_OUT: &str = "cubic-bezier(0.33, 1, 0.68, 1)";

/// One pooled `<div class="particle">` and its running animation.
///
/// The animation's `onfinish` closure is kept here so it outlives the JS
/// callback; it is cleared before the element is animated again.
pub struct WebParticle {
    element: web_sys::HtmlElement,
    running: RefCell<Option<(web_sys::Animation, Closure<dyn FnMut()>)>>,
}

impl WebParticle {
    fn stop(&self) {
        if let Some((animation, _on_finish)) = self.running.borrow_mut().take() {
            animation.set_onfinish(None);
            animation.cancel();
        }
    }
}

pub struct WebParticleHost {
    window: web_sys::Window,
    document: web_sys::Document,
    overlay: web_sys::Element,
}

impl WebParticleHost {
    /// Bind to the overlay rendered by `CursorTracker`
    pub fn attach() -> SiteResult<Self> {
        let window = web_sys::window().ok_or_else(|| SiteError::Dom("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| SiteError::Dom("no document".to_string()))?;
        let overlay = document
            .get_element_by_id(OVERLAY_ID)
            .ok_or_else(|| SiteError::Dom(format!("#{} not found", OVERLAY_ID)))?;

        Ok(Self {
            window,
            document,
            overlay,
        })
    }

    fn style(element: &web_sys::HtmlElement, params: &SpawnParams) -> Result<(), JsValue> {
        let style = element.style();
        style.set_property("left", &format!("{:.1}px", params.origin.x))?;
        style.set_property("top", &format!("{:.1}px", params.origin.y))?;
        style.set_property("background-color", &params.color)?;
        style.set_property("box-shadow", &params.box_shadow())?;
        Ok(())
    }

    fn animate(
        element: &web_sys::HtmlElement,
        params: &SpawnParams,
    ) -> Result<web_sys::Animation, JsValue> {
        let end = params.translation();
        let keyframes = json!([
            {
                "opacity": 1,
                "transform": "translate(0px, 0px) scale(1)",
                "easing": EASE_OUT,
            },
            {
                "opacity": 0,
                "transform": format!("translate({:.2}px, {:.2}px) scale(0)", end.x, end.y),
            },
        ]);
        let keyframes = js_sys::JSON::parse(&keyframes.to_string())?;
        Ok(element.animate_with_f64(Some(keyframes.unchecked_ref()), params.duration_ms))
    }
}

impl ParticleHost for WebParticleHost {
    type Element = WebParticle;
    type Target = web_sys::Element;
    type Listener = EventListener;
    type Timer = Timeout;

    fn is_touch_capable(&self) -> bool {
        let ontouchstart = js_sys::Reflect::has(&self.window, &JsValue::from_str("ontouchstart"))
            .unwrap_or(false);
        ontouchstart || self.window.navigator().max_touch_points() > 0
    }

    fn create_particle(&self, index: usize) -> SiteResult<WebParticle> {
        let element = self
            .document
            .create_element("div")
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().map_err(JsValue::from))
            .map_err(|e| SiteError::Dom(js_message(&e)))?;
        element.set_class_name("particle");
        element
            .set_attribute("data-slot", &index.to_string())
            .map_err(|e| SiteError::Dom(js_message(&e)))?;
        self.overlay
            .append_child(&element)
            .map_err(|e| SiteError::Dom(js_message(&e)))?;

        Ok(WebParticle {
            element,
            running: RefCell::new(None),
        })
    }

    fn remove_particle(&self, particle: &WebParticle) {
        particle.stop();
        particle.element.remove();
    }

    fn render_spawn(
        &self,
        particle: &WebParticle,
        params: &SpawnParams,
        on_finish: Box<dyn FnOnce()>,
    ) {
        particle.stop();

        if let Err(e) = Self::style(&particle.element, params) {
            warn!("Failed to style particle: {}", js_message(&e));
            return;
        }

        match Self::animate(&particle.element, params) {
            Ok(animation) => {
                let on_finish: Closure<dyn FnMut()> = Closure::once(on_finish);
                animation.set_onfinish(Some(on_finish.as_ref().unchecked_ref()));
                *particle.running.borrow_mut() = Some((animation, on_finish));
            }
            Err(e) => warn!("Failed to animate particle: {}", js_message(&e)),
        }
    }

    fn interactive_targets(&self, selector: &str) -> Vec<web_sys::Element> {
        let nodes = match self.document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                warn!("Bad interactive selector {:?}: {}", selector, js_message(&e));
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }

    fn listen_pointer_move(&self, mut handler: Box<dyn FnMut(Point)>) -> SiteResult<EventListener> {
        Ok(EventListener::new(&self.window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() {
                handler(Point::new(event.client_x() as f64, event.client_y() as f64));
            }
        }))
    }

    fn listen_pointer_enter(
        &self,
        target: &web_sys::Element,
        mut handler: Box<dyn FnMut(Rect)>,
    ) -> EventListener {
        let element = target.clone();
        EventListener::new(target, "mouseenter", move |_| {
            let bounds = element.get_bounding_client_rect();
            handler(Rect::new(bounds.x(), bounds.y(), bounds.width(), bounds.height()));
        })
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}
