//! One-shot reveal-on-scroll. Tracked elements start hidden and offset
//! (see index.html); the observer adds `visible` on first intersection
//! and immediately stops watching that element, draining the pending set
//! as each one fires.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// FAQ items are excluded on purpose: the accordion re-renders their
/// class attribute, which would wipe an externally added `visible`.
const REVEAL_SELECTOR: &str = ".feature-card, .pricing-card, .section-head";

const REVEAL_THRESHOLD: f64 = 0.15;

pub fn init() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let element = entry.target();
                let _ = element.class_list().add_1("visible");
                observer.unobserve(&element);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    on_intersect.forget();

    if let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) {
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }
    }
}
