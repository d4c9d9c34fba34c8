//! Delegated smooth scrolling for in-page anchor links. The reserved
//! lead-modal anchor is deliberately left alone; the modal triggers own
//! that one.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::config;

pub fn init() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let doc = document.clone();
    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(link)) = target.closest("a[href^='#']") else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        if href == config::RESERVED_ANCHOR || href.len() <= 1 {
            return;
        }
        event.prevent_default();
        if let Ok(Some(section)) = doc.query_selector(&href) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}
