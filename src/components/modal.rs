//! One shared open/close mechanism for every `.modal` dialog on the
//! page. Opening locks page scroll; closing, from whichever path, always
//! closes every open dialog and unlocks it.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

pub fn open(id: &str) {
    let Some(document) = document() else { return };
    if let Ok(Some(modal)) = document.query_selector(&format!(".modal#{id}")) {
        let _ = modal.class_list().add_1("open");
        lock_scroll(&document, true);
    }
}

pub fn close_all() {
    let Some(document) = document() else { return };
    if let Ok(open_modals) = document.query_selector_all(".modal.open") {
        for i in 0..open_modals.length() {
            let Some(modal) = open_modals.get(i).and_then(|n| n.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let _ = modal.class_list().remove_1("open");
        }
    }
    lock_scroll(&document, false);
}

/// Binds the page-lifetime close paths: backdrop click, any
/// `.modal-close` control, and the Escape key.
pub fn init() {
    let Some(document) = document() else { return };

    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        // A click on the overlay itself (not bubbled out of the content
        // box) counts as a backdrop click.
        let on_backdrop = target.class_list().contains("modal");
        let on_close_control = matches!(target.closest(".modal-close"), Ok(Some(_)));
        if on_backdrop || on_close_control {
            close_all();
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if event.key() == "Escape" {
            close_all();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    let _ =
        document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

fn lock_scroll(document: &Document, locked: bool) {
    let Some(body) = document.body() else { return };
    if locked {
        let _ = body.style().set_property("overflow", "hidden");
    } else {
        let _ = body.style().remove_property("overflow");
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}
