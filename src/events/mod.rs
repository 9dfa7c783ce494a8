use crate::constants::FLAME_ANIMATION;
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub pending_bursts: Rc<RefCell<u32>>,
    pub head: web::HtmlElement,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_client_px(&ev);
        let mut ps = w.pointer.borrow_mut();
        ps.x = pos.x;
        ps.y = pos.y;
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();

    // Bursts spawn at the head, which only the frame tick can see, so the
    // handler just queues the request and lets the next frame drain it.
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        *w.pending_bursts.borrow_mut() += 1;
        restart_flame(&w.head);
        log::debug!("[click] burst queued");
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

// Re-trigger the head's flame CSS animation; clearing the property and
// forcing a reflow makes the browser restart it.
fn restart_flame(head: &web::HtmlElement) {
    if let Ok(Some(el)) = head.query_selector(".flame") {
        if let Ok(flame) = el.dyn_into::<web::HtmlElement>() {
            _ = flame.style().remove_property("animation");
            let _ = flame.offset_width();
            dom::set_style(&flame, "animation", FLAME_ANIMATION);
        }
    }
}
