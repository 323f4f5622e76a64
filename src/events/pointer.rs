use crate::input;
use crate::SharedApp;
use std::cell::RefCell;
use std::rc::Rc;
use triangle_core::{PointerGate, PointerInput};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub app: SharedApp,
    pub gate: Rc<RefCell<PointerGate>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    // up, cancel and lost capture all end the owning pointer's drag
    for event in ["pointerup", "pointercancel", "lostpointercapture"] {
        wire_pointer_end(&w, event);
    }
}

fn add_listener(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    add_listener(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
        if !w2.gate.borrow_mut().begin(ev.pointer_id()) {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w2.canvas);
        w2.app
            .borrow_mut()
            .pointer(PointerInput::Down { x: pos.x, y: pos.y });
        // keep receiving move/up when the pointer leaves the canvas mid-drag
        _ = w2.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    add_listener(&w.canvas, "pointermove", move |ev: web::PointerEvent| {
        if !w2.gate.borrow().owns(ev.pointer_id()) {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w2.canvas);
        w2.app
            .borrow_mut()
            .pointer(PointerInput::Move { x: pos.x, y: pos.y });
    });
}

fn wire_pointer_end(w: &InputWiring, event: &'static str) {
    let w2 = w.clone();
    add_listener(&w.canvas, event, move |ev: web::PointerEvent| {
        if !w2.gate.borrow_mut().end(ev.pointer_id()) {
            return;
        }
        log::debug!("[mouse] {} from pointer {}", event, ev.pointer_id());
        w2.app.borrow_mut().pointer(PointerInput::Up);
    });
}
