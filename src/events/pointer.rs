use glowfield_core::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input;

pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, field: &Rc<RefCell<ParticleField>>) {
    wire_pointermove(canvas, field);
    wire_pointerleave(canvas, field);
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, field: &Rc<RefCell<ParticleField>>) {
    let field = field.clone();
    let canvas_for_coords = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_for_coords);
        field.borrow_mut().pointer_moved(pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(canvas: &web::HtmlCanvasElement, field: &Rc<RefCell<ParticleField>>) {
    let field = field.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        field.borrow_mut().pointer_left();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
