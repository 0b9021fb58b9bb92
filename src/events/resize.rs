use glowfield_core::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Keep the canvas at viewport size and tell the field about new bounds.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, field: &Rc<RefCell<ParticleField>>) {
    let canvas_resize = canvas.clone();
    let field = field.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas_resize);
        field.borrow_mut().resize(w as f32, h as f32);
        log::debug!("[resize] {}x{}", w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
