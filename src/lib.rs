#![cfg(target_arch = "wasm32")]
use glowfield_core::ParticleField;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glowfield starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        // The canvas may not be parsed yet; wait for the DOM.
        let ready = Closure::once(run_logged);
        document
            .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())?;
        ready.forget();
    } else {
        run_logged();
    }
    Ok(())
}

fn run_logged() {
    if let Err(e) = run() {
        log::error!("init error: {:?}", e);
    }
}

fn run() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;
    let surface = render::Canvas2dSurface::from_canvas(&canvas)?;

    // Surface must be sized before particles are spawned into it.
    let (width, height) = dom::sync_canvas_to_viewport(&canvas);
    let params = dom::params_from_canvas(&canvas);
    let mut rng = StdRng::from_entropy();
    let field = ParticleField::new(params, width as f32, height as f32, &mut rng)?;
    log::info!(
        "[field] {} particles on {}x{} canvas",
        field.particles().len(),
        width,
        height
    );
    let field = Rc::new(RefCell::new(field));

    events::wire_canvas_resize(&canvas, &field);
    events::wire_pointer_handlers(&canvas, &field);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(field, surface)));
    frame::start_loop(frame_ctx);
    Ok(())
}
