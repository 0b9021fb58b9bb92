use glowfield_core::ParticleField;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::FPS_REPORT_INTERVAL_SEC;
use crate::render::Canvas2dSurface;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub surface: Canvas2dSurface,

    pub last_report: Instant,
    pub frames_since_report: u32,
}

impl FrameContext {
    pub fn new(field: Rc<RefCell<ParticleField>>, surface: Canvas2dSurface) -> Self {
        Self {
            field,
            surface,
            last_report: Instant::now(),
            frames_since_report: 0,
        }
    }

    pub fn frame(&mut self) {
        self.field.borrow_mut().tick(&mut self.surface);
        self.frames_since_report += 1;

        let elapsed = self.last_report.elapsed().as_secs_f32();
        if elapsed >= FPS_REPORT_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps over {:.1}s",
                self.frames_since_report as f32 / elapsed,
                elapsed
            );
            self.last_report = Instant::now();
            self.frames_since_report = 0;
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `frame()` from requestAnimationFrame until the page goes away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
