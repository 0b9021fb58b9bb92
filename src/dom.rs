use glowfield_core::FieldParams;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{MAX_PARTICLES, PARTICLES_ATTR};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// Match the canvas backing store to the window's inner size and return it.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let width = w
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = w
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        canvas.set_width(width.max(0.0) as u32);
        canvas.set_height(height.max(0.0) as u32);
    }
    (canvas.width(), canvas.height())
}

pub fn parse_particle_count(raw: &str) -> anyhow::Result<usize> {
    let count: usize = raw
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("{}={:?}: {}", PARTICLES_ATTR, raw, e))?;
    if count > MAX_PARTICLES {
        anyhow::bail!("{}={} exceeds {}", PARTICLES_ATTR, count, MAX_PARTICLES);
    }
    Ok(count)
}

/// Field parameters for this canvas: defaults, plus the optional count override.
pub fn params_from_attr(raw: Option<&str>) -> FieldParams {
    let defaults = FieldParams::default();
    let Some(raw) = raw else {
        return defaults;
    };
    let params = match parse_particle_count(raw) {
        Ok(count) => defaults.clone().with_particle_count(count),
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            return defaults;
        }
    };
    match params.validate() {
        Ok(()) => params,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            defaults
        }
    }
}

#[inline]
pub fn params_from_canvas(canvas: &web::HtmlCanvasElement) -> FieldParams {
    params_from_attr(canvas.get_attribute(PARTICLES_ATTR).as_deref())
}
