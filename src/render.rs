//! Canvas 2D backend for the field's drawing seam.

use std::f64::consts::TAU;

use glam::Vec2;
use glowfield_core::{Rgba, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct Canvas2dSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext(2d) failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    fn disc_path(&self, center: Vec2, radius: f32) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
    }

    fn try_fill_circle(&self, center: Vec2, radius: f32, color: Rgba) -> Result<(), JsValue> {
        self.disc_path(center, radius)?;
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
        Ok(())
    }

    fn try_fill_circle_radial(
        &self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner_color: Rgba,
        outer_color: Rgba,
    ) -> Result<(), JsValue> {
        self.disc_path(center, outer_radius)?;
        let (x, y) = (center.x as f64, center.y as f64);
        let gradient = self.ctx.create_radial_gradient(
            x,
            y,
            inner_radius.max(0.0) as f64,
            x,
            y,
            outer_radius.max(0.0) as f64,
        )?;
        gradient.add_color_stop(0.0, &inner_color.to_string())?;
        gradient.add_color_stop(1.0, &outer_color.to_string())?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();
        Ok(())
    }

    fn try_stroke_line_gradient(
        &self,
        from: Vec2,
        to: Vec2,
        from_color: Rgba,
        to_color: Rgba,
        width: f32,
    ) -> Result<(), JsValue> {
        let (x0, y0) = (from.x as f64, from.y as f64);
        let (x1, y1) = (to.x as f64, to.y as f64);
        let gradient = self.ctx.create_linear_gradient(x0, y0, x1, y1);
        gradient.add_color_stop(0.0, &from_color.to_string())?;
        gradient.add_color_stop(1.0, &to_color.to_string())?;
        self.ctx.begin_path();
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(width as f64);
        self.ctx.move_to(x0, y0);
        self.ctx.line_to(x1, y1);
        self.ctx.stroke();
        Ok(())
    }
}

#[inline]
fn report(what: &str, res: Result<(), JsValue>) {
    if let Err(e) = res {
        log::warn!("[render] {} failed: {:?}", what, e);
    }
}

impl Surface for Canvas2dSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        report("circle", self.try_fill_circle(center, radius, color));
    }

    fn fill_circle_radial(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner_color: Rgba,
        outer_color: Rgba,
    ) {
        report(
            "halo",
            self.try_fill_circle_radial(center, inner_radius, outer_radius, inner_color, outer_color),
        );
    }

    fn stroke_line_gradient(
        &mut self,
        from: Vec2,
        to: Vec2,
        from_color: Rgba,
        to_color: Rgba,
        width: f32,
    ) {
        report(
            "line",
            self.try_stroke_line_gradient(from, to, from_color, to_color, width),
        );
    }
}
