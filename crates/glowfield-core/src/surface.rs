//! Drawing seam between the simulation and whatever backs the viewport.
//!
//! The field never owns its surface; the front-end hands one in every frame.
//! Implementations are expected to swallow backend errors (the browser
//! canvas logs them) so that a bad frame degrades the picture, never the loop.

use glam::Vec2;

use crate::color::Rgba;

pub trait Surface {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);

    /// Fill a disc with a solid color.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Fill a disc of `outer_radius` with a radial gradient running from
    /// `inner_color` at `inner_radius` to `outer_color` at `outer_radius`.
    fn fill_circle_radial(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner_color: Rgba,
        outer_color: Rgba,
    );

    /// Stroke a straight line whose color blends linearly between its ends.
    fn stroke_line_gradient(
        &mut self,
        from: Vec2,
        to: Vec2,
        from_color: Rgba,
        to_color: Rgba,
        width: f32,
    );
}
