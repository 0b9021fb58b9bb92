// Shared helpers for host-side field tests.

#![allow(dead_code)]
use glam::Vec2;
use glowfield_core::{Rgba, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Halo {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner_color: Rgba,
        outer_color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        from_color: Rgba,
        to_color: Rgba,
        width: f32,
    },
}

/// Surface that records every call instead of drawing.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn lines(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.calls.push(DrawCall::Rect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_circle_radial(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner_color: Rgba,
        outer_color: Rgba,
    ) {
        self.calls.push(DrawCall::Halo {
            center,
            inner_radius,
            outer_radius,
            inner_color,
            outer_color,
        });
    }

    fn stroke_line_gradient(
        &mut self,
        from: Vec2,
        to: Vec2,
        from_color: Rgba,
        to_color: Rgba,
        width: f32,
    ) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            from_color,
            to_color,
            width,
        });
    }
}

/// A particle that stays put unless pushed: no drift, no orbit.
pub fn still_particle(x: f32, y: f32, base_radius: f32, color: Rgba) -> glowfield_core::Particle {
    glowfield_core::Particle::new(Vec2::new(x, y), base_radius, Vec2::ZERO, color, 0.0, 0.0)
}
