use std::f32::consts::TAU;

use glam::Vec2;
use rand::prelude::*;

use crate::color::{Rgba, PASTEL_PALETTE, TRANSPARENT_WHITE};
use crate::constants::{
    BASE_RADIUS_RANGE, BOUNCE_DAMPING, HALO_SCALE, ORBIT_RADIUS_RANGE, REPULSION_MAX_PUSH,
    SPEED_RANGE,
};
use crate::params::FieldParams;
use crate::surface::Surface;

/// One glowing point.
///
/// `base_radius`, `orbit_radius` and `color` are fixed at construction and
/// only readable afterwards. `radius` never drops below `base_radius`.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    radius: f32,
    base_radius: f32,
    color: Rgba,
    phase: f32,
    orbit_radius: f32,
}

impl Particle {
    pub fn new(
        position: Vec2,
        base_radius: f32,
        velocity: Vec2,
        color: Rgba,
        phase: f32,
        orbit_radius: f32,
    ) -> Self {
        Self {
            position,
            velocity,
            radius: base_radius,
            base_radius,
            color,
            phase,
            orbit_radius,
        }
    }

    /// Spawn somewhere inside `bounds` with randomized size, drift and color.
    pub fn random<R: Rng>(bounds: Vec2, palette: &[Rgba], rng: &mut R) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let base_radius = rng.gen_range(BASE_RADIUS_RANGE);
        let velocity = Vec2::new(rng.gen_range(SPEED_RANGE), rng.gen_range(SPEED_RANGE));
        let color = *palette.choose(rng).unwrap_or(&PASTEL_PALETTE[0]);
        let phase = rng.gen_range(0.0..TAU);
        let orbit_radius = rng.gen_range(ORBIT_RADIUS_RANGE);
        Self::new(position, base_radius, velocity, color, phase, orbit_radius)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    #[inline]
    pub fn color(&self) -> Rgba {
        self.color
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    #[inline]
    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }

    /// Advance one frame: orbit, drift, pointer repulsion, wall bounce.
    pub fn update(&mut self, pointer: Option<Vec2>, bounds: Vec2, params: &FieldParams) {
        self.phase += params.phase_step;
        let (sin, cos) = self.phase.sin_cos();
        self.position += Vec2::new(sin, cos) * self.orbit_radius + self.velocity;

        self.radius = self.base_radius;
        if let Some(target) = pointer {
            let delta = target - self.position;
            let distance = delta.length();
            if distance < params.repulsion_radius {
                let falloff = 1.0 - distance / params.repulsion_radius;
                // atan2(0, 0) == 0: a particle exactly under the pointer is pushed along -x.
                let away = Vec2::from_angle(delta.y.atan2(delta.x));
                self.position -= away * falloff * REPULSION_MAX_PUSH;
                self.radius = self.base_radius * (1.0 + falloff);
            }
        }

        self.constrain(bounds);
    }

    /// Clamp into `[0, bounds]` per axis, reflecting and halving the
    /// velocity component of any axis that was clamped.
    pub fn constrain(&mut self, bounds: Vec2) {
        if self.position.x < 0.0 {
            self.position.x = 0.0;
            self.velocity.x *= BOUNCE_DAMPING;
        } else if self.position.x > bounds.x {
            self.position.x = bounds.x;
            self.velocity.x *= BOUNCE_DAMPING;
        }

        if self.position.y < 0.0 {
            self.position.y = 0.0;
            self.velocity.y *= BOUNCE_DAMPING;
        } else if self.position.y > bounds.y {
            self.position.y = bounds.y;
            self.velocity.y *= BOUNCE_DAMPING;
        }
    }

    /// Core disc, then the halo on top of it.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.position, self.radius, self.color);
        surface.fill_circle_radial(
            self.position,
            self.radius,
            self.radius * HALO_SCALE,
            self.color,
            TRANSPARENT_WHITE,
        );
    }
}
