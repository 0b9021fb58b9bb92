//! The particle field: a fixed population, the pointer slot and the
//! drawable bounds, advanced and drawn once per frame.

use glam::Vec2;
use rand::Rng;

use crate::color::{Rgba, PASTEL_PALETTE, TRAIL_WHITE};
use crate::constants::{CONNECTION_LINE_WIDTH, CONNECTION_MAX_ALPHA};
use crate::params::{FieldParams, ParamsError};
use crate::particle::Particle;
use crate::surface::Surface;

/// Latest pointer signal. Overwritten by every move, cleared on leave.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Pointer {
    #[default]
    Absent,
    Present(Vec2),
}

impl Pointer {
    #[inline]
    pub fn position(self) -> Option<Vec2> {
        match self {
            Pointer::Absent => None,
            Pointer::Present(p) => Some(p),
        }
    }
}

/// A line between two nearby particles, alpha already faded by distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub from: Vec2,
    pub to: Vec2,
    pub from_color: Rgba,
    pub to_color: Rgba,
}

impl Connection {
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.from_color.a
    }
}

pub struct ParticleField {
    params: FieldParams,
    particles: Vec<Particle>,
    bounds: Vec2,
    pointer: Pointer,
}

impl ParticleField {
    pub fn new<R: Rng>(
        params: FieldParams,
        width: f32,
        height: f32,
        rng: &mut R,
    ) -> Result<Self, ParamsError> {
        params.validate()?;
        let bounds = Vec2::new(width, height);
        let particles = (0..params.particle_count)
            .map(|_| Particle::random(bounds, &PASTEL_PALETTE, rng))
            .collect::<Vec<_>>();
        log::debug!(
            "[field] spawned {} particles over {:.0}x{:.0}",
            particles.len(),
            width,
            height
        );
        Ok(Self {
            params,
            particles,
            bounds,
            pointer: Pointer::Absent,
        })
    }

    /// Build a field around an existing population, e.g. a hand-placed one.
    pub fn from_particles(
        params: FieldParams,
        particles: Vec<Particle>,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            params,
            particles,
            bounds: Vec2::new(width, height),
            pointer: Pointer::Absent,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Pointer::Present(Vec2::new(x, y));
    }

    pub fn pointer_left(&mut self) {
        self.pointer = Pointer::Absent;
    }

    /// Positions are left alone; the next update clamps them to the new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
    }

    /// Advance every particle in field order, handing each to `visit` once moved.
    fn advance(&mut self, mut visit: impl FnMut(&Particle)) {
        let pointer = self.pointer.position();
        for p in &mut self.particles {
            p.update(pointer, self.bounds, &self.params);
            visit(p);
        }
    }

    pub fn update(&mut self) {
        self.advance(|_| {});
    }

    /// One full frame: trail overlay, update + draw each particle, then lines.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.fill_rect(Vec2::ZERO, self.bounds, TRAIL_WHITE);
        self.advance(|p| p.draw(surface));
        self.draw_connections(surface);
    }

    /// Every pair `i < j` closer than the connection radius.
    pub fn connections(&self) -> Vec<Connection> {
        let radius = self.params.connection_radius;
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if distance < radius {
                    let alpha = CONNECTION_MAX_ALPHA * (1.0 - distance / radius);
                    out.push(Connection {
                        from: a.position,
                        to: b.position,
                        from_color: a.color().with_alpha(alpha),
                        to_color: b.color().with_alpha(alpha),
                    });
                }
            }
        }
        out
    }

    pub fn draw_connections<S: Surface + ?Sized>(&self, surface: &mut S) {
        for c in self.connections() {
            surface.stroke_line_gradient(
                c.from,
                c.to,
                c.from_color,
                c.to_color,
                CONNECTION_LINE_WIDTH,
            );
        }
    }
}
