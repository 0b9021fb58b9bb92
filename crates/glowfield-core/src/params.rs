use thiserror::Error;

use crate::constants::{CONNECTION_RADIUS, PARTICLE_COUNT, PHASE_STEP, REPULSION_RADIUS};

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("particle count must be at least 1")]
    NoParticles,
    #[error("{name} must be finite")]
    NonFinite { name: &'static str },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}

/// Tunables for a [`crate::ParticleField`]. `Default` mirrors `constants.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub particle_count: usize,
    pub repulsion_radius: f32,
    pub connection_radius: f32,
    pub phase_step: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            repulsion_radius: REPULSION_RADIUS,
            connection_radius: CONNECTION_RADIUS,
            phase_step: PHASE_STEP,
        }
    }
}

impl FieldParams {
    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.particle_count == 0 {
            return Err(ParamsError::NoParticles);
        }
        for (name, value) in [
            ("repulsion_radius", self.repulsion_radius),
            ("connection_radius", self.connection_radius),
            ("phase_step", self.phase_step),
        ] {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite { name });
            }
            if value <= 0.0 {
                return Err(ParamsError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}
