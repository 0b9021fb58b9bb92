use std::ops::Range;

// Shared tuning constants for the particle field.

// Population
pub const PARTICLE_COUNT: usize = 40;

// Motion
pub const PHASE_STEP: f32 = 0.02; // radians advanced per frame
pub const BOUNCE_DAMPING: f32 = -0.5; // velocity factor on wall contact

// Pointer interaction
pub const REPULSION_RADIUS: f32 = 150.0;
pub const REPULSION_MAX_PUSH: f32 = 2.0; // push at zero distance, in px per frame

// Connection lines
pub const CONNECTION_RADIUS: f32 = 150.0;
pub const CONNECTION_MAX_ALPHA: f32 = 0.15;
pub const CONNECTION_LINE_WIDTH: f32 = 0.5;

// Glow
pub const HALO_SCALE: f32 = 2.0; // halo radius relative to the particle radius
pub const TRAIL_ALPHA: f32 = 0.05; // per-frame white overlay

// Spawn ranges (half-open)
pub const BASE_RADIUS_RANGE: Range<f32> = 1.0..4.0;
pub const SPEED_RANGE: Range<f32> = -1.0..1.0;
pub const ORBIT_RADIUS_RANGE: Range<f32> = 0.0..2.0;
