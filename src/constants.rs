// Web front-end constants: DOM hooks and diagnostics.

/// Id of the full-viewport background canvas.
pub const CANVAS_ID: &str = "bgCanvas";

/// Optional canvas attribute overriding the particle count, e.g. `data-particles="60"`.
pub const PARTICLES_ATTR: &str = "data-particles";

/// Upper bound accepted from `data-particles`; connection lines are O(n^2).
pub const MAX_PARTICLES: usize = 400;

// Frame-rate summary cadence (debug log level)
pub const FPS_REPORT_INTERVAL_SEC: f32 = 5.0;
