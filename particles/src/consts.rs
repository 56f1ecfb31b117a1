//! Shared numeric constants for the particles crate.

// ── Batch ───────────────────────────────────────────────────────

/// Number of particles spawned per run.
pub const PARTICLE_COUNT: usize = 100;

/// Spawn velocity spread; each axis is drawn from `[-0.75, 0.75)`.
pub const SPAWN_SPEED: f64 = 1.5;

/// Smallest particle radius in canvas pixels.
pub const SIZE_MIN: f64 = 2.0;

/// Radius spread added on top of [`SIZE_MIN`].
pub const SIZE_RANGE: f64 = 3.0;

// ── Physics ─────────────────────────────────────────────────────

/// Radius of the pointer's repulsion field in canvas pixels.
pub const MOUSE_RADIUS: f64 = 150.0;

/// Scale applied to the repulsion force before it reaches velocity.
pub const REPEL_STRENGTH: f64 = 0.3;

/// Spring constant pulling a particle back toward its anchor.
pub const RESTORE_STRENGTH: f64 = 0.002;

/// Per-frame velocity multiplier.
pub const DAMPING: f64 = 0.98;

// ── Connections ─────────────────────────────────────────────────

/// Particles closer than this are joined by a line.
pub const CONNECTION_DISTANCE: f64 = 120.0;

/// Line opacity for two coincident particles.
pub const MAX_LINE_OPACITY: f64 = 0.5;

// ── Canvas ──────────────────────────────────────────────────────

/// DOM id of the canvas element.
pub const CANVAS_ID: &str = "particles-canvas";

/// Canvas width used when the element reports no layout width.
pub const FALLBACK_WIDTH: f64 = 800.0;

/// Fixed canvas height.
pub const CANVAS_HEIGHT: f64 = 400.0;

/// Background fill.
pub const BACKGROUND_COLOR: &str = "#0a0e27";

/// Particle fill.
pub const PARTICLE_COLOR: &str = "#63b3ed";

/// RGB channels shared by connection lines; alpha varies per pair.
pub const LINE_RGB: (u8, u8, u8) = (99, 179, 237);

/// Stroke width of connection lines.
pub const LINE_WIDTH: f64 = 1.0;
