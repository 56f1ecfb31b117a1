//! Tunables for a particle field run.
//!
//! Every field defaults to the matching value in [`crate::consts`]. Hosts that
//! embed the field in a different page layout override individual fields with
//! struct update syntax.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    CANVAS_HEIGHT, CANVAS_ID, CONNECTION_DISTANCE, DAMPING, FALLBACK_WIDTH, MAX_LINE_OPACITY,
    MOUSE_RADIUS, PARTICLE_COUNT, REPEL_STRENGTH, RESTORE_STRENGTH,
};

/// Configuration for [`crate::engine::ParticleField`] and [`crate::field::FieldCore`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// DOM id looked up by `try_initialize`.
    pub canvas_id: String,
    /// Particles spawned per run.
    pub particle_count: usize,
    /// Maximum distance at which two particles are connected.
    pub connection_distance: f64,
    /// Opacity of a connection between coincident particles.
    pub max_line_opacity: f64,
    /// Pointer repulsion radius.
    pub mouse_radius: f64,
    /// Repulsion scale.
    pub repel_strength: f64,
    /// Anchor spring constant.
    pub restore_strength: f64,
    /// Per-frame velocity multiplier.
    pub damping: f64,
    /// Width used when the canvas has no layout width yet.
    pub fallback_width: f64,
    /// Fixed canvas height.
    pub height: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            canvas_id: CANVAS_ID.to_owned(),
            particle_count: PARTICLE_COUNT,
            connection_distance: CONNECTION_DISTANCE,
            max_line_opacity: MAX_LINE_OPACITY,
            mouse_radius: MOUSE_RADIUS,
            repel_strength: REPEL_STRENGTH,
            restore_strength: RESTORE_STRENGTH,
            damping: DAMPING,
            fallback_width: FALLBACK_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

impl FieldConfig {
    /// Resolve the canvas width from the element's layout width.
    ///
    /// A zero width means the element has not been laid out yet.
    #[must_use]
    pub fn resolve_width(&self, offset_width: i32) -> f64 {
        if offset_width > 0 {
            f64::from(offset_width)
        } else {
            self.fallback_width
        }
    }

    /// Physics parameters for [`crate::particle::update`].
    #[must_use]
    pub fn physics(&self) -> Physics {
        Physics {
            repel_strength: self.repel_strength,
            restore_strength: self.restore_strength,
            damping: self.damping,
        }
    }
}

/// The subset of [`FieldConfig`] consumed by the per-particle update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub repel_strength: f64,
    pub restore_strength: f64,
    pub damping: f64,
}

impl Default for Physics {
    fn default() -> Self {
        FieldConfig::default().physics()
    }
}
