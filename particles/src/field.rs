//! Testable simulation state for one particle field run.
//!
//! `FieldCore` holds everything the frame loop mutates except the canvas
//! itself: the particle batch, the pointer, and the bounds. It never touches
//! the DOM, so the whole simulation runs under plain `cargo test`.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::Rng;

use crate::config::{FieldConfig, Physics};
use crate::particle::{self, Bounds, Particle, Point, Pointer};

/// A line between two particles, produced by [`FieldCore::connections`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Point,
    pub to: Point,
    pub opacity: f64,
}

/// Line opacity for two particles `dist` apart.
///
/// Falls off linearly from `max_opacity` at zero distance to nothing at
/// `max_distance`. Pairs at or beyond `max_distance` are not connected.
#[must_use]
pub fn link_opacity(dist: f64, max_distance: f64, max_opacity: f64) -> Option<f64> {
    if dist < max_distance {
        Some((1.0 - dist / max_distance) * max_opacity)
    } else {
        None
    }
}

/// Particle batch plus the pointer and bounds it is simulated against.
#[derive(Debug, Clone)]
pub struct FieldCore {
    particles: Vec<Particle>,
    pointer: Pointer,
    bounds: Bounds,
    physics: Physics,
    connection_distance: f64,
    max_line_opacity: f64,
}

impl FieldCore {
    /// Spawn `config.particle_count` particles inside `width` x `height`.
    pub fn new<R: Rng + ?Sized>(
        config: &FieldConfig,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Self {
        let bounds = Bounds { width, height };
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(rng, bounds))
            .collect();
        Self::with_particles(config, width, height, particles)
    }

    /// Build a field from an explicit batch. Used by tests and replays.
    #[must_use]
    pub fn with_particles(
        config: &FieldConfig,
        width: f64,
        height: f64,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            particles,
            pointer: Pointer {
                position: None,
                radius: config.mouse_radius,
            },
            bounds: Bounds { width, height },
            physics: config.physics(),
            connection_distance: config.connection_distance,
            max_line_opacity: config.max_line_opacity,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    // --- Pointer ---

    /// Record the pointer position in canvas coordinates.
    pub fn pointer_moved(&mut self, at: Point) {
        self.pointer.position = Some(at);
    }

    /// The pointer left the canvas; repulsion stops until it returns.
    pub fn pointer_left(&mut self) {
        self.pointer.position = None;
    }

    // --- Simulation ---

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let pointer = self.pointer;
        for p in &mut self.particles {
            particle::update(p, &pointer, self.bounds, self.physics);
        }
    }

    /// Every unique pair closer than the connection distance, with its opacity.
    pub fn connections(&self) -> impl Iterator<Item = Link> + '_ {
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles[i + 1..].iter().filter_map(move |b| {
                let dist = a.position().distance(b.position());
                let opacity = link_opacity(dist, self.connection_distance, self.max_line_opacity)?;
                Some(Link {
                    from: a.position(),
                    to: b.position(),
                    opacity,
                })
            })
        })
    }
}
