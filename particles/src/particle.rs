//! Particle record and the per-particle physics step.
//!
//! Particles are plain data. The field owns them in a `Vec` and drives them
//! through [`update`] once per frame.

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use rand::Rng;

use crate::config::Physics;
use crate::consts::{MOUSE_RADIUS, SIZE_MIN, SIZE_RANGE, SPAWN_SPEED};

/// A point in canvas space (CSS pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Canvas bounds used for edge rebounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Pointer state shared by every particle in a frame.
///
/// `position` is `None` while the pointer is outside the canvas, which
/// disables repulsion entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub position: Option<Point>,
    pub radius: f64,
}

impl Default for Pointer {
    fn default() -> Self {
        Self {
            position: None,
            radius: MOUSE_RADIUS,
        }
    }
}

/// One simulated point-mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Spawn position the particle drifts back toward.
    pub start_x: f64,
    pub start_y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Draw radius.
    pub size: f64,
}

impl Particle {
    /// Spawn a particle at a uniformly random anchor inside `bounds`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Self {
        let start_x = rng.random::<f64>() * bounds.width;
        let start_y = rng.random::<f64>() * bounds.height;
        Self {
            x: start_x,
            y: start_y,
            start_x,
            start_y,
            vx: (rng.random::<f64>() - 0.5) * SPAWN_SPEED,
            vy: (rng.random::<f64>() - 0.5) * SPAWN_SPEED,
            size: rng.random::<f64>() * SIZE_RANGE + SIZE_MIN,
        }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Advance one particle by one frame.
///
/// Order matters: edge rebound, pointer repulsion, anchor spring, integration,
/// then damping. The rebound only flips velocity, so a particle that crossed an
/// edge this frame is still outside until the next integration step.
pub fn update(p: &mut Particle, pointer: &Pointer, bounds: Bounds, physics: Physics) {
    if p.x > bounds.width || p.x < 0.0 {
        p.vx = -p.vx;
    }
    if p.y > bounds.height || p.y < 0.0 {
        p.vy = -p.vy;
    }

    if let Some(mouse) = pointer.position {
        let dx = mouse.x - p.x;
        let dy = mouse.y - p.y;
        let dist = dx.hypot(dy);
        if dist < pointer.radius {
            let force = (pointer.radius - dist) / pointer.radius;
            let angle = dy.atan2(dx);
            p.vx -= angle.cos() * force * physics.repel_strength;
            p.vy -= angle.sin() * force * physics.repel_strength;
        }
    }

    p.vx += (p.start_x - p.x) * physics.restore_strength;
    p.vy += (p.start_y - p.y) * physics.restore_strength;

    p.x += p.vx;
    p.y += p.vy;

    p.vx *= physics.damping;
    p.vy *= physics.damping;
}
