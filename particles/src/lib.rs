//! Decorative particle background for the verso site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It animates
//! a fixed batch of particles on a `<canvas>`: each particle drifts around its
//! spawn point, bounces off the canvas edges and is pushed away by the
//! pointer, and nearby particles are joined by fading lines.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser host [`engine::ParticleField`]: canvas lookup, listeners, frame loop |
//! | [`field`] | Testable simulation state [`field::FieldCore`] and pair connections |
//! | [`particle`] | Particle record and the per-particle physics step |
//! | [`render`] | Draws a frame to a `CanvasRenderingContext2d` |
//! | [`config`] | [`config::FieldConfig`] tunables |
//! | [`consts`] | Shared numeric constants (counts, radii, colors) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod field;
pub mod particle;
pub mod render;

pub use config::FieldConfig;
pub use engine::ParticleField;
