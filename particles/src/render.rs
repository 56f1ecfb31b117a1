//! Rendering: draws one frame of a particle field to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads [`FieldCore`] state and produces pixels; it never mutates the
//! simulation.
//!
//! Fallible `Canvas2D` calls propagate via `Result<(), JsValue>`. The frame
//! loop in [`crate::engine`] logs the error and keeps running.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{BACKGROUND_COLOR, LINE_RGB, LINE_WIDTH, PARTICLE_COLOR};
use crate::field::{FieldCore, Link};
use crate::particle::Particle;

/// CSS color for a connection line of the given opacity.
#[must_use]
pub fn line_color(opacity: f64) -> String {
    let (r, g, b) = LINE_RGB;
    format!("rgba({r}, {g}, {b}, {opacity})")
}

/// Draw the full frame: background, particles, then connections.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, field: &FieldCore) -> Result<(), JsValue> {
    let bounds = field.bounds();

    ctx.set_fill_style_str(BACKGROUND_COLOR);
    ctx.fill_rect(0.0, 0.0, bounds.width, bounds.height);

    ctx.set_fill_style_str(PARTICLE_COLOR);
    for p in field.particles() {
        draw_particle(ctx, p)?;
    }

    ctx.set_line_width(LINE_WIDTH);
    for link in field.connections() {
        draw_link(ctx, &link);
    }

    Ok(())
}

fn draw_particle(ctx: &CanvasRenderingContext2d, p: &Particle) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(p.x, p.y, p.size, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

fn draw_link(ctx: &CanvasRenderingContext2d, link: &Link) {
    ctx.set_stroke_style_str(&line_color(link.opacity));
    ctx.begin_path();
    ctx.move_to(link.from.x, link.from.y);
    ctx.line_to(link.to.x, link.to.y);
    ctx.stroke();
}
