//! Canvas rendering for the particle field.
//!
//! Drawing goes through [`DrawingSurface`], the handful of 2D-context
//! primitives the field needs, so frames can be rendered into something other
//! than a browser canvas.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::{Particle, ParticleField};
use super::theme::Color;

/// Path-based 2D drawing primitives.
pub trait DrawingSurface {
	/// Erases a rectangle to transparent.
	fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64);
	/// Starts a new path.
	fn begin_path(&self);
	/// Adds a circular arc (angles in radians) to the current path.
	fn arc(&self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
	/// Fills the current path with the current fill style.
	fn fill(&self);
	/// Sets the fill style from a CSS color string.
	fn set_fill_style(&self, css: &str);
}

impl DrawingSurface for CanvasRenderingContext2d {
	fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
	}

	fn begin_path(&self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn arc(&self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
		let _ = CanvasRenderingContext2d::arc(self, x, y, radius, start_angle, end_angle);
	}

	fn fill(&self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn set_fill_style(&self, css: &str) {
		self.set_fill_style_str(css);
	}
}

/// Clears the surface and draws every particle.
pub fn render<S: DrawingSurface + ?Sized>(field: &ParticleField, surface: &S) {
	surface.clear_rect(0.0, 0.0, field.width(), field.height());

	let color = field.style().color;
	for p in &field.particles {
		draw_particle(surface, p, color);
	}
}

/// Fills one particle as a circle centered on its pixel-rounded position.
pub fn draw_particle<S: DrawingSurface + ?Sized>(surface: &S, p: &Particle, color: Color) {
	surface.set_fill_style(&color.with_alpha(p.alpha).to_css());
	surface.begin_path();
	surface.arc(p.x.round(), p.y.round(), p.radius, 0.0, PI * 2.0);
	surface.fill();
}
