//! Visual styling for the particle field.
//!
//! Provides the RGBA color type and the per-particle randomization ranges.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, new alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits functional notation so per-particle alpha survives.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Particle appearance and motion ranges.
///
/// Each particle samples its radius, speed and opacity once at creation; the
/// values never change afterwards.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Base fill color; alpha is replaced per particle
	pub color: Color,
	/// Minimum particle radius
	pub size_min: f64,
	/// Maximum particle radius
	pub size_max: f64,
	/// Maximum per-axis speed in pixels per frame
	pub speed: f64,
	/// Minimum particle opacity
	pub opacity_min: f64,
	/// Maximum particle opacity
	pub opacity_max: f64,
}

impl ParticleStyle {
	/// Soft teal dots used as the portfolio backdrop (default)
	pub fn teal() -> Self {
		Self {
			color: Color::rgb(45, 212, 191),
			size_min: 0.5,
			size_max: 2.5,
			speed: 0.25,
			opacity_min: 0.1,
			opacity_max: 0.6,
		}
	}

	/// Faster, denser-looking variant for the area-based count profile
	pub fn drift() -> Self {
		Self {
			color: Color::rgb(148, 163, 184),
			size_min: 1.0,
			size_max: 3.0,
			speed: 0.5,
			opacity_min: 0.2,
			opacity_max: 0.7,
		}
	}

	/// Repairs user-supplied ranges: swaps inverted bounds, clamps opacity to
	/// `[0, 1]` and sizes/speed to non-negative values.
	pub fn normalized(&self) -> Self {
		let sanitize = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
		let (size_min, size_max) = ordered(sanitize(self.size_min), sanitize(self.size_max));
		let (opacity_min, opacity_max) = ordered(
			sanitize(self.opacity_min).min(1.0),
			sanitize(self.opacity_max).min(1.0),
		);
		Self {
			color: self.color,
			size_min,
			size_max,
			speed: sanitize(self.speed),
			opacity_min,
			opacity_max,
		}
	}
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
	if a <= b { (a, b) } else { (b, a) }
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self::teal()
	}
}
