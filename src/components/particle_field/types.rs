//! Configuration input for the particle field component.
//!
//! The page may embed a JSON document describing the field; every key is
//! optional and falls back to the values the portfolio ships with.

use serde::Deserialize;

use super::theme::ParticleStyle;

/// How many particles a surface of a given size receives.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CountProfile {
	/// A constant count, reduced on narrow (mobile) surfaces.
	Fixed {
		/// Count on wide surfaces.
		#[serde(default = "default_count")]
		count: usize,
		/// Count on surfaces narrower than `mobile_breakpoint`.
		#[serde(default = "default_mobile_count")]
		mobile_count: usize,
		/// Surfaces narrower than this many pixels use `mobile_count`.
		#[serde(default = "default_breakpoint")]
		mobile_breakpoint: f64,
	},
	/// One particle per `area_per_particle` square pixels.
	Density {
		/// Square pixels per particle.
		#[serde(default = "default_area_per_particle")]
		area_per_particle: f64,
	},
}

fn default_count() -> usize {
	50
}

fn default_mobile_count() -> usize {
	30
}

fn default_breakpoint() -> f64 {
	768.0
}

fn default_area_per_particle() -> f64 {
	15000.0
}

/// Upper bound on particles per surface, whatever the profile asks for.
pub const MAX_PARTICLES: usize = 2000;

impl CountProfile {
	/// Area-based profile with the given pixels-per-particle constant.
	pub fn density(area_per_particle: f64) -> Self {
		Self::Density { area_per_particle }
	}

	/// Number of particles for a `width` x `height` surface.
	///
	/// A zero-area surface always gets no particles, and no surface gets more
	/// than [`MAX_PARTICLES`].
	pub fn particle_count(&self, width: f64, height: f64) -> usize {
		if !(width > 0.0 && height > 0.0) {
			return 0;
		}
		let count = match *self {
			CountProfile::Fixed {
				count,
				mobile_count,
				mobile_breakpoint,
			} => {
				if width < mobile_breakpoint {
					mobile_count
				} else {
					count
				}
			}
			CountProfile::Density { area_per_particle } => {
				if area_per_particle > 0.0 && area_per_particle.is_finite() {
					// Saturates: an infinite quotient lands on the cap.
					(width * height / area_per_particle)
						.floor()
						.min(MAX_PARTICLES as f64) as usize
				} else {
					0
				}
			}
		};
		count.min(MAX_PARTICLES)
	}
}

impl Default for CountProfile {
	fn default() -> Self {
		Self::Fixed {
			count: default_count(),
			mobile_count: default_mobile_count(),
			mobile_breakpoint: default_breakpoint(),
		}
	}
}

/// Complete component configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Particle count rule
	pub profile: CountProfile,
	/// Particle appearance and motion ranges
	pub style: ParticleStyle,
	/// Fixed PRNG seed. When absent a seed is drawn at mount time.
	pub seed: Option<u64>,
	/// Cancel the frame loop while the document is hidden.
	pub pause_when_hidden: bool,
	/// Quiet period before a window resize regenerates the field (0 = immediate).
	pub resize_debounce_ms: u32,
	/// Viewports narrower than this never start the animation.
	pub min_viewport_width: Option<f64>,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			profile: CountProfile::default(),
			style: ParticleStyle::default(),
			seed: None,
			pause_when_hidden: true,
			resize_debounce_ms: 250,
			min_viewport_width: Some(768.0),
		}
	}
}

impl FieldConfig {
	/// Whether the animation should run on a viewport `viewport_width` pixels wide.
	pub fn enabled_for_viewport(&self, viewport_width: f64) -> bool {
		self.min_viewport_width.is_none_or(|min| viewport_width >= min)
	}

	/// Resize debounce as a `setTimeout` delay, saturating at `i32::MAX`.
	pub fn resize_debounce_delay(&self) -> i32 {
		i32::try_from(self.resize_debounce_ms).unwrap_or(i32::MAX)
	}
}
