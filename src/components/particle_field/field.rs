//! Bouncing background particles.
//!
//! A [`ParticleField`] owns every particle for one drawing surface. Resizing
//! throws the whole collection away and seeds a new one; stepping moves each
//! particle by its velocity, reflecting it off the surface edges.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::theme::ParticleStyle;
use super::types::CountProfile;

/// A single moving point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	/// Pixels per frame along x
	pub vx: f64,
	/// Pixels per frame along y
	pub vy: f64,
	pub radius: f64,
	/// Fixed at creation.
	pub alpha: f64,
}

/// Advances one particle by one frame.
///
/// The edge test uses the position *before* moving, so a particle sitting on
/// or past an edge turns around before it travels any further out.
pub fn step_particle(p: &mut Particle, width: f64, height: f64) {
	if p.x < 0.0 || p.x > width {
		p.vx = -p.vx;
	}
	if p.y < 0.0 || p.y > height {
		p.vy = -p.vy;
	}
	p.x += p.vx;
	p.y += p.vy;
}

/// The particle collection plus the surface size it was generated for.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	profile: CountProfile,
	style: ParticleStyle,
	rng: SmallRng,
}

impl ParticleField {
	/// Creates an empty field; call [`ParticleField::resize`] to populate it.
	pub fn new(profile: CountProfile, style: &ParticleStyle, seed: u64) -> Self {
		Self {
			particles: Vec::new(),
			width: 0.0,
			height: 0.0,
			profile,
			style: style.normalized(),
			rng: SmallRng::seed_from_u64(seed),
		}
	}

	/// Surface width the particles were generated for.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Surface height the particles were generated for.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Normalized style used for spawning and drawing.
	pub fn style(&self) -> &ParticleStyle {
		&self.style
	}

	/// Largest per-axis distance a particle covers in one frame.
	pub fn max_speed(&self) -> f64 {
		self.style.speed
	}

	/// Adopts new surface dimensions and regenerates every particle.
	pub fn resize(&mut self, width: f64, height: f64) {
		let clamp = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
		self.width = clamp(width);
		self.height = clamp(height);

		let count = self.profile.particle_count(self.width, self.height);
		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			let p = self.spawn();
			self.particles.push(p);
		}
	}

	fn spawn(&mut self) -> Particle {
		let style = &self.style;
		let rng = &mut self.rng;
		// Uniform in [lo, hi); degenerate ranges collapse to lo.
		let mut sample = |lo: f64, hi: f64| lo + rng.r#gen::<f64>() * (hi - lo);

		let x = sample(0.0, self.width);
		let y = sample(0.0, self.height);
		let radius = sample(style.size_min, style.size_max);
		let vx = sample(-style.speed, style.speed);
		let vy = sample(-style.speed, style.speed);
		let alpha = sample(style.opacity_min, style.opacity_max);

		Particle {
			x,
			y,
			vx,
			vy,
			radius,
			alpha,
		}
	}

	/// Advances every particle by one frame.
	pub fn step(&mut self) {
		let (w, h) = (self.width, self.height);
		for p in &mut self.particles {
			step_particle(p, w, h);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::types::MAX_PARTICLES;

	fn density_field(seed: u64) -> ParticleField {
		ParticleField::new(CountProfile::density(15000.0), &ParticleStyle::drift(), seed)
	}

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			radius: 1.0,
			alpha: 0.5,
		}
	}

	#[test]
	fn new_field_is_empty() {
		let field = density_field(1);
		assert!(field.particles.is_empty());
		assert_eq!((field.width(), field.height()), (0.0, 0.0));
	}

	#[test]
	fn resize_to_zero_area_empties_field() {
		let mut field = density_field(1);
		field.resize(800.0, 600.0);
		assert!(!field.particles.is_empty());
		field.resize(0.0, 0.0);
		assert!(field.particles.is_empty());
	}

	#[test]
	fn resize_uses_density_count() {
		let mut field = density_field(3);
		field.resize(800.0, 600.0);
		assert_eq!(field.particles.len(), 32);
		field.resize(1500.0, 1000.0);
		assert_eq!(field.particles.len(), 100);
	}

	#[test]
	fn resize_uses_fixed_count() {
		let mut field = ParticleField::new(CountProfile::default(), &ParticleStyle::default(), 3);
		field.resize(1280.0, 720.0);
		assert_eq!(field.particles.len(), 50);
		field.resize(400.0, 800.0);
		assert_eq!(field.particles.len(), 30);
	}

	#[test]
	fn resize_regenerates_every_particle() {
		let mut field = density_field(9);
		field.resize(800.0, 600.0);
		let before = field.particles.clone();
		field.resize(800.0, 600.0);
		assert_eq!(field.particles.len(), before.len());
		assert!(
			field
				.particles
				.iter()
				.zip(&before)
				.all(|(a, b)| a != b)
		);
	}

	#[test]
	fn huge_surface_stays_capped() {
		let mut field = density_field(1);
		field.resize(1e200, 1e200);
		assert_eq!(field.particles.len(), MAX_PARTICLES);

		let mut dense =
			ParticleField::new(CountProfile::density(1e-12), &ParticleStyle::default(), 1);
		dense.resize(1920.0, 1080.0);
		assert_eq!(dense.particles.len(), MAX_PARTICLES);
		dense.step();
	}

	#[test]
	fn negative_and_nan_dimensions_clamp_to_zero() {
		let mut field = density_field(1);
		field.resize(-10.0, f64::NAN);
		assert_eq!((field.width(), field.height()), (0.0, 0.0));
		assert!(field.particles.is_empty());
	}

	#[test]
	fn spawned_particles_respect_style_ranges() {
		let style = ParticleStyle::drift();
		let mut field = density_field(11);
		field.resize(1920.0, 1080.0);
		for p in &field.particles {
			assert!((0.0..=1920.0).contains(&p.x));
			assert!((0.0..=1080.0).contains(&p.y));
			assert!(p.vx.abs() <= style.speed && p.vy.abs() <= style.speed);
			assert!((style.size_min..=style.size_max).contains(&p.radius));
			assert!((style.opacity_min..=style.opacity_max).contains(&p.alpha));
		}
	}

	#[test]
	fn bounce_flips_velocity_before_moving() {
		let mut p = particle(-1.0, 10.0, -0.3, 0.2);
		step_particle(&mut p, 100.0, 100.0);
		assert_eq!(p.vx, 0.3);
		assert_eq!(p.vy, 0.2);
		assert!((p.x - -0.7).abs() < 1e-12);
		assert!((p.y - 10.2).abs() < 1e-12);
	}

	#[test]
	fn bounce_on_far_edges() {
		let mut p = particle(100.5, 100.1, 0.4, 0.4);
		step_particle(&mut p, 100.0, 100.0);
		assert_eq!((p.vx, p.vy), (-0.4, -0.4));
	}

	#[test]
	fn particle_on_edge_keeps_velocity() {
		let mut p = particle(0.0, 100.0, 0.3, -0.3);
		step_particle(&mut p, 100.0, 100.0);
		assert_eq!((p.vx, p.vy), (0.3, -0.3));
	}

	#[test]
	fn velocity_flips_once_per_crossing() {
		let mut p = particle(0.1, 50.0, -0.25, 0.0);
		let mut flips = 0;
		for _ in 0..10 {
			let before = p.vx;
			step_particle(&mut p, 100.0, 100.0);
			if p.vx != before {
				flips += 1;
			}
		}
		assert_eq!(flips, 1);
		assert!(p.vx > 0.0);
	}

	#[test]
	fn drift_stays_bounded() {
		let mut field = density_field(42);
		field.resize(800.0, 600.0);
		assert_eq!(field.particles.len(), 32);

		let m = field.max_speed();
		for _ in 0..1000 {
			field.step();
			for p in &field.particles {
				assert!(p.x >= -m && p.x <= 800.0 + m, "x escaped: {}", p.x);
				assert!(p.y >= -m && p.y <= 600.0 + m, "y escaped: {}", p.y);
			}
		}
	}

	#[test]
	fn same_seed_same_trajectory() {
		let run = |seed| {
			let mut field = density_field(seed);
			field.resize(800.0, 600.0);
			let mut frames = Vec::new();
			for _ in 0..200 {
				field.step();
				frames.push(
					field
						.particles
						.iter()
						.map(|p| (p.x, p.y))
						.collect::<Vec<_>>(),
				);
			}
			frames
		};
		assert_eq!(run(5), run(5));
		assert_ne!(run(5), run(6));
	}
}
