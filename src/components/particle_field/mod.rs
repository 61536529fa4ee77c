//! Decorative particle background.
//!
//! Renders a field of slowly drifting dots on a full-viewport HTML canvas:
//! - Particle count derived from the surface size (fixed or area-based)
//! - Velocity reflection at the surface edges
//! - Full regeneration on window resize
//! - Frame loop paused while the document is hidden
//!
//! # Example
//!
//! ```ignore
//! use portfolio_particles::{CountProfile, FieldConfig, ParticleCanvas};
//!
//! let config = FieldConfig {
//!     profile: CountProfile::density(15000.0),
//!     ..Default::default()
//! };
//!
//! view! { <ParticleCanvas config=config /> }
//! ```

mod animation;
mod component;
pub mod field;
pub mod render;
pub mod theme;
mod types;

pub use animation::AnimationLoop;
pub use component::ParticleCanvas;
pub use field::{Particle, ParticleField};
pub use theme::{Color, ParticleStyle};
pub use types::{CountProfile, FieldConfig, MAX_PARTICLES};
