//! portfolio-particles: decorative particle background for a portfolio site.
//!
//! This crate provides a WASM-based canvas component that animates a field of
//! softly bouncing dots behind the page content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{CountProfile, FieldConfig, ParticleCanvas, ParticleStyle};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-particles: logging initialized");
}

/// Parse a JSON field configuration, logging and returning `None` on error.
pub fn parse_field_config(json_text: &str) -> Option<FieldConfig> {
	match serde_json::from_str::<FieldConfig>(json_text) {
		Ok(config) => {
			info!(
				"portfolio-particles: loaded config ({:?} profile)",
				config.profile
			);
			Some(config)
		}
		Err(e) => {
			warn!("portfolio-particles: failed to parse particle config: {}", e);
			None
		}
	}
}

/// Load field configuration from a script element with id="particle-config".
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	parse_field_config(&json_text)
}

/// Main application component.
/// Loads the field configuration from the DOM and mounts the background canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<ParticleCanvas config=config />
	}
}
