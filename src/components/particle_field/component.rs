//! Leptos component wrapping the particle canvas.
//!
//! The component creates a full-viewport canvas behind the page content,
//! regenerates the field whenever the window is resized, and pauses the
//! animation loop while the document is hidden. Unmounting cancels the frame
//! loop, any pending resize timer, and both listeners.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::animation::AnimationLoop;
use super::field::ParticleField;
use super::render;
use super::types::FieldConfig;

/// Browser resources held by a running canvas, released on unmount.
struct Mounted {
	window: Window,
	animation: AnimationLoop,
	resize_cb: Closure<dyn FnMut()>,
	visibility_cb: Option<Closure<dyn FnMut()>>,
	timer: Rc<Cell<Option<i32>>>,
}

impl Mounted {
	fn teardown(self) {
		self.animation.dispose();
		if let Some(id) = self.timer.take() {
			self.window.clear_timeout_with_handle(id);
		}
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref());
		if let (Some(cb), Some(document)) = (&self.visibility_cb, self.window.document()) {
			let _ = document
				.remove_event_listener_with_callback("visibilitychange", cb.as_ref().unchecked_ref());
		}
		debug!("portfolio-particles: torn down");
	}
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Sets the canvas pixel size and reseeds the field for it.
fn resize_surface(canvas: &HtmlCanvasElement, field: &mut ParticleField, w: f64, h: f64) {
	canvas.set_width(w.max(0.0) as u32);
	canvas.set_height(h.max(0.0) as u32);
	field.resize(w, h);
	debug!(
		"portfolio-particles: resized to {}x{}, {} particles",
		w,
		h,
		field.particles.len()
	);
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Renders the decorative particle background.
///
/// The animation silently stays off when the canvas has no 2D context or the
/// viewport is narrower than `config.min_viewport_width`.
#[component]
pub fn ParticleCanvas(#[prop(optional)] config: FieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some((w, h)) = viewport_size(&window) else {
			return;
		};
		if !config.enabled_for_viewport(w) {
			debug!("portfolio-particles: viewport {}px too narrow, not starting", w);
			return;
		}
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			debug!("portfolio-particles: no 2d context, not starting");
			return;
		};

		let seed = config.seed.unwrap_or_else(random_seed);
		let field = Rc::new(RefCell::new(ParticleField::new(
			config.profile.clone(),
			&config.style,
			seed,
		)));
		resize_surface(&canvas, &mut field.borrow_mut(), w, h);
		info!(
			"portfolio-particles: started with {} particles",
			field.borrow().particles.len()
		);

		let field_frame = field.clone();
		let animation = AnimationLoop::new(move || {
			let mut f = field_frame.borrow_mut();
			f.step();
			render::render(&f, &ctx);
		});
		animation.start();

		// Regenerate on resize, optionally after a quiet period.
		let timer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let (field_resize, canvas_resize, timer_fired) =
			(field.clone(), canvas.clone(), timer.clone());
		let debounce_cb: Rc<Closure<dyn FnMut()>> = Rc::new(Closure::new(move || {
			timer_fired.set(None);
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			resize_surface(&canvas_resize, &mut field_resize.borrow_mut(), nw, nh);
		}));

		let delay = config.resize_debounce_delay();
		let timer_resize = timer.clone();
		let resize_cb: Closure<dyn FnMut()> = Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let function: &js_sys::Function = (*debounce_cb).as_ref().unchecked_ref();
			if delay <= 0 {
				let _ = function.call0(&JsValue::NULL);
				return;
			}
			if let Some(id) = timer_resize.take() {
				win.clear_timeout_with_handle(id);
			}
			if let Ok(id) = win.set_timeout_with_callback_and_timeout_and_arguments_0(function, delay)
			{
				timer_resize.set(Some(id));
			}
		});
		let _ = window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());

		let visibility_cb = config.pause_when_hidden.then(|| {
			let animation_visibility = animation.clone();
			let cb: Closure<dyn FnMut()> = Closure::new(move || {
				let hidden = web_sys::window()
					.and_then(|w| w.document())
					.is_some_and(|d| d.hidden());
				if hidden {
					debug!("portfolio-particles: document hidden, pausing");
					animation_visibility.stop();
				} else {
					debug!("portfolio-particles: document visible, resuming");
					animation_visibility.start();
				}
			});
			if let Some(document) = window.document() {
				let _ = document
					.add_event_listener_with_callback("visibilitychange", cb.as_ref().unchecked_ref());
			}
			cb
		});

		let mounted = SendWrapper::new(Mounted {
			window,
			animation,
			resize_cb,
			visibility_cb,
			timer,
		});
		on_cleanup(move || mounted.take().teardown());
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: -1;"
		/>
	}
}
