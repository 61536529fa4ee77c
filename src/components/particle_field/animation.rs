//! Cancelable `requestAnimationFrame` loop.
//!
//! The loop body runs once per display refresh until [`AnimationLoop::stop`]
//! is called. Start/stop bookkeeping lives in [`FrameGate`], which knows
//! nothing about the browser.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// Tracks whether the loop is running and which frame request is outstanding.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameGate {
	running: bool,
	disposed: bool,
	pending: Option<i32>,
}

impl FrameGate {
	/// Whether frames are currently being produced.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Marks the loop running. Returns `true` if a first frame must be requested.
	///
	/// A disposed gate never starts again.
	pub fn start(&mut self) -> bool {
		if self.running || self.disposed {
			return false;
		}
		self.running = true;
		true
	}

	/// Marks the loop stopped and hands back the request to cancel, if any.
	pub fn stop(&mut self) -> Option<i32> {
		self.running = false;
		self.pending.take()
	}

	/// Stops the loop for good. Returns the request to cancel, if any.
	pub fn dispose(&mut self) -> Option<i32> {
		self.disposed = true;
		self.stop()
	}

	/// Called when a frame fires. Returns whether the body should run.
	pub fn begin_frame(&mut self) -> bool {
		self.pending = None;
		self.running
	}

	/// Records the handle of a newly requested frame.
	pub fn scheduled(&mut self, handle: i32) {
		self.pending = Some(handle);
	}
}

/// Drives a frame callback through the window's animation-frame scheduler.
///
/// Cloning yields another handle to the same loop.
#[derive(Clone)]
pub struct AnimationLoop {
	gate: Rc<RefCell<FrameGate>>,
	callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AnimationLoop {
	/// Wraps `body`, which is invoked once per frame while the loop runs.
	pub fn new(mut body: impl FnMut() + 'static) -> Self {
		let gate = Rc::new(RefCell::new(FrameGate::default()));
		let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

		let (gate_frame, callback_frame) = (gate.clone(), Rc::downgrade(&callback));
		*callback.borrow_mut() = Some(Closure::new(move || {
			if !gate_frame.borrow_mut().begin_frame() {
				return;
			}
			body();
			if let Some(cb) = callback_frame.upgrade() {
				request_frame(&gate_frame, &cb);
			}
		}));

		Self { gate, callback }
	}

	/// Whether frames are currently being produced.
	pub fn is_running(&self) -> bool {
		self.gate.borrow().is_running()
	}

	/// Starts the loop. Does nothing if it is already running.
	pub fn start(&self) {
		if self.gate.borrow_mut().start() {
			request_frame(&self.gate, &self.callback);
		}
	}

	/// Stops the loop and cancels the outstanding frame request.
	pub fn stop(&self) {
		let pending = self.gate.borrow_mut().stop();
		cancel_frame(pending);
	}

	/// Stops the loop permanently and releases the frame callback.
	///
	/// Later calls to [`AnimationLoop::start`] are ignored.
	pub fn dispose(&self) {
		let pending = self.gate.borrow_mut().dispose();
		cancel_frame(pending);
		self.callback.borrow_mut().take();
	}
}

fn cancel_frame(pending: Option<i32>) {
	if let (Some(handle), Some(window)) = (pending, web_sys::window()) {
		let _ = window.cancel_animation_frame(handle);
	}
}

fn request_frame(gate: &RefCell<FrameGate>, callback: &RefCell<Option<Closure<dyn FnMut()>>>) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(ref cb) = *callback.borrow() {
		let function: &js_sys::Function = cb.as_ref().unchecked_ref();
		if let Ok(handle) = window.request_animation_frame(function) {
			gate.borrow_mut().scheduled(handle);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn start_requests_only_once() {
		let mut gate = FrameGate::default();
		assert!(gate.start());
		assert!(!gate.start());
		assert!(gate.is_running());
	}

	#[test]
	fn stop_returns_pending_handle() {
		let mut gate = FrameGate::default();
		gate.start();
		gate.scheduled(7);
		assert_eq!(gate.stop(), Some(7));
		assert!(!gate.is_running());
		assert_eq!(gate.stop(), None);
	}

	#[test]
	fn frames_after_stop_do_nothing() {
		let mut gate = FrameGate::default();
		gate.start();
		gate.scheduled(1);
		assert!(gate.begin_frame());
		gate.scheduled(2);
		gate.stop();
		assert!(!gate.begin_frame());
	}

	#[test]
	fn restart_after_stop() {
		let mut gate = FrameGate::default();
		gate.start();
		gate.stop();
		assert!(gate.start());
		assert!(gate.begin_frame());
	}

	#[test]
	fn fired_frame_clears_pending_handle() {
		let mut gate = FrameGate::default();
		gate.start();
		gate.scheduled(3);
		assert!(gate.begin_frame());
		assert_eq!(gate.stop(), None);
	}

	#[test]
	fn disposed_gate_never_restarts() {
		let mut gate = FrameGate::default();
		gate.start();
		gate.scheduled(4);
		assert_eq!(gate.dispose(), Some(4));
		assert!(!gate.start());
		assert!(!gate.is_running());
		assert!(!gate.begin_frame());
	}

	#[test]
	fn dispose_before_start_blocks_start() {
		let mut gate = FrameGate::default();
		assert_eq!(gate.dispose(), None);
		assert!(!gate.start());
	}
}
