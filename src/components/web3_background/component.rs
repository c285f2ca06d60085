use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::render;
use super::state::BackgroundState;
use super::types::SceneConfig;

fn viewport(window: &Window) -> (f64, f64) {
	let w = window
		.inner_width()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(1280.0);
	let h = window
		.inner_height()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(720.0);
	(w, h)
}

/// Everything a running scene holds on to. The callbacks capture an `Rc` to
/// this struct, so it has to be emptied explicitly to be freed.
#[derive(Default)]
struct SceneLoop {
	state: Option<BackgroundState>,
	animate: Option<Closure<dyn FnMut()>>,
	resize: Option<Closure<dyn FnMut()>>,
	frame: Option<i32>,
}

impl SceneLoop {
	fn is_running(&self) -> bool {
		self.state.is_some()
	}

	/// Empties the loop and hands back the pending frame id and resize
	/// listener, which still have to be unregistered from the window.
	fn release(&mut self) -> (Option<i32>, Option<Closure<dyn FnMut()>>) {
		self.state = None;
		drop(self.animate.take());
		(self.frame.take(), self.resize.take())
	}

	fn stop(&mut self, window: &Window) {
		let (frame, resize) = self.release();
		if let Some(id) = frame {
			let _ = window.cancel_animation_frame(id);
		}
		if let Some(cb) = resize {
			let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	}
}

/// Full-viewport animated network scene drawn behind every view.
#[component]
pub fn Web3Background(#[prop(optional)] config: Option<SceneConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene: Rc<RefCell<SceneLoop>> = Rc::default();
	let config = config.unwrap_or_default();

	let scene_init = scene.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if scene_init.borrow().is_running() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
			_ => None,
		};
		let Some(ctx) = ctx else {
			warn!("2d canvas context unavailable; background disabled");
			return;
		};

		let (w, h) = viewport(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
		scene_init.borrow_mut().state = Some(BackgroundState::new(config.clone(), w, h, &mut rng));
		info!("background scene initialized at {w}x{h}");

		let scene_resize = scene_init.clone();
		let resize: Closure<dyn FnMut()> = Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport(&win);
			canvas.set_width(nw as u32);
			canvas.set_height(nh as u32);
			if let Some(s) = scene_resize.borrow_mut().state.as_mut() {
				s.resize(nw, nh);
			}
		});
		let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
		scene_init.borrow_mut().resize = Some(resize);

		let scene_anim = scene_init.clone();
		let animate: Closure<dyn FnMut()> = Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let Ok(mut scene) = scene_anim.try_borrow_mut() else {
				return;
			};
			let Some(s) = scene.state.as_mut() else {
				return;
			};
			s.tick();
			render::render(s, &ctx);
			scene.frame = scene
				.animate
				.as_ref()
				.and_then(|cb| win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		});
		let first = window.request_animation_frame(animate.as_ref().unchecked_ref()).ok();
		let mut running = scene_init.borrow_mut();
		running.animate = Some(animate);
		running.frame = first;
	});

	let handle = StoredValue::new_local(scene);
	on_cleanup(move || {
		let Some(window) = web_sys::window() else {
			return;
		};
		if handle.try_with_value(|scene| scene.borrow_mut().stop(&window)).is_some() {
			debug!("background loop stopped");
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="web3-background"
			style="position: fixed; inset: 0; pointer-events: none; opacity: 0.5; z-index: 1;"
		/>
	}
}

/// CSS-animated symbols, rings and packets layered over the canvas.
#[component]
pub fn FloatingElements() -> impl IntoView {
	const SYMBOLS: [&str; 10] = ["⬢", "◆", "▲", "●", "■", "⬟", "⚡", "🔗", "🌐", "💎"];
	const COLORS: [&str; 5] = ["#00FFA3", "#00D4FF", "#9D4EDD", "#F72585", "#FFD700"];

	let symbols = SYMBOLS
		.iter()
		.enumerate()
		.map(|(i, symbol)| {
			let style = format!(
				"left: {}%; top: {}%; color: {}; animation-duration: {}s; animation-delay: {}s;",
				10 + i * 10,
				15 + (i % 3) * 30,
				COLORS[i % COLORS.len()],
				20 + i * 3,
				i * 2,
			);
			view! { <div class="floating-symbol" style=style>{*symbol}</div> }
		})
		.collect_view();

	let waves = (0..5)
		.map(|i| {
			let rgb = if i % 2 == 0 { "0, 255, 163" } else { "0, 212, 255" };
			let style = format!(
				"width: {size}px; height: {size}px; left: {}%; top: {}%; border-color: rgba({rgb}, 0.1); animation-duration: {}s; animation-delay: {}s;",
				15 + i * 20,
				20 + i * 15,
				25 + i * 8,
				i * 4,
				size = 300 + i * 100,
			);
			view! { <div class="energy-wave" style=style /> }
		})
		.collect_view();

	let orbs = (0..5)
		.map(|i| {
			let rgb = if i % 2 == 0 { "0, 255, 163" } else { "0, 212, 255" };
			let style = format!(
				"left: {}%; top: {}%; background: radial-gradient(circle, rgba({rgb}, 0.1) 0%, transparent 70%); animation-duration: {}s; animation-delay: {}s;",
				15 + i * 20,
				10 + i * 15,
				12 + i * 3,
				i as f64 * 1.5,
			);
			view! { <div class="glow-orb" style=style /> }
		})
		.collect_view();

	view! {
		<div class="floating-layer">
			{symbols}
			{waves}
			{orbs}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn release_empties_the_loop_and_returns_pending_frame() {
		let mut rng = SmallRng::seed_from_u64(3);
		let mut scene = SceneLoop {
			state: Some(BackgroundState::new(SceneConfig::default(), 800.0, 600.0, &mut rng)),
			frame: Some(7),
			..SceneLoop::default()
		};
		assert!(scene.is_running());

		let (frame, resize) = scene.release();
		assert_eq!(frame, Some(7));
		assert!(resize.is_none());
		assert!(!scene.is_running());
		assert!(scene.animate.is_none());

		let (frame, _) = scene.release();
		assert_eq!(frame, None);
	}
}
