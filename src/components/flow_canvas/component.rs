use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent};

use super::render;
use super::state::FlowState;
use super::types::FlowData;
use crate::config::CanvasConfig;
use crate::error::CanvasError;

const FRAME_SECONDS: f64 = 0.016;

type SharedState = Rc<RefCell<Option<FlowState>>>;
type SharedCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn container_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((800.0, 600.0))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
	canvas
		.get_context("2d")?
		.ok_or(CanvasError::NoContext)?
		.dyn_into()
		.map_err(|_| CanvasError::NoContext)
}

fn pointer_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Sizes the canvas, builds the diagram state and starts the render loop.
fn mount(
	canvas: HtmlCanvasElement,
	data: &FlowData,
	config: CanvasConfig,
	state: SharedState,
	animate: SharedCallback,
	resize_cb: SharedCallback,
) -> Result<(), CanvasError> {
	let window = web_sys::window().ok_or(CanvasError::NoWindow)?;
	let (w, h) = container_size(&canvas);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let ctx = context_2d(&canvas)?;

	*state.borrow_mut() = Some(FlowState::new(data, config, w, h));
	info!(
		"flow canvas mounted: {} nodes, {} edges, {w}x{h}",
		data.nodes.len(),
		data.edges.len()
	);

	if animate.borrow().is_some() {
		return Ok(());
	}

	let (state_resize, canvas_resize) = (state.clone(), canvas.clone());
	*resize_cb.borrow_mut() = Some(Closure::new(move || {
		let (nw, nh) = container_size(&canvas_resize);
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		if let Some(ref mut s) = *state_resize.borrow_mut() {
			s.resize(nw, nh);
		}
	}));
	if let Some(ref cb) = *resize_cb.borrow() {
		window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
	}

	let (state_anim, animate_inner) = (state.clone(), animate.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		if let Some(ref mut s) = *state_anim.borrow_mut() {
			s.tick(FRAME_SECONDS);
			if let Err(err) = render::render(s, &ctx) {
				error!("flow canvas render failed: {err:?}");
			}
		}
		if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		window.request_animation_frame(cb.as_ref().unchecked_ref())?;
	}
	Ok(())
}

/// Runs `action` against the diagram state when a control button is clicked.
fn control<E>(state: SharedState, action: fn(&mut FlowState)) -> impl FnMut(E) + 'static {
	move |_: E| {
		if let Some(ref mut s) = *state.borrow_mut() {
			action(s);
		}
	}
}

/// Interactive workflow diagram: drag nodes, draw edges from the bottom
/// handle, pan the background, zoom with the wheel.
#[component]
pub fn FlowCanvas(
	#[prop(into)] data: Signal<FlowData>,
	#[prop(optional)] config: CanvasConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: SharedCallback = Rc::new(RefCell::new(None));
	let resize_cb: SharedCallback = Rc::new(RefCell::new(None));
	let locked = RwSignal::new(false);
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let result = mount(
			canvas.into(),
			&data.get(),
			config.clone(),
			state_init.clone(),
			animate_init.clone(),
			resize_cb_init.clone(),
		);
		if let Err(err) = result {
			error!("flow canvas unavailable: {err}");
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			if let Some(Err(err)) = s.pointer_up(x, y) {
				warn!("connection rejected: {err}");
			}
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.cancel_interaction();
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let step = s.config.zoom_step;
			let factor = if ev.delta_y() > 0.0 { 1.0 / step } else { step };
			s.zoom_at(x, y, factor);
		}
	};

	let state_kd = state.clone();
	let on_keydown = move |ev: KeyboardEvent| {
		if !matches!(ev.key().as_str(), "Backspace" | "Delete") {
			return;
		}
		ev.prevent_default();
		if let Some(ref mut s) = *state_kd.borrow_mut() {
			if s.interactive {
				s.delete_selected();
			}
		}
	};

	let state_lock = state.clone();
	let on_toggle_lock = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_lock.borrow_mut() {
			locked.set(!s.toggle_interactive());
		}
	};

	view! {
		<div
			class="flow-canvas"
			style="position: relative; width: 100%; height: 100%; overflow: hidden;"
		>
			<canvas
				node_ref=canvas_ref
				tabindex="0"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				on:keydown=on_keydown
				style="position: absolute; inset: 0; display: block; outline: none; cursor: grab;"
			/>
			<div class="flow-controls">
				<button title="zoom in" on:click=control(state.clone(), FlowState::zoom_in)>
					"+"
				</button>
				<button title="zoom out" on:click=control(state.clone(), FlowState::zoom_out)>
					"−"
				</button>
				<button title="fit view" on:click=control(state.clone(), FlowState::fit_view)>
					"⛶"
				</button>
				<button title="toggle interactivity" on:click=on_toggle_lock>
					{move || if locked.get() { "🔒" } else { "🔓" }}
				</button>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::workflow::campaign_flow;

	fn shared_state() -> SharedState {
		Rc::new(RefCell::new(Some(FlowState::new(
			&campaign_flow(),
			CanvasConfig::default(),
			1000.0,
			800.0,
		))))
	}

	#[test]
	fn control_handler_outlives_the_scope_that_built_it() {
		let state = shared_state();
		let mut zoom_in = {
			let local = state.clone();
			control::<()>(local, FlowState::zoom_in)
		};
		let before = state.borrow().as_ref().unwrap().transform.k;
		zoom_in(());
		let after = state.borrow().as_ref().unwrap().transform.k;
		assert!(after > before);
	}

	#[test]
	fn fit_view_control_restores_the_initial_viewport() {
		let state = shared_state();
		let initial = state.borrow().as_ref().unwrap().transform.clone();
		control::<()>(state.clone(), FlowState::zoom_out)(());
		assert_ne!(state.borrow().as_ref().unwrap().transform, initial);
		control::<()>(state.clone(), FlowState::fit_view)(());
		assert_eq!(state.borrow().as_ref().unwrap().transform, initial);
	}
}
