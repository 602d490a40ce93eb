//! Leptos component wrapping the partner-network canvas.
//!
//! The component creates a canvas element and wires up mouse/wheel handlers
//! for node selection, node dragging, panning and zooming. An animation loop
//! runs via `requestAnimationFrame`, painting the shared [`NetworkState`]
//! each frame. The loop stops once the state signal has been disposed.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::{CLICK_SLOP, CanvasView, NetworkState};
use super::theme::Theme;
use super::types::Position;

/// Canvas-local interaction state plus visual configuration.
struct GraphContext {
	view: CanvasView,
	scale: ScaleConfig,
	theme: Theme,
}

impl GraphContext {
	fn hit_radius(&self) -> f64 {
		ScaledValues::new(&self.scale, self.view.transform.k).hit_radius
	}
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn event_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Renders an interactive radial partner network on a canvas element.
///
/// `state` is shared with the rest of the page: clicks select nodes through
/// it, and edits made elsewhere (detail panel, add form) show up on the next
/// frame. Set `fullscreen = true` to fill the viewport and follow window
/// resizes; explicit `width`/`height` override parent-based sizing.
#[component]
pub fn NetworkGraphCanvas(
	state: RwSignal<NetworkState>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<GraphContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let parent_size = || {
			canvas
				.parent_element()
				.map(|p| (p.client_width() as f64, p.client_height() as f64))
		};
		let (w, h) = if fullscreen {
			viewport_size(&window).unwrap_or((800.0, 600.0))
		} else {
			let (pw, ph) = parent_size().unwrap_or((800.0, 600.0));
			(width.unwrap_or(pw), height.unwrap_or(ph))
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("supply-graph: canvas 2d context unavailable");
			return;
		};

		*context_init.borrow_mut() = Some(GraphContext {
			view: CanvasView::new(w, h),
			scale: ScaleConfig::default(),
			theme: Theme::default(),
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.view.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let mut alive = true;
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let dt = 0.016;
				c.view.tick(dt);
				alive = state
					.try_with_untracked(|s| render::render(s, &c.view, &ctx, &c.scale, &c.theme))
					.is_some();
			}
			if !alive {
				return;
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = event_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_md.borrow_mut() {
			let point = c.view.transform.screen_to_graph(x, y);
			let hit = state.with_untracked(|s| {
				s.node_at(point, c.hit_radius())
					.and_then(|id| s.node(id))
					.map(|n| (n.id.clone(), n.position))
			});
			if let Some((id, position)) = hit {
				c.view.drag.node_id = Some(id);
				c.view.drag.start_x = x;
				c.view.drag.start_y = y;
				c.view.drag.node_start = position;
				c.view.drag.moved = false;
			} else {
				c.view.pan.active = true;
				c.view.pan.start_x = x;
				c.view.pan.start_y = y;
				c.view.pan.transform_start_x = c.view.transform.x;
				c.view.pan.transform_start_y = c.view.transform.y;
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = event_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if let Some(id) = c.view.drag.node_id.clone() {
				let (dx, dy) = (x - c.view.drag.start_x, y - c.view.drag.start_y);
				if !c.view.drag.moved && dx.hypot(dy) < CLICK_SLOP {
					return;
				}
				c.view.drag.moved = true;
				let k = c.view.transform.k;
				let target = Position::new(
					c.view.drag.node_start.x + dx / k,
					c.view.drag.node_start.y + dy / k,
				);
				state.update_untracked(|s| {
					s.move_node(&id, target);
				});
			} else if c.view.pan.active {
				c.view.transform.x = c.view.pan.transform_start_x + (x - c.view.pan.start_x);
				c.view.transform.y = c.view.pan.transform_start_y + (y - c.view.pan.start_y);
			} else {
				let point = c.view.transform.screen_to_graph(x, y);
				let radius = c.hit_radius();
				let hovered = state.with_untracked(|s| s.node_at(point, radius).map(str::to_string));
				c.view.hover.set(hovered.as_deref());
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		let clicked = match *context_mu.borrow_mut() {
			Some(ref mut c) => {
				let drag = std::mem::take(&mut c.view.drag);
				c.view.pan.active = false;
				drag.node_id.filter(|_| !drag.moved)
			}
			None => None,
		};
		if let Some(id) = clicked {
			state.update(|s| s.select(&id));
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.view.drag = Default::default();
			c.view.pan.active = false;
			c.view.hover.set(None);
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = event_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			c.view.transform.zoom_at(x, y, factor);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
