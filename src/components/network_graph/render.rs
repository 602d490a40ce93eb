//! Canvas rendering for the partner network.
//!
//! Drawing happens in passes for correct z-ordering:
//! 1. Background gradient and grid (screen space)
//! 2. Edges, emphasized edges last (world space)
//! 3. Nodes, then rings, badges and labels on top

use std::collections::HashMap;
use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::{CanvasView, NetworkState};
use super::theme::{Color, Theme};
use super::types::{Edge, NodeRole, PartnerNode, Severity};

fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the whole network to the canvas.
pub fn render(
	state: &NetworkState,
	view: &CanvasView,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, view.transform.k);

	draw_background(view, ctx, theme);

	ctx.save();
	let _ = ctx.translate(view.transform.x, view.transform.y);
	let _ = ctx.scale(view.transform.k, view.transform.k);

	let by_id: HashMap<&str, &PartnerNode> =
		state.nodes().iter().map(|n| (n.id.as_str(), n)).collect();
	draw_edges(state.edges(), &by_id, view, ctx, config, &scale, theme);
	draw_nodes(state, view, ctx, &scale, theme);

	ctx.restore();
}

fn draw_background(view: &CanvasView, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let bg = &theme.background;
	let (cx, cy) = (view.width / 2.0, view.height / 2.0);
	match ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, view.width.max(view.height) * 0.8) {
		Ok(gradient) => {
			let _ = gradient.add_color_stop(0.0, &bg.color_secondary.to_css());
			let _ = gradient.add_color_stop(1.0, &bg.color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		Err(_) => ctx.set_fill_style_str(&bg.color.to_css()),
	}
	ctx.fill_rect(0.0, 0.0, view.width, view.height);

	if bg.grid.a <= 0.0 || bg.grid_spacing <= 0.0 {
		return;
	}
	let step = bg.grid_spacing;
	let (ox, oy) = (view.transform.x.rem_euclid(step), view.transform.y.rem_euclid(step));
	ctx.set_stroke_style_str(&bg.grid.to_css());
	ctx.set_line_width(1.0);
	ctx.begin_path();
	let mut x = ox;
	while x < view.width {
		ctx.move_to(x, 0.0);
		ctx.line_to(x, view.height);
		x += step;
	}
	let mut y = oy;
	while y < view.height {
		ctx.move_to(0.0, y);
		ctx.line_to(view.width, y);
		y += step;
	}
	ctx.stroke();
}

fn node_radius(node: &PartnerNode, scale: &ScaledValues) -> f64 {
	match node.role {
		NodeRole::Hub => scale.hub_radius,
		NodeRole::Client | NodeRole::Supplier | NodeRole::SubSupplier => scale.node_radius,
	}
}

fn draw_edges(
	edges: &[Edge],
	by_id: &HashMap<&str, &PartnerNode>,
	view: &CanvasView,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let (plain, emphasized): (Vec<&Edge>, Vec<&Edge>) = edges.iter().partition(|e| !e.emphasized);

	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_stroke_style_str(&theme.edge.color.to_css());
	ctx.set_line_width(scale.edge_width);
	for edge in plain {
		draw_edge_line(edge, by_id, ctx, scale);
	}

	if emphasized.is_empty() {
		return;
	}
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(scale.dash_pattern.0),
		&JsValue::from_f64(scale.dash_pattern.1),
	));
	ctx.set_line_dash_offset(scale.dash_offset(view.flow_time, config.edge.flow_speed));
	ctx.set_stroke_style_str(&theme.edge.emphasized.to_css());
	ctx.set_line_width(scale.emphasized_width);
	for edge in emphasized {
		draw_edge_line(edge, by_id, ctx, scale);
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_edge_line(
	edge: &Edge,
	by_id: &HashMap<&str, &PartnerNode>,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
) {
	let (Some(src), Some(tgt)) = (by_id.get(edge.source.as_str()), by_id.get(edge.target.as_str()))
	else {
		return;
	};
	let (a, b) = (src.position, tgt.position);
	let (dx, dy) = (b.x - a.x, b.y - a.y);
	let dist = (dx * dx + dy * dy).sqrt();
	let (ra, rb) = (node_radius(src, scale), node_radius(tgt, scale));
	if dist <= ra + rb {
		return;
	}
	let (ux, uy) = (dx / dist, dy / dist);
	ctx.begin_path();
	ctx.move_to(a.x + ux * ra, a.y + uy * ra);
	ctx.line_to(b.x - ux * rb, b.y - uy * rb);
	ctx.stroke();
}

fn draw_nodes(
	state: &NetworkState,
	view: &CanvasView,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let pulse = (view.flow_time * theme.node.pulse_speed).sin() * 0.5 + 0.5;
	let selected = state.selected_id();

	for node in state.nodes() {
		let hover_t = smooth_step(view.hover.intensity(&node.id));
		let radius = node_radius(node, scale) * (1.0 + 0.08 * hover_t);
		let fill = theme.severity.fill(node.role, node.severity);

		if node.severity == Severity::Critical {
			draw_pulse(ctx, node, radius, fill, pulse, theme);
		}
		draw_disc(ctx, node, radius, fill);

		if selected == Some(node.id.as_str()) {
			draw_ring(ctx, node, radius + scale.ring_offset, theme.node.selection_ring, scale.ring_width);
		} else if hover_t > 0.01 {
			let ring = theme.node.hover_ring;
			draw_ring(ctx, node, radius + scale.ring_offset, ring.with_alpha(ring.a * hover_t), scale.ring_width * 0.75);
		}
		if let Some(count) = node.badge_count() {
			draw_badge(ctx, node, radius, count, scale, theme);
		}
		draw_labels(ctx, node, radius, scale, theme);
	}
}

fn draw_pulse(
	ctx: &CanvasRenderingContext2d,
	node: &PartnerNode,
	radius: f64,
	fill: Color,
	pulse: f64,
	theme: &Theme,
) {
	let (x, y) = (node.position.x, node.position.y);
	let outer = radius * (1.0 + theme.node.pulse_intensity * (1.0 + 2.0 * pulse));
	ctx.begin_path();
	let _ = ctx.arc(x, y, outer, 0.0, TAU);
	ctx.set_fill_style_str(&fill.with_alpha(0.25 * (1.0 - pulse) + 0.1).to_css());
	ctx.fill();
}

fn draw_disc(ctx: &CanvasRenderingContext2d, node: &PartnerNode, radius: f64, fill: Color) {
	let (x, y) = (node.position.x, node.position.y);
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, TAU);
	match ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius) {
		Ok(gradient) => {
			let _ = gradient.add_color_stop(0.0, &fill.lighten(0.35).to_css());
			let _ = gradient.add_color_stop(0.7, &fill.to_css());
			let _ = gradient.add_color_stop(1.0, &fill.darken(0.25).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		Err(_) => ctx.set_fill_style_str(&fill.to_css()),
	}
	ctx.fill();
}

fn draw_ring(ctx: &CanvasRenderingContext2d, node: &PartnerNode, radius: f64, color: Color, width: f64) {
	ctx.begin_path();
	let _ = ctx.arc(node.position.x, node.position.y, radius, 0.0, TAU);
	ctx.set_stroke_style_str(&color.to_css());
	ctx.set_line_width(width);
	ctx.stroke();
}

fn draw_badge(
	ctx: &CanvasRenderingContext2d,
	node: &PartnerNode,
	radius: f64,
	count: u32,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let offset = radius * std::f64::consts::FRAC_1_SQRT_2;
	let (bx, by) = (node.position.x + offset, node.position.y - offset);
	let badge_radius = radius * 0.38;
	ctx.begin_path();
	let _ = ctx.arc(bx, by, badge_radius, 0.0, TAU);
	ctx.set_fill_style_str(&theme.node.badge.to_css());
	ctx.fill();

	ctx.set_fill_style_str("#ffffff");
	ctx.set_font(&scale.caption_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&count.to_string(), bx, by);
}

fn draw_labels(
	ctx: &CanvasRenderingContext2d,
	node: &PartnerNode,
	radius: f64,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let (x, y) = (node.position.x, node.position.y);
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");

	let name_y = y + radius + 6.0 / scale.k;
	ctx.set_fill_style_str(&theme.node.label.to_css());
	ctx.set_font(&scale.label_font);
	let _ = ctx.fill_text(&node.name, x, name_y);

	if !node.description.is_empty() {
		ctx.set_fill_style_str(&theme.node.caption.to_css());
		ctx.set_font(&scale.caption_font);
		let _ = ctx.fill_text(&node.description, x, name_y + 16.0 / scale.k);
	}
}
