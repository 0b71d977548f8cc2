use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{
	BezierPath, FlowState, HANDLE_RADIUS, MinimapProjection, NODE_RADIUS, Rect,
};

const BACKGROUND: &str = "#ffffff";
const DOT_COLOR: &str = "#91919a";
const EDGE_COLOR: &str = "#b1b1b7";
const EDGE_SELECTED_COLOR: &str = "#555555";
const HANDLE_COLOR: &str = "#1a192b";

pub fn render(state: &FlowState, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_background(state, ctx);

	ctx.save();
	ctx.translate(state.transform.x, state.transform.y)?;
	ctx.scale(state.transform.k, state.transform.k)?;
	draw_edges(state, ctx)?;
	draw_connection_line(state, ctx);
	draw_nodes(state, ctx)?;
	ctx.restore();

	if let Some(minimap) = state.minimap() {
		draw_minimap(state, &minimap, ctx);
	}
	Ok(())
}

/// Dot grid in screen space, aligned to world coordinates.
fn draw_background(state: &FlowState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let gap = state.config.background_gap * k;
	let size = (state.config.background_dot_size * k).max(0.5);
	let (start_x, start_y) = (state.transform.x.rem_euclid(gap), state.transform.y.rem_euclid(gap));

	ctx.set_fill_style_str(DOT_COLOR);
	let mut y = start_y;
	while y < state.height {
		let mut x = start_x;
		while x < state.width {
			ctx.fill_rect(x - size / 2.0, y - size / 2.0, size, size);
			x += gap;
		}
		y += gap;
	}
}

fn stroke_bezier(ctx: &CanvasRenderingContext2d, path: &BezierPath) {
	ctx.begin_path();
	ctx.move_to(path.from.0, path.from.1);
	ctx.bezier_curve_to(
		path.c1.0, path.c1.1, path.c2.0, path.c2.1, path.to.0, path.to.1,
	);
	ctx.stroke();
}

fn draw_edges(state: &FlowState, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
	let (dash, gap) = (5.0, 5.0);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);

	for edge in &state.edges {
		let Some(path) = state.edge_path(edge) else {
			continue;
		};
		let selected = state.is_edge_selected(edge);

		ctx.set_stroke_style_str(if selected {
			EDGE_SELECTED_COLOR
		} else {
			EDGE_COLOR
		});
		ctx.set_line_width(if selected { 2.0 } else { 1.0 });
		if edge.animated {
			ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			))?;
			ctx.set_line_dash_offset(dash_offset);
		}
		stroke_bezier(ctx, &path);
		ctx.set_line_dash(&js_sys::Array::new())?;

		if let Some(label) = &edge.label {
			let (mx, my) = path.point_at(0.5);
			ctx.set_font("10px sans-serif");
			let text_width = ctx.measure_text(label)?.width();
			let (pad_x, pad_y) = (4.0, 3.0);
			ctx.set_fill_style_str("#ffffff");
			ctx.fill_rect(
				mx - text_width / 2.0 - pad_x,
				my - 5.0 - pad_y,
				text_width + pad_x * 2.0,
				10.0 + pad_y * 2.0,
			);
			ctx.set_fill_style_str("#222222");
			ctx.set_text_align("center");
			ctx.set_text_baseline("middle");
			ctx.fill_text(label, mx, my)?;
		}
	}
	Ok(())
}

fn draw_connection_line(state: &FlowState, ctx: &CanvasRenderingContext2d) {
	let Some(node) = state
		.connection
		.source_idx
		.and_then(|idx| state.nodes.get(idx))
	else {
		return;
	};
	let from = FlowState::source_anchor(node);
	let to = (state.connection.cursor_x, state.connection.cursor_y);
	ctx.set_stroke_style_str(EDGE_COLOR);
	ctx.set_line_width(1.0);
	stroke_bezier(ctx, &BezierPath::between(from, to));
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, rect: &Rect, r: f64) -> Result<(), JsValue> {
	ctx.begin_path();
	ctx.move_to(rect.x + r, rect.y);
	ctx.arc_to(rect.right(), rect.y, rect.right(), rect.bottom(), r)?;
	ctx.arc_to(rect.right(), rect.bottom(), rect.x, rect.bottom(), r)?;
	ctx.arc_to(rect.x, rect.bottom(), rect.x, rect.y, r)?;
	ctx.arc_to(rect.x, rect.y, rect.right(), rect.y, r)?;
	ctx.close_path();
	Ok(())
}

fn draw_handle(ctx: &CanvasRenderingContext2d, (x, y): (f64, f64)) -> Result<(), JsValue> {
	ctx.begin_path();
	ctx.arc(x, y, HANDLE_RADIUS, 0.0, 2.0 * PI)?;
	ctx.set_fill_style_str(HANDLE_COLOR);
	ctx.fill();
	ctx.set_stroke_style_str("#ffffff");
	ctx.set_line_width(1.0);
	ctx.stroke();
	Ok(())
}

fn draw_nodes(state: &FlowState, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
	ctx.set_font("12px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for node in &state.nodes {
		let rect = FlowState::node_rect(node);

		if state.is_node_selected(node) {
			let outline = Rect {
				x: rect.x - 2.0,
				y: rect.y - 2.0,
				width: rect.width + 4.0,
				height: rect.height + 4.0,
			};
			rounded_rect(ctx, &outline, NODE_RADIUS + 2.0)?;
			ctx.set_stroke_style_str(HANDLE_COLOR);
			ctx.set_line_width(1.5);
			ctx.stroke();
		}

		rounded_rect(ctx, &rect, NODE_RADIUS)?;
		ctx.set_fill_style_str(&node.style.background);
		ctx.fill();
		ctx.set_stroke_style_str(&node.style.border);
		ctx.set_line_width(1.0);
		ctx.stroke();

		ctx.set_fill_style_str(&node.style.color);
		ctx.fill_text_with_max_width(
			&node.label,
			rect.x + rect.width / 2.0,
			rect.y + rect.height / 2.0,
			rect.width - 20.0,
		)?;

		if node.kind.has_target_handle() {
			draw_handle(ctx, FlowState::target_anchor(node))?;
		}
		if node.kind.has_source_handle() {
			draw_handle(ctx, FlowState::source_anchor(node))?;
		}
	}
	Ok(())
}

fn draw_minimap(state: &FlowState, minimap: &MinimapProjection, ctx: &CanvasRenderingContext2d) {
	let frame = minimap.frame;
	ctx.set_fill_style_str("rgba(240, 240, 240, 0.6)");
	ctx.fill_rect(frame.x, frame.y, frame.width, frame.height);

	for node in &state.nodes {
		let rect = minimap.project_rect(&FlowState::node_rect(node));
		ctx.set_fill_style_str(&node.style.background);
		ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
	}

	let view = minimap.project_rect(&state.viewport_rect());
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.35)");
	ctx.fill_rect(view.x, view.y, view.width, view.height);
	ctx.set_stroke_style_str(EDGE_SELECTED_COLOR);
	ctx.set_line_width(1.0);
	ctx.stroke_rect(view.x, view.y, view.width, view.height);

	ctx.set_stroke_style_str("#d4d4d8");
	ctx.stroke_rect(frame.x, frame.y, frame.width, frame.height);
}
