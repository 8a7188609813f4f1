use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{CanvasState, NODE_RADIUS};
use crate::engine::Node;

const MASTER_COLOR: &str = "#e63946";
const SELECTED_COLOR: &str = "#2a9d8f";
const NODE_COLOR: &str = "#f4d35e";
const INK: &str = "#1d1d1d";
const RANGE_COLOR: &str = "rgba(120, 120, 120, 0.8)";
const FONT: &str = "20px sans-serif";

pub fn render(state: &CanvasState, ctx: &CanvasRenderingContext2d, show_range: bool) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	if show_range {
		draw_ranges(state, ctx);
	}
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
}

fn node_color(node: &Node) -> &'static str {
	// Master keeps its colour even while highlighted.
	if node.is_master() {
		MASTER_COLOR
	} else if node.is_selected() {
		SELECTED_COLOR
	} else {
		NODE_COLOR
	}
}

fn draw_ranges(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let range = state.engine.range();
	ctx.set_stroke_style_str(RANGE_COLOR);
	ctx.set_line_width(1.0);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(5.0),
		&JsValue::from_f64(15.0),
	));
	for node in state.engine.graph().nodes() {
		ctx.begin_path();
		let _ = ctx.arc(node.x(), node.y(), range, 0.0, 2.0 * PI);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_edges(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(INK);
	ctx.set_fill_style_str(INK);
	ctx.set_line_width(1.0);
	ctx.set_font(FONT);

	state.engine.graph().visit_edges(|a, b, edge| {
		ctx.begin_path();
		ctx.move_to(a.x(), a.y());
		ctx.line_to(b.x(), b.y());
		ctx.stroke();

		let label = edge.label().to_string();
		let _ = ctx.fill_text(&label, (a.x() + b.x()) / 2.0, (a.y() + b.y()) / 2.0);
	});
}

fn draw_nodes(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_font(FONT);
	for node in state.engine.graph().nodes() {
		let (x, y) = (node.x(), node.y());

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node_color(node));
		ctx.fill();
		ctx.set_stroke_style_str(INK);
		ctx.stroke();

		ctx.set_fill_style_str(INK);
		let _ = ctx.fill_text(
			&node.id().to_string(),
			x - NODE_RADIUS / 3.0,
			y + NODE_RADIUS / 3.0,
		);
	}
}
