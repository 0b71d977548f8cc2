use std::collections::HashSet;

use log::{debug, info};

use super::types::{FlowData, FlowEdge, FlowNode};
use crate::config::CanvasConfig;
use crate::error::ConnectError;

pub const NODE_HEIGHT: f64 = 40.0;
pub const NODE_RADIUS: f64 = 8.0;
pub const HANDLE_RADIUS: f64 = 4.0;
const MINIMAP_MARGIN: f64 = 15.0;
const HANDLE_HIT_RADIUS: f64 = 10.0;
const EDGE_HIT_DISTANCE: f64 = 6.0;
const BEZIER_SAMPLES: usize = 24;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub fn right(&self) -> f64 {
		self.x + self.width
	}

	pub fn bottom(&self) -> f64 {
		self.y + self.height
	}

	pub fn contains(&self, px: f64, py: f64) -> bool {
		px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
	}

	pub fn union(&self, other: &Rect) -> Rect {
		let (x, y) = (self.x.min(other.x), self.y.min(other.y));
		Rect {
			x,
			y,
			width: self.right().max(other.right()) - x,
			height: self.bottom().max(other.bottom()) - y,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleKind {
	Source,
	Target,
}

/// Cubic curve from a source handle down into a target handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierPath {
	pub from: (f64, f64),
	pub c1: (f64, f64),
	pub c2: (f64, f64),
	pub to: (f64, f64),
}

impl BezierPath {
	pub fn between(from: (f64, f64), to: (f64, f64)) -> Self {
		let offset = ((to.1 - from.1).abs() * 0.5).max(25.0);
		Self {
			from,
			c1: (from.0, from.1 + offset),
			c2: (to.0, to.1 - offset),
			to,
		}
	}

	pub fn point_at(&self, t: f64) -> (f64, f64) {
		let u = 1.0 - t;
		let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
		(
			a * self.from.0 + b * self.c1.0 + c * self.c2.0 + d * self.to.0,
			a * self.from.1 + b * self.c1.1 + c * self.c2.1 + d * self.to.1,
		)
	}

	/// Approximate distance from a point to the curve, via a sampled polyline.
	pub fn distance_to(&self, px: f64, py: f64) -> f64 {
		let mut prev = self.from;
		let mut best = f64::INFINITY;
		for i in 1..=BEZIER_SAMPLES {
			let next = self.point_at(i as f64 / BEZIER_SAMPLES as f64);
			best = best.min(segment_distance((px, py), prev, next));
			prev = next;
		}
		best
	}
}

fn segment_distance(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
	let (dx, dy) = (b.0 - a.0, b.1 - a.1);
	let len_sq = dx * dx + dy * dy;
	let t = if len_sq < f64::EPSILON {
		0.0
	} else {
		(((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
	};
	let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
	((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

/// Screen placement and scale of the minimap overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapProjection {
	pub frame: Rect,
	pub scale: f64,
	offset_x: f64,
	offset_y: f64,
}

impl MinimapProjection {
	pub fn project(&self, wx: f64, wy: f64) -> (f64, f64) {
		(self.offset_x + wx * self.scale, self.offset_y + wy * self.scale)
	}

	pub fn project_rect(&self, rect: &Rect) -> Rect {
		let (x, y) = self.project(rect.x, rect.y);
		Rect {
			x,
			y,
			width: rect.width * self.scale,
			height: rect.height * self.scale,
		}
	}
}

/// screen = world * k + (x, y)
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// A connection being drawn out of a source handle. Cursor is in world space.
#[derive(Clone, Debug, Default)]
pub struct ConnectState {
	pub source_idx: Option<usize>,
	pub cursor_x: f64,
	pub cursor_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Selection {
	pub nodes: HashSet<String>,
	pub edges: HashSet<String>,
}

impl Selection {
	pub fn clear(&mut self) {
		self.nodes.clear();
		self.edges.clear();
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() && self.edges.is_empty()
	}
}

pub struct FlowState {
	pub nodes: Vec<FlowNode>,
	pub edges: Vec<FlowEdge>,
	pub config: CanvasConfig,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub connection: ConnectState,
	pub selection: Selection,
	pub width: f64,
	pub height: f64,
	/// When false, nodes can't be dragged, connected or selected.
	pub interactive: bool,
	pub flow_time: f64,
}

impl FlowState {
	pub fn new(data: &FlowData, config: CanvasConfig, width: f64, height: f64) -> Self {
		let mut state = Self {
			nodes: data.nodes.clone(),
			edges: data.edges.clone(),
			config,
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			connection: ConnectState::default(),
			selection: Selection::default(),
			width,
			height,
			interactive: true,
			flow_time: 0.0,
		};
		state.fit_view();
		state
	}

	pub fn node_rect(node: &FlowNode) -> Rect {
		Rect {
			x: node.position.x,
			y: node.position.y,
			width: node.style.min_width,
			height: NODE_HEIGHT,
		}
	}

	pub fn source_anchor(node: &FlowNode) -> (f64, f64) {
		let rect = Self::node_rect(node);
		(rect.x + rect.width / 2.0, rect.bottom())
	}

	pub fn target_anchor(node: &FlowNode) -> (f64, f64) {
		let rect = Self::node_rect(node);
		(rect.x + rect.width / 2.0, rect.y)
	}

	fn node_by_id(&self, id: &str) -> Option<&FlowNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.nodes
			.iter()
			.rposition(|node| Self::node_rect(node).contains(gx, gy))
	}

	pub fn handle_at_position(&self, sx: f64, sy: f64) -> Option<(usize, HandleKind)> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let near = |(hx, hy): (f64, f64)| {
			((hx - gx).powi(2) + (hy - gy).powi(2)).sqrt() < HANDLE_HIT_RADIUS
		};
		self.nodes.iter().enumerate().rev().find_map(|(idx, node)| {
			if node.kind.has_source_handle() && near(Self::source_anchor(node)) {
				Some((idx, HandleKind::Source))
			} else if node.kind.has_target_handle() && near(Self::target_anchor(node)) {
				Some((idx, HandleKind::Target))
			} else {
				None
			}
		})
	}

	pub fn edge_path(&self, edge: &FlowEdge) -> Option<BezierPath> {
		let source = self.node_by_id(&edge.source)?;
		let target = self.node_by_id(&edge.target)?;
		Some(BezierPath::between(
			Self::source_anchor(source),
			Self::target_anchor(target),
		))
	}

	pub fn edge_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.edges.iter().rposition(|edge| {
			self.edge_path(edge)
				.is_some_and(|path| path.distance_to(gx, gy) < EDGE_HIT_DISTANCE)
		})
	}

	pub fn is_node_selected(&self, node: &FlowNode) -> bool {
		self.selection.nodes.contains(&node.id)
	}

	pub fn is_edge_selected(&self, edge: &FlowEdge) -> bool {
		self.selection.edges.contains(&edge.id)
	}

	pub fn is_connecting(&self) -> bool {
		self.connection.source_idx.is_some()
	}

	/// Adds an edge between two existing nodes and returns its id.
	pub fn connect(&mut self, source: &str, target: &str) -> Result<String, ConnectError> {
		let src = self
			.node_by_id(source)
			.ok_or_else(|| ConnectError::UnknownNode(source.into()))?;
		let tgt = self
			.node_by_id(target)
			.ok_or_else(|| ConnectError::UnknownNode(target.into()))?;
		if source == target {
			return Err(ConnectError::SelfLoop(source.into()));
		}
		if !src.kind.has_source_handle() {
			return Err(ConnectError::NoSourceHandle(source.into()));
		}
		if !tgt.kind.has_target_handle() {
			return Err(ConnectError::NoTargetHandle(target.into()));
		}
		if self
			.edges
			.iter()
			.any(|e| e.source == source && e.target == target)
		{
			return Err(ConnectError::Duplicate {
				from: source.into(),
				to: target.into(),
			});
		}

		let id = format!("reactflow__edge-{source}-{target}");
		self.edges.push(FlowEdge {
			id: id.clone(),
			source: source.into(),
			target: target.into(),
			label: None,
			animated: false,
		});
		info!("connected {source} -> {target}");
		Ok(id)
	}

	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		if self.interactive {
			if let Some((idx, HandleKind::Source)) = self.handle_at_position(sx, sy) {
				let (gx, gy) = self.screen_to_graph(sx, sy);
				self.connection = ConnectState {
					source_idx: Some(idx),
					cursor_x: gx,
					cursor_y: gy,
				};
				return;
			}
			if let Some(idx) = self.node_at_position(sx, sy) {
				self.selection.clear();
				self.selection.nodes.insert(self.nodes[idx].id.clone());
				let position = self.nodes[idx].position;
				self.drag = DragState {
					active: true,
					node_idx: Some(idx),
					start_x: sx,
					start_y: sy,
					node_start_x: position.x,
					node_start_y: position.y,
				};
				return;
			}
			if let Some(idx) = self.edge_at_position(sx, sy) {
				self.selection.clear();
				self.selection.edges.insert(self.edges[idx].id.clone());
				return;
			}
			self.selection.clear();
		}

		self.pan = PanState {
			active: true,
			start_x: sx,
			start_y: sy,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn pointer_move(&mut self, sx: f64, sy: f64) {
		if self.drag.active {
			if let Some(idx) = self.drag.node_idx {
				let (dx, dy) = (
					(sx - self.drag.start_x) / self.transform.k,
					(sy - self.drag.start_y) / self.transform.k,
				);
				if let Some(node) = self.nodes.get_mut(idx) {
					node.position.x = self.drag.node_start_x + dx;
					node.position.y = self.drag.node_start_y + dy;
				}
			}
		} else if self.is_connecting() {
			let (gx, gy) = self.screen_to_graph(sx, sy);
			self.connection.cursor_x = gx;
			self.connection.cursor_y = gy;
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	/// Ends the current gesture. Returns the outcome if a connection was
	/// dropped onto a node; `None` when nothing was being connected or the
	/// drop landed on empty canvas.
	pub fn pointer_up(&mut self, sx: f64, sy: f64) -> Option<Result<String, ConnectError>> {
		let outcome = self.connection.source_idx.and_then(|source_idx| {
			let target_idx = match self.handle_at_position(sx, sy) {
				Some((idx, HandleKind::Target)) => Some(idx),
				_ => self.node_at_position(sx, sy),
			}?;
			let source = self.nodes[source_idx].id.clone();
			let target = self.nodes[target_idx].id.clone();
			Some(self.connect(&source, &target))
		});
		self.cancel_interaction();
		outcome
	}

	pub fn cancel_interaction(&mut self) {
		self.drag = DragState::default();
		self.pan = PanState::default();
		self.connection = ConnectState::default();
	}

	/// Zooms around a screen point, keeping the world point under it fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = self.config.clamp_zoom(self.transform.k * factor);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn zoom_in(&mut self) {
		let step = self.config.zoom_step;
		self.zoom_at(self.width / 2.0, self.height / 2.0, step);
	}

	pub fn zoom_out(&mut self) {
		let step = self.config.zoom_step;
		self.zoom_at(self.width / 2.0, self.height / 2.0, 1.0 / step);
	}

	pub fn nodes_bounds(&self) -> Option<Rect> {
		self.nodes
			.iter()
			.map(Self::node_rect)
			.reduce(|acc, rect| acc.union(&rect))
	}

	/// Visible area in world coordinates.
	pub fn viewport_rect(&self) -> Rect {
		let (x, y) = self.screen_to_graph(0.0, 0.0);
		Rect {
			x,
			y,
			width: self.width / self.transform.k,
			height: self.height / self.transform.k,
		}
	}

	/// Centres all nodes in the viewport, leaving `fit_padding` around them.
	pub fn fit_view(&mut self) {
		let Some(bounds) = self.nodes_bounds() else {
			self.transform = ViewTransform {
				x: self.width / 2.0,
				y: self.height / 2.0,
				k: 1.0,
			};
			return;
		};
		let padding = 1.0 + self.config.fit_padding;
		let x_zoom = self.width / (bounds.width * padding).max(1.0);
		let y_zoom = self.height / (bounds.height * padding).max(1.0);
		let k = self.config.clamp_zoom(x_zoom.min(y_zoom));
		let (cx, cy) = (
			bounds.x + bounds.width / 2.0,
			bounds.y + bounds.height / 2.0,
		);
		self.transform = ViewTransform {
			x: self.width / 2.0 - cx * k,
			y: self.height / 2.0 - cy * k,
			k,
		};
	}

	pub fn toggle_interactive(&mut self) -> bool {
		self.interactive = !self.interactive;
		if !self.interactive {
			self.cancel_interaction();
			self.selection.clear();
		}
		self.interactive
	}

	/// Removes selected nodes (with every edge touching them) and selected
	/// edges. Returns how many nodes and edges were removed.
	pub fn delete_selected(&mut self) -> (usize, usize) {
		if self.selection.is_empty() {
			return (0, 0);
		}
		let selection = std::mem::take(&mut self.selection);
		let (nodes_before, edges_before) = (self.nodes.len(), self.edges.len());

		self.nodes.retain(|n| !selection.nodes.contains(&n.id));
		self.edges.retain(|e| {
			!selection.edges.contains(&e.id)
				&& !selection.nodes.contains(&e.source)
				&& !selection.nodes.contains(&e.target)
		});
		self.cancel_interaction();

		let removed = (
			nodes_before - self.nodes.len(),
			edges_before - self.edges.len(),
		);
		debug!("deleted {} nodes and {} edges", removed.0, removed.1);
		removed
	}

	pub fn minimap(&self) -> Option<MinimapProjection> {
		let bounds = self.nodes_bounds()?.union(&self.viewport_rect());
		let (w, h) = (self.config.minimap_width, self.config.minimap_height);
		let frame = Rect {
			x: self.width - w - MINIMAP_MARGIN,
			y: self.height - h - MINIMAP_MARGIN,
			width: w,
			height: h,
		};
		let scale = (w / bounds.width).min(h / bounds.height);
		Some(MinimapProjection {
			frame,
			scale,
			offset_x: frame.x + (w - bounds.width * scale) / 2.0 - bounds.x * scale,
			offset_y: frame.y + (h - bounds.height * scale) / 2.0 - bounds.y * scale,
		})
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::flow_canvas::types::NodeKind;
	use crate::workflow::campaign_flow;

	const EPS: f64 = 1e-6;

	impl FlowState {
		fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
			(
				gx * self.transform.k + self.transform.x,
				gy * self.transform.k + self.transform.y,
			)
		}
	}

	#[test]
	fn screen_and_graph_coordinates_invert_each_other() {
		let mut state = state();
		state.zoom_at(300.0, 200.0, 1.7);
		let (gx, gy) = state.screen_to_graph(640.0, 410.0);
		let (sx, sy) = state.graph_to_screen(gx, gy);
		assert!((sx - 640.0).abs() < EPS && (sy - 410.0).abs() < EPS);
	}

	fn state() -> FlowState {
		FlowState::new(&campaign_flow(), CanvasConfig::default(), 1000.0, 800.0)
	}

	fn node_center(state: &FlowState, id: &str) -> (f64, f64) {
		let rect = FlowState::node_rect(state.node_by_id(id).unwrap());
		state.graph_to_screen(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
	}

	fn source_handle(state: &FlowState, id: &str) -> (f64, f64) {
		let (gx, gy) = FlowState::source_anchor(state.node_by_id(id).unwrap());
		state.graph_to_screen(gx, gy)
	}

	#[test]
	fn initial_load_shows_every_node_and_edge() {
		let state = state();
		let flow = campaign_flow();
		assert_eq!(state.nodes, flow.nodes);
		assert_eq!(state.edges, flow.edges);
	}

	#[test]
	fn fit_view_puts_all_nodes_on_screen() {
		let state = state();
		assert!(state.transform.k >= 0.5 && state.transform.k <= 2.0);
		for node in &state.nodes {
			let rect = FlowState::node_rect(node);
			let (x0, y0) = state.graph_to_screen(rect.x, rect.y);
			let (x1, y1) = state.graph_to_screen(rect.right(), rect.bottom());
			assert!(x0 >= 0.0 && y0 >= 0.0, "{} starts off screen", node.id);
			assert!(x1 <= 1000.0 && y1 <= 800.0, "{} ends off screen", node.id);
		}
		let bounds = state.nodes_bounds().unwrap();
		let (cx, cy) = state.graph_to_screen(
			bounds.x + bounds.width / 2.0,
			bounds.y + bounds.height / 2.0,
		);
		assert!((cx - 500.0).abs() < EPS && (cy - 400.0).abs() < EPS);
	}

	#[test]
	fn dragging_a_node_follows_the_pointer_in_world_space() {
		let mut state = state();
		let k = state.transform.k;
		let (sx, sy) = node_center(&state, "4");
		state.pointer_down(sx, sy);
		assert!(state.drag.active);
		state.pointer_move(sx + 50.0, sy - 20.0);
		assert!(state.pointer_up(sx + 50.0, sy - 20.0).is_none());

		let node = state.node_by_id("4").unwrap();
		assert!((node.position.x - (250.0 + 50.0 / k)).abs() < EPS);
		assert!((node.position.y - (350.0 - 20.0 / k)).abs() < EPS);
		assert!(!state.drag.active);
	}

	#[test]
	fn dragging_from_source_handle_onto_node_adds_edge() {
		let mut state = state();
		let (hx, hy) = source_handle(&state, "1");
		state.pointer_down(hx, hy);
		assert!(state.is_connecting());

		let (tx, ty) = node_center(&state, "3");
		state.pointer_move(tx, ty);
		let outcome = state.pointer_up(tx, ty);
		assert_eq!(outcome, Some(Ok("reactflow__edge-1-3".to_string())));

		let edge = state.edges.last().unwrap();
		assert_eq!((edge.source.as_str(), edge.target.as_str()), ("1", "3"));
		assert_eq!(edge.label, None);
		assert!(!edge.animated);
		assert!(!state.is_connecting());
	}

	#[test]
	fn connection_dropped_on_background_is_cancelled() {
		let mut state = state();
		let (hx, hy) = source_handle(&state, "2");
		state.pointer_down(hx, hy);
		assert_eq!(state.pointer_up(5.0, 5.0), None);
		assert_eq!(state.edges.len(), 9);
	}

	#[test]
	fn connect_refuses_invalid_edges() {
		let mut state = state();
		assert_eq!(
			state.connect("3", "3"),
			Err(ConnectError::SelfLoop("3".into()))
		);
		assert_eq!(
			state.connect("2", "1"),
			Err(ConnectError::NoTargetHandle("1".into()))
		);
		assert_eq!(
			state.connect("9", "2"),
			Err(ConnectError::NoSourceHandle("9".into()))
		);
		assert_eq!(
			state.connect("1", "2"),
			Err(ConnectError::Duplicate {
				from: "1".into(),
				to: "2".into()
			})
		);
		assert_eq!(
			state.connect("1", "42"),
			Err(ConnectError::UnknownNode("42".into()))
		);
		assert_eq!(state.edges.len(), 9);
	}

	#[test]
	fn background_drag_pans_the_view() {
		let mut state = state();
		let (x0, y0) = (state.transform.x, state.transform.y);
		state.pointer_down(5.0, 5.0);
		assert!(state.pan.active);
		state.pointer_move(45.0, -15.0);
		state.pointer_up(45.0, -15.0);
		assert!((state.transform.x - (x0 + 40.0)).abs() < EPS);
		assert!((state.transform.y - (y0 - 20.0)).abs() < EPS);
		assert!(!state.pan.active);
	}

	#[test]
	fn locked_canvas_pans_instead_of_dragging() {
		let mut state = state();
		assert!(!state.toggle_interactive());
		let (sx, sy) = node_center(&state, "5");
		state.pointer_down(sx, sy);
		assert!(!state.drag.active);
		assert!(state.pan.active);
		assert!(state.selection.is_empty());
	}

	#[test]
	fn zoom_is_clamped_and_anchored_at_pointer() {
		let mut state = state();
		let world = state.screen_to_graph(120.0, 300.0);
		state.zoom_at(120.0, 300.0, 10.0);
		assert_eq!(state.transform.k, 2.0);
		let (sx, sy) = state.graph_to_screen(world.0, world.1);
		assert!((sx - 120.0).abs() < EPS && (sy - 300.0).abs() < EPS);

		for _ in 0..20 {
			state.zoom_out();
		}
		assert_eq!(state.transform.k, 0.5);
	}

	#[test]
	fn deleting_a_node_drops_its_edges() {
		let mut state = state();
		let (sx, sy) = node_center(&state, "6");
		state.pointer_down(sx, sy);
		state.pointer_up(sx, sy);
		assert!(state.selection.nodes.contains("6"));

		assert_eq!(state.delete_selected(), (1, 3));
		assert!(state.node_by_id("6").is_none());
		assert!(state.edges.iter().all(|e| e.source != "6" && e.target != "6"));
		assert_eq!(state.delete_selected(), (0, 0));
	}

	#[test]
	fn clicking_an_edge_selects_it_for_deletion() {
		let mut state = state();
		let edge = state.edges.iter().find(|e| e.id == "e6-7").unwrap().clone();
		let (gx, gy) = state.edge_path(&edge).unwrap().point_at(0.5);
		let (sx, sy) = state.graph_to_screen(gx, gy);
		state.pointer_down(sx, sy);
		state.pointer_up(sx, sy);
		assert!(state.is_edge_selected(&edge));

		assert_eq!(state.delete_selected(), (0, 1));
		assert!(state.edges.iter().all(|e| e.id != "e6-7"));
		assert_eq!(state.nodes.len(), 9);
	}

	#[test]
	fn handles_follow_node_kind() {
		let state = state();
		let input = state.node_by_id("1").unwrap();
		assert_eq!(input.kind, NodeKind::Input);
		let (tx, ty) = FlowState::target_anchor(input);
		let (sx, sy) = state.graph_to_screen(tx, ty);
		assert_eq!(state.handle_at_position(sx, sy), None);
	}

	#[test]
	fn bezier_runs_from_source_to_target() {
		let path = BezierPath::between((0.0, 0.0), (100.0, 200.0));
		assert_eq!(path.point_at(0.0), (0.0, 0.0));
		let end = path.point_at(1.0);
		assert!((end.0 - 100.0).abs() < EPS && (end.1 - 200.0).abs() < EPS);
		assert!(path.distance_to(0.0, 0.0) < EPS);
	}

	#[test]
	fn minimap_contains_every_node_and_the_viewport() {
		let state = state();
		let minimap = state.minimap().unwrap();
		let frame = minimap.frame;
		let inside = |r: Rect| {
			r.x >= frame.x - EPS
				&& r.y >= frame.y - EPS
				&& r.right() <= frame.right() + EPS
				&& r.bottom() <= frame.bottom() + EPS
		};
		for node in &state.nodes {
			assert!(inside(minimap.project_rect(&FlowState::node_rect(node))));
		}
		assert!(inside(minimap.project_rect(&state.viewport_rect())));
	}
}
