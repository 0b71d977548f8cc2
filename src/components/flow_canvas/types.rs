/// Which connection handles a node exposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeKind {
	/// Outgoing handle only.
	Input,
	#[default]
	Default,
	/// Incoming handle only.
	Output,
}

impl NodeKind {
	pub fn has_source_handle(self) -> bool {
		self != NodeKind::Output
	}

	pub fn has_target_handle(self) -> bool {
		self != NodeKind::Input
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeStyle {
	pub background: String,
	pub color: String,
	pub border: String,
	pub min_width: f64,
}

impl Default for NodeStyle {
	fn default() -> Self {
		Self {
			background: "#ffffff".into(),
			color: "#222222".into(),
			border: "#1a192b".into(),
			min_width: 150.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlowNode {
	pub id: String,
	pub label: String,
	pub kind: NodeKind,
	/// Top-left corner in world coordinates.
	pub position: Position,
	pub style: NodeStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlowEdge {
	pub id: String,
	pub source: String,
	pub target: String,
	pub label: Option<String>,
	pub animated: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowData {
	pub nodes: Vec<FlowNode>,
	pub edges: Vec<FlowEdge>,
}
