mod component;
mod render;
mod state;
mod types;

pub use component::FlowCanvas;
pub use types::{FlowData, FlowEdge, FlowNode, NodeKind, NodeStyle, Position};
