//! The cold email campaign: diagram content, log script and headline numbers.

use crate::components::flow_canvas::{FlowData, FlowEdge, FlowNode, NodeKind, NodeStyle, Position};

/// Lines revealed by the execution playback, in order.
pub const CAMPAIGN_STEPS: &[&str] = &[
	"✅ Loaded 150 contacts from CSV",
	"✅ Filtered 142 verified email addresses",
	"✅ Personalized email content for 142 recipients",
	"✅ Sent 142 cold emails",
	"⏳ Waiting 3 days for responses...",
	"✅ 68 emails opened, 74 unopened",
	"✅ Sent 74 follow-up emails",
	"✅ Marked 68 contacts as engaged",
	"✅ Logged all interactions to CRM",
	"🎉 Workflow completed successfully!",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
	pub icon: &'static str,
	pub label: &'static str,
	pub value: &'static str,
}

/// Summary panel figures. Fixed, not derived from the log.
pub const CAMPAIGN_STATS: &[Stat] = &[
	Stat {
		icon: "📥",
		label: "Total Contacts",
		value: "150",
	},
	Stat {
		icon: "✅",
		label: "Valid Emails",
		value: "142",
	},
	Stat {
		icon: "📧",
		label: "Emails Sent",
		value: "216",
	},
	Stat {
		icon: "📈",
		label: "Open Rate",
		value: "47.9%",
	},
	Stat {
		icon: "🎯",
		label: "Engaged",
		value: "68",
	},
];

// (id, kind, label, x, y, background, border, min width)
const NODES: &[(&str, NodeKind, &str, f64, f64, &str, &str, f64)] = &[
	("1", NodeKind::Input, "📋 Load Contacts from CSV", 250.0, 50.0, "#10b981", "#059669", 200.0),
	("2", NodeKind::Default, "🔍 Filter Verified Emails", 250.0, 150.0, "#3b82f6", "#2563eb", 200.0),
	("3", NodeKind::Default, "✏️ Personalize Email Content", 250.0, 250.0, "#8b5cf6", "#7c3aed", 200.0),
	("4", NodeKind::Default, "📧 Send Cold Email", 250.0, 350.0, "#f59e0b", "#d97706", 200.0),
	("5", NodeKind::Default, "⏰ Wait 3 Days", 250.0, 450.0, "#6366f1", "#4f46e5", 200.0),
	("6", NodeKind::Default, "❓ Email Opened?", 250.0, 550.0, "#ec4899", "#db2777", 200.0),
	("7", NodeKind::Default, "📨 Send Follow-up Email", 100.0, 650.0, "#f97316", "#ea580c", 180.0),
	("8", NodeKind::Default, "✅ Mark as Engaged", 400.0, 650.0, "#14b8a6", "#0d9488", 180.0),
	("9", NodeKind::Output, "📊 Log to CRM", 250.0, 750.0, "#64748b", "#475569", 200.0),
];

// (source, target, label)
const EDGES: &[(&str, &str, Option<&str>)] = &[
	("1", "2", None),
	("2", "3", None),
	("3", "4", None),
	("4", "5", None),
	("5", "6", None),
	("6", "7", Some("No")),
	("6", "8", Some("Yes")),
	("7", "9", None),
	("8", "9", None),
];

/// Builds the initial diagram shown on page load.
pub fn campaign_flow() -> FlowData {
	let nodes = NODES
		.iter()
		.map(|&(id, kind, label, x, y, background, border, min_width)| FlowNode {
			id: id.into(),
			label: label.into(),
			kind,
			position: Position { x, y },
			style: NodeStyle {
				background: background.into(),
				color: "#fff".into(),
				border: border.into(),
				min_width,
			},
		})
		.collect();

	let edges = EDGES
		.iter()
		.map(|&(source, target, label)| FlowEdge {
			id: format!("e{source}-{target}"),
			source: source.into(),
			target: target.into(),
			label: label.map(Into::into),
			animated: true,
		})
		.collect();

	FlowData { nodes, edges }
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn flow_has_nine_steps_and_nine_connections() {
		let flow = campaign_flow();
		assert_eq!(flow.nodes.len(), 9);
		assert_eq!(flow.edges.len(), 9);
		assert!(flow.edges.iter().all(|e| e.animated));
	}

	#[test]
	fn ids_are_unique_and_edges_reference_known_nodes() {
		let flow = campaign_flow();
		let node_ids: HashSet<_> = flow.nodes.iter().map(|n| n.id.as_str()).collect();
		let edge_ids: HashSet<_> = flow.edges.iter().map(|e| e.id.as_str()).collect();
		assert_eq!(node_ids.len(), flow.nodes.len());
		assert_eq!(edge_ids.len(), flow.edges.len());
		for edge in &flow.edges {
			assert!(node_ids.contains(edge.source.as_str()), "{}", edge.id);
			assert!(node_ids.contains(edge.target.as_str()), "{}", edge.id);
		}
	}

	#[test]
	fn branch_edges_carry_yes_no_labels() {
		let flow = campaign_flow();
		let label = |id: &str| {
			flow.edges
				.iter()
				.find(|e| e.id == id)
				.and_then(|e| e.label.clone())
		};
		assert_eq!(label("e6-7").as_deref(), Some("No"));
		assert_eq!(label("e6-8").as_deref(), Some("Yes"));
		assert_eq!(label("e1-2"), None);
	}

	#[test]
	fn first_node_is_input_and_last_is_output() {
		let flow = campaign_flow();
		assert_eq!(flow.nodes[0].kind, NodeKind::Input);
		assert_eq!(flow.nodes[8].kind, NodeKind::Output);
		assert_eq!(flow.nodes[8].label, "📊 Log to CRM");
	}

	#[test]
	fn stats_are_the_five_fixed_figures() {
		let values: Vec<_> = CAMPAIGN_STATS.iter().map(|s| s.value).collect();
		assert_eq!(values, ["150", "142", "216", "47.9%", "68"]);
	}
}
