//! Flattens a supplier tree into positioned nodes and parent -> child edges.

use std::collections::{HashMap, HashSet};

use log::warn;

use super::layout::LayoutConfig;
use super::types::{Edge, NetworkTree, NodeRole, NodeSpec, PartnerNode, Position, Severity};

/// Flat, renderable form of a [`NetworkTree`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatGraph {
	/// Id of the central organization.
	pub hub_id: String,
	/// Every node, parents before children.
	pub nodes: Vec<PartnerNode>,
	/// Parent -> child connections.
	pub edges: Vec<Edge>,
}

impl FlatGraph {
	/// Node with the given id.
	pub fn node(&self, id: &str) -> Option<&PartnerNode> {
		self.nodes.iter().find(|n| n.id == id)
	}
}

/// Tracks emitted ids so every edge endpoint is known to exist.
struct Emitter<'a> {
	layout: &'a LayoutConfig,
	graph: FlatGraph,
	seen: HashSet<String>,
}

impl Emitter<'_> {
	fn push(&mut self, spec: &NodeSpec, role: NodeRole, position: Position) -> bool {
		if !self.seen.insert(spec.id.clone()) {
			warn!("supply-graph: duplicate node id {:?} dropped", spec.id);
			return false;
		}
		self.graph
			.nodes
			.push(PartnerNode::from_spec(spec.clone(), role, position));
		true
	}

	fn link(&mut self, source: &str, target: &str) {
		self.graph.edges.push(Edge::new(source, target));
	}

	fn position_of(&self, id: &str) -> Position {
		self.graph.node(id).map(|n| n.position).unwrap_or_default()
	}
}

/// Emits the hub, the client, the suppliers in source order, then each
/// supplier's sub-suppliers (nested ones before attachments). Attachments
/// naming an unknown supplier are dropped along with their edge.
pub fn flatten(tree: &NetworkTree, layout: &LayoutConfig) -> FlatGraph {
	let mut out = Emitter {
		layout,
		graph: FlatGraph {
			hub_id: tree.hub.id.clone(),
			..FlatGraph::default()
		},
		seen: HashSet::new(),
	};

	out.push(&tree.hub, NodeRole::Hub, layout.hub);
	let client_pos = layout.client_position();
	if out.push(&tree.client, NodeRole::Client, client_pos) {
		out.link(&tree.hub.id, &tree.client.id);
	} else {
		// Without a client nothing below it can be anchored.
		return finish(out.graph);
	}

	let mut attached: HashMap<&str, Vec<&NodeSpec>> = HashMap::new();
	for attachment in &tree.attachments {
		attached
			.entry(attachment.supplier.as_str())
			.or_default()
			.push(&attachment.node);
	}

	let supplier_count = tree.suppliers.len();
	let mut emitted = Vec::with_capacity(supplier_count);
	for (i, supplier) in tree.suppliers.iter().enumerate() {
		let position = out.layout.suppliers.position(i, supplier_count, client_pos);
		if out.push(&supplier.node, NodeRole::Supplier, position) {
			out.link(&tree.client.id, &supplier.node.id);
			emitted.push(supplier);
		}
	}

	for supplier in emitted {
		let id = supplier.node.id.as_str();
		let anchor = out.position_of(id);
		let children: Vec<&NodeSpec> = supplier
			.sub_suppliers
			.iter()
			.chain(attached.remove(id).unwrap_or_default())
			.collect();
		let count = children.len();
		for (i, child) in children.into_iter().enumerate() {
			let position = out.layout.sub_suppliers.position(i, count, anchor);
			if out.push(child, NodeRole::SubSupplier, position) {
				out.link(id, &child.id);
			}
		}
	}

	for (supplier, orphans) in attached {
		for orphan in orphans {
			warn!(
				"supply-graph: sub-supplier {:?} references unknown supplier {:?}, skipped",
				orphan.id, supplier
			);
		}
	}

	finish(out.graph)
}

fn finish(mut graph: FlatGraph) -> FlatGraph {
	apply_severity(&mut graph.nodes, &mut graph.edges, &graph.hub_id);
	graph
}

/// Recomputes every node's severity from its status and its descendants,
/// then marks edges leading into critical nodes. The hub is painted from
/// its own status only.
pub fn apply_severity(nodes: &mut [PartnerNode], edges: &mut [Edge], hub_id: &str) {
	let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
	for edge in edges.iter() {
		children
			.entry(edge.source.as_str())
			.or_default()
			.push(edge.target.as_str());
	}
	let alerting: HashSet<&str> = nodes
		.iter()
		.filter(|n| n.has_alert())
		.map(|n| n.id.as_str())
		.collect();

	let resolved: Vec<Severity> = nodes
		.iter()
		.map(|node| {
			let bubbles = node.id != hub_id
				&& has_alerting_descendant(&node.id, &children, &alerting);
			Severity::resolve(node.status, bubbles)
		})
		.collect();

	let critical: HashSet<String> = nodes
		.iter()
		.zip(&resolved)
		.filter(|(_, s)| **s == Severity::Critical)
		.map(|(n, _)| n.id.clone())
		.collect();
	for (node, severity) in nodes.iter_mut().zip(resolved) {
		node.severity = severity;
	}
	for edge in edges.iter_mut() {
		edge.emphasized = critical.contains(&edge.target);
	}
}

fn has_alerting_descendant(
	root: &str,
	children: &HashMap<&str, Vec<&str>>,
	alerting: &HashSet<&str>,
) -> bool {
	let mut visited: HashSet<&str> = HashSet::from([root]);
	let mut stack: Vec<&str> = children.get(root).cloned().unwrap_or_default();
	while let Some(id) = stack.pop() {
		if !visited.insert(id) {
			continue;
		}
		if alerting.contains(id) {
			return true;
		}
		if let Some(next) = children.get(id) {
			stack.extend(next.iter().copied());
		}
	}
	false
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::types::{Attachment, NodeStatus, SupplierSpec};

	fn micrologic_tree() -> NetworkTree {
		NetworkTree {
			hub: NodeSpec::new("cssdm", "CSSDM"),
			client: NodeSpec::new("micrologic", "Micrologic"),
			suppliers: vec![
				SupplierSpec::new(NodeSpec::new("veeam", "Veeam")),
				SupplierSpec::new(
					NodeSpec::new("redhat", "Red Hat").with_status(NodeStatus::Alert),
				)
				.with_sub_supplier(NodeSpec::new("ibm", "IBM Cloud")),
			],
			attachments: Vec::new(),
		}
	}

	fn severity_of(graph: &FlatGraph, id: &str) -> Severity {
		graph.node(id).unwrap().severity
	}

	fn assert_no_dangling_edges(graph: &FlatGraph) {
		for edge in &graph.edges {
			assert!(graph.node(&edge.source).is_some(), "dangling source {}", edge.source);
			assert!(graph.node(&edge.target).is_some(), "dangling target {}", edge.target);
		}
	}

	#[test]
	fn micrologic_example_end_to_end() {
		let graph = flatten(&micrologic_tree(), &LayoutConfig::default());

		let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
		assert_eq!(names, ["CSSDM", "Micrologic", "Veeam", "Red Hat", "IBM Cloud"]);

		let edges: Vec<(&str, &str)> = graph
			.edges
			.iter()
			.map(|e| (e.source.as_str(), e.target.as_str()))
			.collect();
		assert_eq!(
			edges,
			[
				("cssdm", "micrologic"),
				("micrologic", "veeam"),
				("micrologic", "redhat"),
				("redhat", "ibm"),
			]
		);

		assert_eq!(severity_of(&graph, "redhat"), Severity::Critical);
		assert_eq!(severity_of(&graph, "micrologic"), Severity::Warning);
		assert_eq!(severity_of(&graph, "veeam"), Severity::Healthy);
		assert_eq!(severity_of(&graph, "ibm"), Severity::Healthy);
		assert_eq!(severity_of(&graph, "cssdm"), Severity::Healthy);

		let emphasized: Vec<&str> = graph
			.edges
			.iter()
			.filter(|e| e.emphasized)
			.map(|e| e.id.as_str())
			.collect();
		assert_eq!(emphasized, ["e-micrologic-redhat"]);
		assert_no_dangling_edges(&graph);
	}

	#[test]
	fn nodes_are_placed_on_their_rings() {
		let layout = LayoutConfig::default();
		let graph = flatten(&micrologic_tree(), &layout);
		let client = graph.node("micrologic").unwrap().position;
		assert_eq!(graph.node("cssdm").unwrap().position, layout.hub);
		assert_eq!(client, layout.client_position());

		let veeam = graph.node("veeam").unwrap().position;
		assert!((veeam.distance_to(client) - layout.suppliers.radius).abs() < 1e-9);

		let redhat = graph.node("redhat").unwrap().position;
		let ibm = graph.node("ibm").unwrap().position;
		assert!((ibm.distance_to(redhat) - layout.sub_suppliers.radius).abs() < 1e-9);
		// lone sub-supplier hangs straight below its supplier
		assert!((ibm.x - redhat.x).abs() < 1e-9);
		assert!(ibm.y > redhat.y);
	}

	#[test]
	fn orphaned_attachment_is_skipped() {
		let mut tree = micrologic_tree();
		tree.attachments.push(Attachment {
			supplier: "veeam".into(),
			node: NodeSpec::new("cirrus", "Cirrus BaaS"),
		});
		tree.attachments.push(Attachment {
			supplier: "nobody".into(),
			node: NodeSpec::new("ghost", "Ghost Corp"),
		});

		let graph = flatten(&tree, &LayoutConfig::default());
		assert!(graph.node("cirrus").is_some());
		assert!(graph.node("ghost").is_none());
		assert!(graph.edges.iter().any(|e| e.id == "e-veeam-cirrus"));
		assert!(graph.edges.iter().all(|e| e.target != "ghost"));
		assert_no_dangling_edges(&graph);
	}

	#[test]
	fn duplicate_ids_never_produce_dangling_edges() {
		let mut tree = micrologic_tree();
		tree.suppliers.push(
			SupplierSpec::new(NodeSpec::new("veeam", "Veeam again"))
				.with_sub_supplier(NodeSpec::new("extra", "Extra")),
		);

		let graph = flatten(&tree, &LayoutConfig::default());
		assert_eq!(graph.nodes.iter().filter(|n| n.id == "veeam").count(), 1);
		assert_eq!(graph.node("veeam").unwrap().name, "Veeam");
		assert!(graph.node("extra").is_none());
		assert_eq!(graph.edges.len(), 4);
		assert_no_dangling_edges(&graph);
	}

	#[test]
	fn alert_deep_in_tree_warns_every_non_hub_ancestor() {
		let tree = NetworkTree {
			hub: NodeSpec::new("hub", "Hub"),
			client: NodeSpec::new("client", "Client"),
			suppliers: vec![
				SupplierSpec::new(NodeSpec::new("a", "A")).with_sub_supplier(
					NodeSpec::new("a1", "A1").with_status(NodeStatus::Alert),
				),
				SupplierSpec::new(NodeSpec::new("b", "B")),
			],
			attachments: Vec::new(),
		};
		let graph = flatten(&tree, &LayoutConfig::default());
		assert_eq!(severity_of(&graph, "a1"), Severity::Critical);
		assert_eq!(severity_of(&graph, "a"), Severity::Warning);
		assert_eq!(severity_of(&graph, "client"), Severity::Warning);
		assert_eq!(severity_of(&graph, "b"), Severity::Healthy);
		assert_eq!(severity_of(&graph, "hub"), Severity::Healthy);
	}

	#[test]
	fn severity_survives_cycles() {
		let mut nodes = vec![
			PartnerNode::from_spec(NodeSpec::new("x", "X"), NodeRole::Supplier, Position::default()),
			PartnerNode::from_spec(NodeSpec::new("y", "Y"), NodeRole::Supplier, Position::default()),
		];
		let mut edges = vec![Edge::new("x", "y"), Edge::new("y", "x")];
		apply_severity(&mut nodes, &mut edges, "hub");
		assert!(nodes.iter().all(|n| n.severity == Severity::Healthy));
	}
}
