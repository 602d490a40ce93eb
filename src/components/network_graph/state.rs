//! Session state for the partner network and canvas interaction tracking.
//!
//! [`NetworkState`] is the editable graph a user works on during a session:
//! nodes can be selected, dragged, added, edited, connected and removed
//! (except the hub). Layout only runs when the tree is first flattened or a
//! node is added; a dragged node keeps its coordinate and its siblings stay
//! where they are.

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use super::flatten::{FlatGraph, apply_severity, flatten};
use super::layout::LayoutConfig;
use super::types::{
	CustomField, Edge, NetworkTree, NodeRole, NodeSpec, NodeStatus, PartnerNode, Position,
};

/// Rejected edit. The `Display` text is shown to the user as a notice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
	/// Attempt to remove the hub.
	#[error("{0} is the central organization and cannot be removed")]
	ProtectedHub(String),
	/// No node has the given id.
	#[error("no partner with id {0:?}")]
	UnknownNode(String),
	/// The id is already taken.
	#[error("a partner with id {0:?} already exists")]
	DuplicateId(String),
	/// Blank name.
	#[error("a partner needs a name")]
	MissingName,
	/// Edge from a node to itself.
	#[error("a partner cannot be connected to itself")]
	SelfLoop,
	/// The two nodes are already connected.
	#[error("{0} and {1} are already connected")]
	DuplicateEdge(String, String),
	/// The hub already has its client.
	#[error("{0} already serves a client; add partners below the client instead")]
	HubHasClient(String),
}

/// Field changes applied by [`NetworkState::update_node`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeEdit {
	/// New display name. Must not be blank.
	pub name: Option<String>,
	/// New description.
	pub description: Option<String>,
	/// New status.
	pub status: Option<NodeStatus>,
	/// `Some(None)` clears the count.
	pub vulnerabilities: Option<Option<u32>>,
	/// New last scan date.
	pub last_scan: Option<String>,
	/// Replaces the whole list.
	pub custom_fields: Option<Vec<CustomField>>,
}

/// Editable partner network for one session.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkState {
	nodes: Vec<PartnerNode>,
	edges: Vec<Edge>,
	hub_id: String,
	selected: Option<String>,
	layout: LayoutConfig,
	next_id: u64,
}

impl NetworkState {
	/// Session over an already flattened graph.
	pub fn new(graph: FlatGraph, layout: LayoutConfig) -> Self {
		Self {
			nodes: graph.nodes,
			edges: graph.edges,
			hub_id: graph.hub_id,
			selected: None,
			layout,
			next_id: 1,
		}
	}

	/// Flattens `tree` and starts a session over it.
	pub fn from_tree(tree: &NetworkTree, layout: LayoutConfig) -> Self {
		let graph = flatten(tree, &layout);
		debug!(
			"supply-graph: flattened {} nodes, {} edges",
			graph.nodes.len(),
			graph.edges.len()
		);
		Self::new(graph, layout)
	}

	/// Every node, parents before children.
	pub fn nodes(&self) -> &[PartnerNode] {
		&self.nodes
	}

	/// Every edge.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Id of the central organization.
	pub fn hub_id(&self) -> &str {
		&self.hub_id
	}

	/// Node with the given id.
	pub fn node(&self, id: &str) -> Option<&PartnerNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Whether `id` is the central organization.
	pub fn is_hub(&self, id: &str) -> bool {
		self.hub_id == id
	}

	/// Id of the selected node.
	pub fn selected_id(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Currently selected node, if it still exists.
	pub fn selected_node(&self) -> Option<&PartnerNode> {
		self.selected.as_deref().and_then(|id| self.node(id))
	}

	/// Selects `id`, replacing any previous selection. Selecting the node
	/// that is already selected clears the selection.
	pub fn select(&mut self, id: &str) {
		if self.node(id).is_none() {
			return;
		}
		if self.selected.as_deref() == Some(id) {
			self.selected = None;
		} else {
			debug!("supply-graph: selected {id}");
			self.selected = Some(id.to_string());
		}
	}

	/// Deselects whatever is selected.
	pub fn clear_selection(&mut self) {
		self.selected = None;
	}

	/// Node whose hit circle contains `point`. Overlapping hits resolve to
	/// the nearest centre.
	pub fn node_at(&self, point: Position, hit_radius: f64) -> Option<&str> {
		self.nodes
			.iter()
			.map(|n| (n, n.position.distance_to(point)))
			.filter(|(_, d)| *d < hit_radius)
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(n, _)| n.id.as_str())
	}

	/// Moves a single node. Returns `false` if the id is unknown.
	pub fn move_node(&mut self, id: &str, position: Position) -> bool {
		match self.nodes.iter_mut().find(|n| n.id == id) {
			Some(node) => {
				node.position = position;
				true
			}
			None => false,
		}
	}

	/// Removes a node and every edge touching it.
	pub fn remove_node(&mut self, id: &str) -> Result<PartnerNode, EditError> {
		let idx = self
			.nodes
			.iter()
			.position(|n| n.id == id)
			.ok_or_else(|| EditError::UnknownNode(id.to_string()))?;
		if self.is_hub(id) {
			return Err(EditError::ProtectedHub(self.nodes[idx].name.clone()));
		}

		let removed = self.nodes.remove(idx);
		self.edges.retain(|e| e.source != id && e.target != id);
		if self.selected.as_deref() == Some(id) {
			self.selected = None;
		}
		self.refresh_severity();
		debug!("supply-graph: removed {}", removed.name);
		Ok(removed)
	}

	/// Attaches a new node below `parent`, in the first free slot of the
	/// parent's child ring. Returns the new node's id.
	///
	/// The hub keeps exactly one client, so nothing can be added below it.
	pub fn add_node(&mut self, parent: &str, mut spec: NodeSpec) -> Result<String, EditError> {
		if spec.name.trim().is_empty() {
			return Err(EditError::MissingName);
		}
		let (anchor_pos, parent_role, parent_name) = self
			.node(parent)
			.map(|n| (n.position, n.role, n.name.clone()))
			.ok_or_else(|| EditError::UnknownNode(parent.to_string()))?;
		if parent_role == NodeRole::Hub {
			return Err(EditError::HubHasClient(parent_name));
		}

		if spec.id.is_empty() {
			spec.id = self.fresh_id();
		} else if self.node(&spec.id).is_some() {
			return Err(EditError::DuplicateId(spec.id));
		}

		let taken: Vec<Position> = self
			.edges
			.iter()
			.filter(|e| e.source == parent)
			.filter_map(|e| self.node(&e.target))
			.map(|n| n.position)
			.collect();
		let ring = self.layout.children_ring(parent_role);
		let position = ring.free_position(anchor_pos, &taken);

		let id = spec.id.clone();
		self.nodes
			.push(PartnerNode::from_spec(spec, parent_role.child(), position));
		self.edges.push(Edge::new(parent, &id));
		self.refresh_severity();
		debug!("supply-graph: added {id} below {parent}");
		Ok(id)
	}

	/// Applies `edit` to one node and re-derives severities.
	pub fn update_node(&mut self, id: &str, edit: NodeEdit) -> Result<(), EditError> {
		if matches!(&edit.name, Some(name) if name.trim().is_empty()) {
			return Err(EditError::MissingName);
		}
		let node = self
			.nodes
			.iter_mut()
			.find(|n| n.id == id)
			.ok_or_else(|| EditError::UnknownNode(id.to_string()))?;

		if let Some(name) = edit.name {
			node.name = name;
		}
		if let Some(description) = edit.description {
			node.description = description;
		}
		if let Some(status) = edit.status {
			node.status = status;
		}
		if let Some(vulnerabilities) = edit.vulnerabilities {
			node.vulnerabilities = vulnerabilities;
		}
		if let Some(last_scan) = edit.last_scan {
			node.last_scan = last_scan;
		}
		if let Some(fields) = edit.custom_fields {
			node.custom_fields = fields;
		}
		self.refresh_severity();
		Ok(())
	}

	/// Flips a node between alert and healthy.
	pub fn toggle_alert(&mut self, id: &str) -> Result<NodeStatus, EditError> {
		let current = self
			.node(id)
			.ok_or_else(|| EditError::UnknownNode(id.to_string()))?
			.status;
		let next = match current {
			NodeStatus::Alert => NodeStatus::Healthy,
			NodeStatus::Healthy | NodeStatus::Warning => NodeStatus::Alert,
		};
		self.update_node(
			id,
			NodeEdit {
				status: Some(next),
				..NodeEdit::default()
			},
		)?;
		Ok(next)
	}

	/// Adds a user-drawn edge. Cycles are allowed.
	pub fn connect(&mut self, source: &str, target: &str) -> Result<&Edge, EditError> {
		for id in [source, target] {
			if self.node(id).is_none() {
				return Err(EditError::UnknownNode(id.to_string()));
			}
		}
		if source == target {
			return Err(EditError::SelfLoop);
		}
		if self
			.edges
			.iter()
			.any(|e| e.source == source && e.target == target)
		{
			return Err(EditError::DuplicateEdge(
				source.to_string(),
				target.to_string(),
			));
		}
		self.edges.push(Edge::new(source, target));
		self.refresh_severity();
		let idx = self.edges.len() - 1;
		Ok(&self.edges[idx])
	}

	fn refresh_severity(&mut self) {
		apply_severity(&mut self.nodes, &mut self.edges, &self.hub_id);
	}

	fn fresh_id(&mut self) -> String {
		loop {
			let id = format!("node-{}", self.next_id);
			self.next_id += 1;
			if self.node(&id).is_none() {
				return id;
			}
		}
	}
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug)]
pub struct ViewTransform {
	/// Horizontal translation in screen pixels.
	pub x: f64,
	/// Vertical translation in screen pixels.
	pub y: f64,
	/// Zoom factor, clamped to `MIN_ZOOM..=MAX_ZOOM`.
	pub k: f64,
}

/// Smallest zoom factor.
pub const MIN_ZOOM: f64 = 0.5;
/// Largest zoom factor.
pub const MAX_ZOOM: f64 = 2.0;

impl ViewTransform {
	/// Identity zoom with the graph origin at the centre of a `width` x `height` viewport.
	pub fn centered(width: f64, height: f64) -> Self {
		Self {
			x: width / 2.0,
			y: height / 2.0,
			k: 1.0,
		}
	}

	/// Converts a screen point to graph coordinates.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> Position {
		Position::new((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// Zooms by `factor` keeping the screen point `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let k = (self.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = k;
	}
}

/// Tracks an in-progress node drag. A press that never moves is a click.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	/// Node being dragged; `None` when idle.
	pub node_id: Option<String>,
	/// Pointer x at press, screen pixels.
	pub start_x: f64,
	/// Pointer y at press, screen pixels.
	pub start_y: f64,
	/// Node position at press.
	pub node_start: Position,
	/// Set once the pointer leaves the click slop.
	pub moved: bool,
}

/// Tracks an in-progress canvas pan.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	/// Whether a pan is in progress.
	pub active: bool,
	/// Pointer x at press, screen pixels.
	pub start_x: f64,
	/// Pointer y at press, screen pixels.
	pub start_y: f64,
	/// Transform x at press.
	pub transform_start_x: f64,
	/// Transform y at press.
	pub transform_start_y: f64,
}

/// Screen-pixel distance a press may travel and still count as a click.
pub const CLICK_SLOP: f64 = 3.0;

/// Smoothed hover emphasis per node.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
	/// Node under the pointer.
	pub hovered: Option<String>,
	intensity: HashMap<String, f64>,
}

impl HoverState {
	/// Changes the hovered node.
	pub fn set(&mut self, id: Option<&str>) {
		if self.hovered.as_deref() != id {
			self.hovered = id.map(str::to_string);
		}
	}

	/// Eases every intensity toward 1 for the hovered node and 0 otherwise.
	pub fn tick(&mut self, dt: f64) {
		const FADE_IN: f64 = 8.0;
		const FADE_OUT: f64 = 5.0;

		if let Some(id) = &self.hovered {
			self.intensity.entry(id.clone()).or_insert(0.0);
		}
		let hovered = self.hovered.as_deref();
		self.intensity.retain(|id, value| {
			if Some(id.as_str()) == hovered {
				*value += (1.0 - *value) * (1.0 - (-FADE_IN * dt).exp());
				true
			} else {
				*value *= (-FADE_OUT * dt).exp();
				*value > 0.005
			}
		});
	}

	/// Current emphasis of `id`, in `0.0..=1.0`.
	pub fn intensity(&self, id: &str) -> f64 {
		self.intensity.get(id).copied().unwrap_or(0.0)
	}
}

/// Everything the canvas tracks besides the graph itself.
#[derive(Clone, Debug)]
pub struct CanvasView {
	/// Pan and zoom.
	pub transform: ViewTransform,
	/// Node drag in progress.
	pub drag: DragState,
	/// Canvas pan in progress.
	pub pan: PanState,
	/// Hover emphasis.
	pub hover: HoverState,
	/// Viewport width in CSS pixels.
	pub width: f64,
	/// Viewport height in CSS pixels.
	pub height: f64,
	/// Seconds since mount, drives dash flow and pulses.
	pub flow_time: f64,
}

impl CanvasView {
	/// Fresh view of a `width` x `height` viewport.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			transform: ViewTransform::centered(width, height),
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			flow_time: 0.0,
		}
	}

	/// Advances animation clocks by `dt` seconds.
	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
		self.hover.tick(dt);
	}

	/// Keeps the graph origin at the same relative spot after a resize.
	pub fn resize(&mut self, width: f64, height: f64) {
		if self.width > 0.0 && self.height > 0.0 {
			self.transform.x *= width / self.width;
			self.transform.y *= height / self.height;
		}
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::types::{Severity, SupplierSpec};

	fn state() -> NetworkState {
		let tree = NetworkTree {
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
		};
		NetworkState::from_tree(&tree, LayoutConfig::default())
	}

	#[test]
	fn hub_cannot_be_removed() {
		let mut s = state();
		let before = s.clone();
		let err = s.remove_node("cssdm").unwrap_err();
		assert_eq!(err, EditError::ProtectedHub("CSSDM".into()));
		assert!(err.to_string().contains("cannot be removed"));
		assert_eq!(s, before);
	}

	#[test]
	fn removing_a_node_drops_its_edges_and_selection() {
		let mut s = state();
		s.select("redhat");
		let removed = s.remove_node("redhat").unwrap();
		assert_eq!(removed.name, "Red Hat");
		assert!(s.node("redhat").is_none());
		assert!(s.edges().iter().all(|e| e.source != "redhat" && e.target != "redhat"));
		assert_eq!(s.selected_id(), None);
		// alert gone, so the client no longer bubbles
		assert_eq!(s.node("micrologic").unwrap().severity, Severity::Healthy);
	}

	#[test]
	fn unknown_removal_is_an_error() {
		let mut s = state();
		assert_eq!(
			s.remove_node("nope").unwrap_err(),
			EditError::UnknownNode("nope".into())
		);
	}

	#[test]
	fn selection_is_single_and_toggles() {
		let mut s = state();
		s.select("veeam");
		assert_eq!(s.selected_id(), Some("veeam"));
		s.select("redhat");
		assert_eq!(s.selected_id(), Some("redhat"));
		s.select("redhat");
		assert_eq!(s.selected_id(), None);
		s.select("missing");
		assert_eq!(s.selected_id(), None);
		s.select("ibm");
		s.clear_selection();
		assert!(s.selected_node().is_none());
	}

	#[test]
	fn dragging_moves_only_that_node() {
		let mut s = state();
		let before: Vec<Position> = s.nodes().iter().map(|n| n.position).collect();
		assert!(s.move_node("veeam", Position::new(999.0, -999.0)));
		for (node, old) in s.nodes().iter().zip(before) {
			if node.id == "veeam" {
				assert_eq!(node.position, Position::new(999.0, -999.0));
			} else {
				assert_eq!(node.position, old);
			}
		}
		assert!(!s.move_node("missing", Position::default()));
	}

	#[test]
	fn hit_test_prefers_nearest_node() {
		let mut s = state();
		s.move_node("veeam", Position::new(0.0, 0.0));
		s.move_node("ibm", Position::new(10.0, 0.0));
		assert_eq!(s.node_at(Position::new(7.0, 0.0), 20.0), Some("ibm"));
		assert_eq!(s.node_at(Position::new(2.0, 0.0), 20.0), Some("veeam"));
		assert_eq!(s.node_at(Position::new(5000.0, 5000.0), 20.0), None);
	}

	#[test]
	fn added_node_gets_next_ring_slot_without_reflow() {
		let mut s = state();
		let before: Vec<Position> = s.nodes().iter().map(|n| n.position).collect();
		let id = s
			.add_node("redhat", NodeSpec::new("", "OpenShift"))
			.unwrap();
		assert_eq!(id, "node-1");
		for (node, old) in s.nodes().iter().zip(before) {
			assert_eq!(node.position, old);
		}
		let added = s.node(&id).unwrap();
		let parent = s.node("redhat").unwrap().position;
		let radius = LayoutConfig::default().sub_suppliers.radius;
		assert!((added.position.distance_to(parent) - radius).abs() < 1e-9);
		assert!(s.edges().iter().any(|e| e.source == "redhat" && e.target == id));
	}

	fn assert_no_shared_positions(s: &NetworkState) {
		for (i, a) in s.nodes().iter().enumerate() {
			for b in &s.nodes()[i + 1..] {
				assert!(
					a.position.distance_to(b.position) > 1.0,
					"{} and {} overlap at {:?}",
					a.id,
					b.id,
					a.position
				);
			}
		}
	}

	#[test]
	fn add_after_remove_takes_a_free_slot() {
		let mut s = state();
		s.add_node("redhat", NodeSpec::new("a", "A")).unwrap();
		s.remove_node("ibm").unwrap();
		s.add_node("redhat", NodeSpec::new("b", "B")).unwrap();
		assert_no_shared_positions(&s);

		let parent = s.node("redhat").unwrap().position;
		let radius = LayoutConfig::default().sub_suppliers.radius;
		let b = s.node("b").unwrap().position;
		assert!((b.distance_to(parent) - radius).abs() < 1e-9);
	}

	#[test]
	fn repeated_adds_and_removes_never_overlap() {
		let mut s = state();
		for round in 0..4 {
			for k in 0..3 {
				s.add_node("veeam", NodeSpec::new(format!("n{round}-{k}"), "Partner"))
					.unwrap();
			}
			s.remove_node(&format!("n{round}-1")).unwrap();
			assert_no_shared_positions(&s);
		}
		// more children than one ring holds spill onto the next ring
		let parent = s.node("veeam").unwrap().position;
		let rings = LayoutConfig::default().sub_suppliers;
		assert!(
			s.nodes()
				.iter()
				.any(|n| (n.position.distance_to(parent) - rings.radius - rings.ring_step).abs() < 1e-9)
		);
	}

	#[test]
	fn hub_keeps_a_single_client() {
		let mut s = state();
		let before = s.clone();
		let err = s.add_node("cssdm", NodeSpec::new("acme", "Acme")).unwrap_err();
		assert_eq!(err, EditError::HubHasClient("CSSDM".into()));
		assert_eq!(s.nodes(), before.nodes());
		assert_eq!(s.edges(), before.edges());
		let clients = s.nodes().iter().filter(|n| n.role == NodeRole::Client).count();
		assert_eq!(clients, 1);
	}

	#[test]
	fn add_rejects_bad_input() {
		let mut s = state();
		assert_eq!(
			s.add_node("redhat", NodeSpec::new("x", "  ")).unwrap_err(),
			EditError::MissingName
		);
		assert_eq!(
			s.add_node("nowhere", NodeSpec::new("x", "X")).unwrap_err(),
			EditError::UnknownNode("nowhere".into())
		);
		assert_eq!(
			s.add_node("redhat", NodeSpec::new("veeam", "Veeam 2")).unwrap_err(),
			EditError::DuplicateId("veeam".into())
		);
	}

	#[test]
	fn alert_on_new_child_bubbles_to_parent() {
		let mut s = state();
		s.add_node(
			"veeam",
			NodeSpec::new("cirrus", "Cirrus BaaS").with_status(NodeStatus::Alert),
		)
		.unwrap();
		assert_eq!(s.node("veeam").unwrap().severity, Severity::Warning);
		assert_eq!(s.node("cirrus").unwrap().severity, Severity::Critical);
		assert!(s.edges().iter().any(|e| e.id == "e-veeam-cirrus" && e.emphasized));
	}

	#[test]
	fn toggle_alert_flips_status_and_severity() {
		let mut s = state();
		assert_eq!(s.toggle_alert("redhat").unwrap(), NodeStatus::Healthy);
		assert_eq!(s.node("micrologic").unwrap().severity, Severity::Healthy);
		assert_eq!(s.toggle_alert("veeam").unwrap(), NodeStatus::Alert);
		assert_eq!(s.node("veeam").unwrap().severity, Severity::Critical);
		assert_eq!(s.node("micrologic").unwrap().severity, Severity::Warning);
	}

	#[test]
	fn update_edits_fields() {
		let mut s = state();
		s.update_node(
			"veeam",
			NodeEdit {
				name: Some("Veeam Cloud".into()),
				vulnerabilities: Some(Some(3)),
				custom_fields: Some(vec![CustomField {
					key: "contract".into(),
					value: "2026".into(),
				}]),
				..NodeEdit::default()
			},
		)
		.unwrap();
		let node = s.node("veeam").unwrap();
		assert_eq!(node.name, "Veeam Cloud");
		assert_eq!(node.badge_count(), Some(3));
		assert_eq!(node.custom_fields.len(), 1);

		let blank = NodeEdit {
			name: Some(String::new()),
			..NodeEdit::default()
		};
		assert_eq!(s.update_node("veeam", blank), Err(EditError::MissingName));
	}

	#[test]
	fn connect_validates_endpoints() {
		let mut s = state();
		assert_eq!(s.connect("veeam", "veeam").unwrap_err(), EditError::SelfLoop);
		assert!(matches!(
			s.connect("veeam", "ghost").unwrap_err(),
			EditError::UnknownNode(_)
		));
		assert!(matches!(
			s.connect("micrologic", "veeam").unwrap_err(),
			EditError::DuplicateEdge(..)
		));
		let edge = s.connect("veeam", "ibm").unwrap();
		assert_eq!(edge.id, "e-veeam-ibm");
		// a cycle is accepted
		assert!(s.connect("ibm", "veeam").is_ok());
	}

	#[test]
	fn zoom_is_clamped_and_anchored() {
		let mut view = ViewTransform::centered(800.0, 600.0);
		let before = view.screen_to_graph(100.0, 100.0);
		view.zoom_at(100.0, 100.0, 1.5);
		let after = view.screen_to_graph(100.0, 100.0);
		assert!(before.distance_to(after) < 1e-9);
		for _ in 0..20 {
			view.zoom_at(0.0, 0.0, 2.0);
		}
		assert_eq!(view.k, MAX_ZOOM);
	}

	#[test]
	fn hover_fades_in_and_out() {
		let mut hover = HoverState::default();
		hover.set(Some("veeam"));
		for _ in 0..60 {
			hover.tick(0.016);
		}
		assert!(hover.intensity("veeam") > 0.95);
		hover.set(None);
		for _ in 0..120 {
			hover.tick(0.016);
		}
		assert_eq!(hover.intensity("veeam"), 0.0);
	}
}
