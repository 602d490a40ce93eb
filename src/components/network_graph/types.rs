//! Partner-network data structures.
//!
//! Descriptor types (`NodeSpec`, `SupplierSpec`, `NetworkTree`) are the
//! static input, deserialized from JSON or built from the embedded demo
//! directory. `PartnerNode` and `Edge` are the flattened, positioned output
//! consumed by the renderer.

use serde::{Deserialize, Serialize};

/// Reported health of a partner. Deserialized from `"healthy"`, `"warning"`
/// or `"alert"`; anything else is a parse error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
	/// Nothing to report.
	#[default]
	Healthy,
	/// Needs attention.
	Warning,
	/// Reported compromised.
	Alert,
}

impl NodeStatus {
	/// Every status, in menu order.
	pub const ALL: [NodeStatus; 3] = [NodeStatus::Healthy, NodeStatus::Warning, NodeStatus::Alert];

	/// Wire name, as used in JSON and form values.
	pub fn as_str(self) -> &'static str {
		match self {
			NodeStatus::Healthy => "healthy",
			NodeStatus::Warning => "warning",
			NodeStatus::Alert => "alert",
		}
	}

	/// Inverse of [`NodeStatus::as_str`].
	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|s| s.as_str() == value)
	}

	/// Short label shown in the detail overlay.
	pub fn label(self) -> &'static str {
		match self {
			NodeStatus::Healthy => "Secure",
			NodeStatus::Warning => "Attention",
			NodeStatus::Alert => "Alert",
		}
	}
}

/// Visual class a node is painted with once alerts have bubbled up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
	/// No alert here or below.
	#[default]
	Healthy,
	/// Own warning, or an alert further down.
	Warning,
	/// Alert on the node or below it.
	Critical,
}

impl Severity {
	/// Resolve the rendered severity from a node's own status and whether any
	/// descendant is in alert.
	pub fn resolve(status: NodeStatus, descendant_alert: bool) -> Self {
		match status {
			NodeStatus::Alert => Severity::Critical,
			NodeStatus::Warning => Severity::Warning,
			NodeStatus::Healthy if descendant_alert => Severity::Warning,
			NodeStatus::Healthy => Severity::Healthy,
		}
	}
}

/// Position of a node in the hub-and-spoke tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRole {
	/// The central organization. Never deletable.
	Hub,
	/// The client the hub serves.
	Client,
	/// Direct supplier of the client.
	Supplier,
	/// Supplier of a supplier, at any depth.
	SubSupplier,
}

impl NodeRole {
	/// Role given to a node attached below a node of this role.
	pub fn child(self) -> Self {
		match self {
			NodeRole::Hub => NodeRole::Client,
			NodeRole::Client => NodeRole::Supplier,
			NodeRole::Supplier | NodeRole::SubSupplier => NodeRole::SubSupplier,
		}
	}
}

/// A 2D point in graph (world) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate, growing downward.
	pub y: f64,
}

impl Position {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance.
	pub fn distance_to(self, other: Position) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Free-form key/value annotation attached to a partner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
	/// Label.
	pub key: String,
	/// Value.
	pub value: String,
}

/// Static description of one partner, before layout.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NodeSpec {
	/// Identifier, unique within one tree. May be empty when adding a node
	/// interactively; an id is generated in that case.
	#[serde(default)]
	pub id: String,
	/// Display name.
	pub name: String,
	/// Own reported status.
	#[serde(default)]
	pub status: NodeStatus,
	/// Known vulnerability count, if scanned.
	#[serde(default)]
	pub vulnerabilities: Option<u32>,
	/// Short description shown under the name.
	#[serde(default)]
	pub description: String,
	/// Free-form date of the last scan.
	#[serde(default)]
	pub last_scan: String,
	/// Extra annotations, in display order.
	#[serde(default)]
	pub custom_fields: Vec<CustomField>,
}

impl NodeSpec {
	/// Healthy node with no details.
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			..Self::default()
		}
	}

	/// Sets the status.
	pub fn with_status(mut self, status: NodeStatus) -> Self {
		self.status = status;
		self
	}

	/// Sets the description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	/// Sets the vulnerability count.
	pub fn with_vulnerabilities(mut self, count: u32) -> Self {
		self.vulnerabilities = Some(count);
		self
	}

	/// Sets the last scan date.
	pub fn with_last_scan(mut self, last_scan: impl Into<String>) -> Self {
		self.last_scan = last_scan.into();
		self
	}

	/// Whether this node itself reports an alert.
	pub fn has_alert(&self) -> bool {
		self.status == NodeStatus::Alert
	}
}

/// A direct supplier of the client and its nested sub-suppliers.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SupplierSpec {
	/// The supplier itself.
	#[serde(flatten)]
	pub node: NodeSpec,
	/// Nested sub-suppliers.
	#[serde(default)]
	pub sub_suppliers: Vec<NodeSpec>,
}

impl SupplierSpec {
	/// Supplier with no sub-suppliers.
	pub fn new(node: NodeSpec) -> Self {
		Self {
			node,
			sub_suppliers: Vec::new(),
		}
	}

	/// Appends a sub-supplier.
	pub fn with_sub_supplier(mut self, node: NodeSpec) -> Self {
		self.sub_suppliers.push(node);
		self
	}
}

/// A sub-supplier declared outside its supplier, referencing it by id.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Attachment {
	/// Id of the supplier this node hangs from.
	pub supplier: String,
	/// The sub-supplier.
	#[serde(flatten)]
	pub node: NodeSpec,
}

/// Complete input for one render: hub -> client -> suppliers -> sub-suppliers.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NetworkTree {
	/// Central organization.
	pub hub: NodeSpec,
	/// The client the hub serves.
	pub client: NodeSpec,
	/// Direct suppliers of the client.
	#[serde(default)]
	pub suppliers: Vec<SupplierSpec>,
	/// Sub-suppliers hung from a supplier by id.
	#[serde(default)]
	pub attachments: Vec<Attachment>,
}

/// A positioned node ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct PartnerNode {
	/// Unique id.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Own reported status.
	pub status: NodeStatus,
	/// Known vulnerability count.
	pub vulnerabilities: Option<u32>,
	/// Short description.
	pub description: String,
	/// Date of the last scan.
	pub last_scan: String,
	/// Extra annotations.
	pub custom_fields: Vec<CustomField>,
	/// Ring the node sits on.
	pub role: NodeRole,
	/// Derived from `status` and descendants; see [`Severity::resolve`].
	pub severity: Severity,
	/// Centre in graph coordinates.
	pub position: Position,
}

impl PartnerNode {
	/// Places `spec` at `position`. Severity starts from the own status only.
	pub fn from_spec(spec: NodeSpec, role: NodeRole, position: Position) -> Self {
		Self {
			severity: Severity::resolve(spec.status, false),
			id: spec.id,
			name: spec.name,
			status: spec.status,
			vulnerabilities: spec.vulnerabilities,
			description: spec.description,
			last_scan: spec.last_scan,
			custom_fields: spec.custom_fields,
			role,
			position,
		}
	}

	/// Whether this node itself reports an alert.
	pub fn has_alert(&self) -> bool {
		self.status == NodeStatus::Alert
	}

	/// Vulnerability count worth badging, if any.
	pub fn badge_count(&self) -> Option<u32> {
		self.vulnerabilities.filter(|&n| n > 0)
	}
}

/// A parent -> child connection between two rendered nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	/// Unique within the graph; see [`Edge::new`].
	pub id: String,
	/// Parent id.
	pub source: String,
	/// Child id.
	pub target: String,
	/// Drawn in the alert colour with a flowing dash.
	pub emphasized: bool,
}

/// Escapes `-` and `\` so the `-` joining an edge id stays unambiguous.
fn escape_id(id: &str) -> String {
	id.replace('\\', "\\\\").replace('-', "\\-")
}

impl Edge {
	/// Edge from `source` to `target`, with id `e-{source}-{target}`. Dashes
	/// inside either id are escaped, so distinct pairs never share an id.
	pub fn new(source: &str, target: &str) -> Self {
		Self {
			id: format!("e-{}-{}", escape_id(source), escape_id(target)),
			source: source.to_string(),
			target: target.to_string(),
			emphasized: false,
		}
	}
}
