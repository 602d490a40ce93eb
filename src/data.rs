//! Partner directory: the hub organization and every client network it
//! watches over.
//!
//! The demo directory is embedded in the binary. A page may override it by
//! shipping a `<script id="network-data" type="application/json">` element
//! holding a [`NetworkDirectory`] (see `load_directory` in the crate root).

use serde::Deserialize;

use crate::components::network_graph::{
	Attachment, LayoutConfig, NetworkTree, NodeSpec, NodeStatus, SupplierSpec,
};

/// One client of the hub together with its supply chain.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ClientNetwork {
	/// The client node, flattened into the same JSON object.
	#[serde(flatten)]
	pub client: NodeSpec,
	/// Direct suppliers.
	#[serde(default)]
	pub suppliers: Vec<SupplierSpec>,
	/// Sub-suppliers declared by supplier id.
	#[serde(default)]
	pub attachments: Vec<Attachment>,
}

impl ClientNetwork {
	/// Client with an empty supply chain.
	pub fn new(client: NodeSpec) -> Self {
		Self {
			client,
			suppliers: Vec::new(),
			attachments: Vec::new(),
		}
	}

	/// Appends a direct supplier.
	pub fn with_supplier(mut self, supplier: SupplierSpec) -> Self {
		self.suppliers.push(supplier);
		self
	}

	/// Hangs `node` below the supplier `supplier`.
	pub fn with_attachment(mut self, supplier: &str, node: NodeSpec) -> Self {
		self.attachments.push(Attachment {
			supplier: supplier.to_string(),
			node,
		});
		self
	}
}

/// Everything the app can display.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NetworkDirectory {
	/// Central organization shared by every client.
	pub hub: NodeSpec,
	/// Clients in menu order.
	pub clients: Vec<ClientNetwork>,
	/// Geometry used for every network.
	#[serde(default)]
	pub layout: LayoutConfig,
}

impl NetworkDirectory {
	/// Parses a directory from JSON.
	pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(raw)
	}

	/// Client with the given id.
	pub fn client(&self, client_id: &str) -> Option<&ClientNetwork> {
		self.clients.iter().find(|c| c.client.id == client_id)
	}

	/// Client shown on the dashboard.
	pub fn default_client(&self) -> Option<&ClientNetwork> {
		self.clients.first()
	}

	/// Tree rooted at the hub for one client.
	pub fn tree_for(&self, client_id: &str) -> Option<NetworkTree> {
		self.client(client_id).map(|c| self.tree(c))
	}

	/// Tree rooted at the hub for `client`.
	pub fn tree(&self, client: &ClientNetwork) -> NetworkTree {
		NetworkTree {
			hub: self.hub.clone(),
			client: client.client.clone(),
			suppliers: client.suppliers.clone(),
			attachments: client.attachments.clone(),
		}
	}

	/// The embedded demo directory.
	pub fn demo() -> Self {
		let scan = "2026-10-16 06:00";
		let node = |id: &str, name: &str, description: &str| {
			NodeSpec::new(id, name)
				.with_description(description)
				.with_last_scan(scan)
		};

		let micrologic = ClientNetwork::new(node("micrologic", "Micrologic", "Managed IT services"))
			.with_supplier(
				SupplierSpec::new(node("veeam", "Veeam", "Backup"))
					.with_sub_supplier(node("cirrus-baas", "Cirrus BaaS", "Backup as a Service"))
					.with_sub_supplier(node("cloud-connect", "Cloud Connect", "Cloud connectivity")),
			)
			.with_supplier(
				SupplierSpec::new(
					node("redhat", "Red Hat", "OpenShift")
						.with_status(NodeStatus::Alert)
						.with_vulnerabilities(1),
				)
				.with_sub_supplier(node("cirrus-paas", "Cirrus PaaS", "Platform as a Service"))
				.with_sub_supplier(node("openshift", "OpenShift", "Container platform")),
			)
			.with_attachment("redhat", node("ibm-cloud", "IBM Cloud", "Hosting"));

		let zens = ClientNetwork::new(node("zens", "Zens Canada Corp.", "Engineering")).with_supplier(
			SupplierSpec::new(node("azure", "Microsoft Azure", "Cloud platform"))
				.with_sub_supplier(node("azure-services", "Cloud Services", "Hosted workloads"))
				.with_sub_supplier(
					node("active-directory", "Active Directory", "Identity")
						.with_status(NodeStatus::Warning),
				),
		);

		let inso = ClientNetwork::new(node("inso", "INSO INC", "Insurance brokerage")).with_supplier(
			SupplierSpec::new(node("aws", "AWS", "Cloud platform"))
				.with_sub_supplier(node("ec2", "EC2", "Compute"))
				.with_sub_supplier(node("s3", "S3 Storage", "Object storage")),
		);

		let coginov = ClientNetwork::new(node("coginov", "COGINOV inc.", "Software consulting"))
			.with_supplier(
				SupplierSpec::new(node("gcp", "Google Cloud", "Cloud platform"))
					.with_sub_supplier(node("compute-engine", "Compute Engine", "Compute"))
					.with_sub_supplier(node("cloud-storage", "Cloud Storage", "Object storage")),
			);

		Self {
			hub: node("cssdm", "CSSDM", "Central organization"),
			clients: vec![micrologic, zens, inso, coginov],
			layout: LayoutConfig::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::components::network_graph::{Severity, flatten};

	#[test]
	fn demo_trees_flatten_without_drops() {
		let directory = NetworkDirectory::demo();
		for client in &directory.clients {
			let tree = directory.tree(client);
			let declared = 2
				+ tree.suppliers.len()
				+ tree.suppliers.iter().map(|s| s.sub_suppliers.len()).sum::<usize>()
				+ tree.attachments.len();
			let graph = flatten(&tree, &directory.layout);
			assert_eq!(graph.nodes.len(), declared, "client {}", client.client.id);
			assert_eq!(graph.edges.len(), declared - 1);

			let ids: HashSet<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
			assert_eq!(ids.len(), graph.nodes.len());
		}
	}

	#[test]
	fn micrologic_bubbles_red_hat_alert() {
		let directory = NetworkDirectory::demo();
		let tree = directory.tree_for("micrologic").unwrap();
		let graph = flatten(&tree, &directory.layout);

		assert_eq!(graph.node("redhat").unwrap().severity, Severity::Critical);
		assert_eq!(graph.node("micrologic").unwrap().severity, Severity::Warning);
		assert_eq!(graph.node("cssdm").unwrap().severity, Severity::Healthy);
		assert_eq!(graph.node("veeam").unwrap().severity, Severity::Healthy);

		let emphasized: Vec<_> = graph.edges.iter().filter(|e| e.emphasized).collect();
		assert_eq!(emphasized.len(), 1);
		assert_eq!(emphasized[0].id, "e-micrologic-redhat");
	}

	#[test]
	fn default_client_is_first() {
		let directory = NetworkDirectory::demo();
		assert_eq!(directory.default_client().unwrap().client.id, "micrologic");
		assert!(directory.tree_for("nobody").is_none());
	}

	#[test]
	fn json_directory_with_layout_override() {
		let raw = r#"{
			"hub": { "id": "hq", "name": "HQ" },
			"clients": [{
				"id": "acme",
				"name": "Acme",
				"suppliers": [{ "id": "s1", "name": "Supplier", "status": "warning" }],
				"attachments": [{ "supplier": "s1", "id": "a1", "name": "Attached" }]
			}],
			"layout": { "client_offset": 250.0 }
		}"#;
		let directory = NetworkDirectory::from_json(raw).unwrap();
		assert_eq!(directory.layout.client_offset, 250.0);
		assert_eq!(directory.layout.suppliers, LayoutConfig::default().suppliers);

		let tree = directory.tree_for("acme").unwrap();
		assert_eq!(tree.hub.id, "hq");
		assert_eq!(tree.suppliers[0].node.status, NodeStatus::Warning);
		assert_eq!(tree.attachments[0].supplier, "s1");
	}

	#[test]
	fn unknown_status_rejects_directory() {
		let raw = r#"{ "hub": { "id": "hq", "name": "HQ", "status": "unknown" }, "clients": [] }"#;
		assert!(NetworkDirectory::from_json(raw).is_err());
	}
}
