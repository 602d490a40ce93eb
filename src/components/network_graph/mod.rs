//! Radial partner-network visualization.
//!
//! Positions a hub organization, its client, the client's suppliers and
//! their sub-suppliers on concentric rings and renders them on a canvas:
//! - Deterministic ring layout (no physics)
//! - Alert severity bubbling from a partner up to its ancestors
//! - Click to select, drag to reposition, scroll to zoom, drag to pan
//! - Detail overlay with quick edits and a protected hub
//!
//! # Example
//!
//! ```ignore
//! use supply_graph::{LayoutConfig, NetworkGraphCanvas, NetworkState, NetworkTree};
//!
//! let state = RwSignal::new(NetworkState::from_tree(&tree, LayoutConfig::default()));
//! view! { <NetworkGraphCanvas state=state fullscreen=true /> }
//! ```

mod component;
mod detail;
pub mod flatten;
pub mod layout;
mod render;
pub mod scale;
pub mod state;
pub mod theme;
pub mod types;

pub use component::NetworkGraphCanvas;
pub use detail::{NodeDetailPanel, NoticeToast};
pub use flatten::{FlatGraph, flatten};
pub use layout::{LayoutConfig, RingLayout, ring_position};
pub use state::{EditError, NetworkState, NodeEdit};
pub use types::{
	Attachment, CustomField, Edge, NetworkTree, NodeRole, NodeSpec, NodeStatus, PartnerNode,
	Position, Severity, SupplierSpec,
};
