//! Visibility, minimised state and positions of the floating widgets.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::store::{LayoutStore, StoreError, WidgetOffset, WidgetPositions, default_positions};

/// Floating widgets available on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetId {
	/// Severity counts.
	Status,
	/// Hardening suggestions.
	Recommendations,
	/// Recent events.
	Timeline,
	/// Partners in alert.
	Alert,
	/// Scripted attack replay.
	Attack,
}

impl WidgetId {
	/// Every widget, in header order.
	pub const ALL: [WidgetId; 5] = [
		WidgetId::Status,
		WidgetId::Recommendations,
		WidgetId::Timeline,
		WidgetId::Alert,
		WidgetId::Attack,
	];

	/// Key used in the persisted layout.
	pub fn as_str(self) -> &'static str {
		match self {
			WidgetId::Status => "status",
			WidgetId::Recommendations => "recommendations",
			WidgetId::Timeline => "timeline",
			WidgetId::Alert => "alert",
			WidgetId::Attack => "attack",
		}
	}

	/// Heading shown in the widget's title bar and header toggle.
	pub fn title(self) -> &'static str {
		match self {
			WidgetId::Status => "System status",
			WidgetId::Recommendations => "Recommendations",
			WidgetId::Timeline => "Timeline",
			WidgetId::Alert => "Active alerts",
			WidgetId::Attack => "Attack replay",
		}
	}

	fn visible_by_default(self) -> bool {
		match self {
			WidgetId::Recommendations | WidgetId::Timeline => true,
			WidgetId::Status | WidgetId::Alert | WidgetId::Attack => false,
		}
	}
}

/// Widget layout configuration, passed down the view tree explicitly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidgetBoard {
	visible: BTreeMap<WidgetId, bool>,
	minimized: BTreeMap<WidgetId, bool>,
	positions: WidgetPositions,
}

impl Default for WidgetBoard {
	fn default() -> Self {
		Self::with_positions(default_positions())
	}
}

impl WidgetBoard {
	/// Default visibility with the given positions.
	pub fn with_positions(positions: WidgetPositions) -> Self {
		Self {
			visible: WidgetId::ALL
				.into_iter()
				.map(|id| (id, id.visible_by_default()))
				.collect(),
			minimized: WidgetId::ALL.into_iter().map(|id| (id, false)).collect(),
			positions,
		}
	}

	/// Board with positions restored from `store`.
	pub fn load(store: &impl LayoutStore) -> Self {
		Self::with_positions(store.load())
	}

	/// Whether `id` is shown.
	pub fn is_visible(&self, id: WidgetId) -> bool {
		self.visible.get(&id).copied().unwrap_or(false)
	}

	/// Whether `id` is collapsed to its title bar.
	pub fn is_minimized(&self, id: WidgetId) -> bool {
		self.minimized.get(&id).copied().unwrap_or(false)
	}

	/// Shows or hides `id`.
	pub fn toggle_visible(&mut self, id: WidgetId) {
		let entry = self.visible.entry(id).or_insert(false);
		*entry = !*entry;
	}

	/// Collapses or expands `id` to its title bar.
	pub fn toggle_minimized(&mut self, id: WidgetId) {
		let entry = self.minimized.entry(id).or_insert(false);
		*entry = !*entry;
	}

	/// Number of widgets currently shown.
	pub fn visible_count(&self) -> usize {
		self.visible.values().filter(|v| **v).count()
	}

	/// Saved offset of `id`, or its default when the saved map lacks it.
	pub fn position(&self, id: WidgetId) -> WidgetOffset {
		self.positions
			.get(id.as_str())
			.copied()
			.or_else(|| default_positions().get(id.as_str()).copied())
			.unwrap_or_default()
	}

	/// Every saved offset.
	pub fn positions(&self) -> &WidgetPositions {
		&self.positions
	}

	/// Records where a drag ended and persists the whole map once.
	pub fn drag_stop(
		&mut self,
		id: WidgetId,
		offset: WidgetOffset,
		store: &impl LayoutStore,
	) -> Result<(), StoreError> {
		self.positions.insert(id.as_str().to_string(), offset);
		debug!("supply-graph: {} dropped at ({}, {})", id.as_str(), offset.x, offset.y);
		store.save(&self.positions)
	}

	/// Restores and persists the default layout.
	pub fn reset_positions(&mut self, store: &impl LayoutStore) -> Result<(), StoreError> {
		self.positions = default_positions();
		store.save(&self.positions)
	}
}
