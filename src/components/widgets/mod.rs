//! Floating dashboard widgets whose positions survive reloads.

mod board;
mod panel;
mod replay;
mod store;

pub use board::{WidgetBoard, WidgetId};
pub use panel::{
	AlertWidget, AttackWidget, FloatingWidget, RecommendationsWidget, StatusWidget, TimelineWidget,
};
pub use replay::{ATTACK_SCRIPT, EventLevel, Replay, ReplayEvent};
pub use store::{
	BrowserStore, LAYOUT_KEY, LayoutStore, MemoryStore, StoreError, WidgetOffset,
	WidgetPositions, default_positions, parse_layout,
};
