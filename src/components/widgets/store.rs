//! Persistence of floating-widget positions.
//!
//! Positions are saved as one JSON object keyed by widget id and are always
//! overwritten whole. There is no schema version: anything unreadable falls
//! back to the default layout.

use std::cell::RefCell;
use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key holding the saved layout.
pub const LAYOUT_KEY: &str = "widget-positions";

/// Pixel offset of a floating widget inside the widget layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetOffset {
	/// Pixels from the left edge.
	pub x: f64,
	/// Pixels from the top edge.
	pub y: f64,
}

impl WidgetOffset {
	/// Offset at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Saved offsets keyed by widget id.
pub type WidgetPositions = BTreeMap<String, WidgetOffset>;

/// Failure to persist the layout. Reads never fail; they fall back to defaults.
#[derive(Debug, Error)]
pub enum StoreError {
	/// No local storage in this host.
	#[error("layout storage is unavailable")]
	Unavailable,
	/// The layout could not be serialized.
	#[error("failed to encode layout: {0}")]
	Encode(#[from] serde_json::Error),
	/// The storage rejected the write.
	#[error("failed to write layout: {0}")]
	Write(String),
}

/// Default offsets, used when nothing valid has been saved.
pub fn default_positions() -> WidgetPositions {
	[
		("status", WidgetOffset::new(20.0, 80.0)),
		("recommendations", WidgetOffset::new(540.0, 80.0)),
		("timeline", WidgetOffset::new(20.0, 500.0)),
		("alert", WidgetOffset::new(20.0, 280.0)),
		("attack", WidgetOffset::new(1100.0, 500.0)),
	]
	.into_iter()
	.map(|(k, v)| (k.to_string(), v))
	.collect()
}

/// Decodes a saved layout, falling back to [`default_positions`] when the
/// value is missing, empty or not a `{id: {x, y}}` object.
pub fn parse_layout(raw: Option<&str>) -> WidgetPositions {
	let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
		return default_positions();
	};
	match serde_json::from_str::<WidgetPositions>(raw) {
		Ok(positions) => positions,
		Err(e) => {
			warn!("supply-graph: ignoring saved widget layout: {}", e);
			default_positions()
		}
	}
}

/// Backend holding the serialized layout.
pub trait LayoutStore {
	/// Raw saved value, if any.
	fn read(&self) -> Option<String>;

	/// Replaces the saved value.
	fn write(&self, raw: &str) -> Result<(), StoreError>;

	/// Saved positions, or the defaults when missing or unreadable.
	fn load(&self) -> WidgetPositions {
		parse_layout(self.read().as_deref())
	}

	/// Persists the whole map.
	fn save(&self, positions: &WidgetPositions) -> Result<(), StoreError> {
		let raw = serde_json::to_string(positions)?;
		self.write(&raw)
	}
}

/// `window.localStorage` under a fixed key.
#[derive(Clone, Debug)]
pub struct BrowserStore {
	key: String,
}

impl BrowserStore {
	/// Store under the given storage key.
	pub fn new(key: impl Into<String>) -> Self {
		Self { key: key.into() }
	}

	fn storage() -> Option<web_sys::Storage> {
		web_sys::window()?.local_storage().ok()?
	}
}

impl Default for BrowserStore {
	fn default() -> Self {
		Self::new(LAYOUT_KEY)
	}
}

impl LayoutStore for BrowserStore {
	fn read(&self) -> Option<String> {
		Self::storage()?.get_item(&self.key).ok()?
	}

	fn write(&self, raw: &str) -> Result<(), StoreError> {
		let storage = Self::storage().ok_or(StoreError::Unavailable)?;
		storage
			.set_item(&self.key, raw)
			.map_err(|e| StoreError::Write(format!("{e:?}")))
	}
}

/// In-memory backend for non-browser hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
	value: RefCell<Option<String>>,
}

impl MemoryStore {
	/// Store already holding `raw`.
	pub fn with_value(raw: impl Into<String>) -> Self {
		Self {
			value: RefCell::new(Some(raw.into())),
		}
	}
}

impl LayoutStore for MemoryStore {
	fn read(&self) -> Option<String> {
		self.value.borrow().clone()
	}

	fn write(&self, raw: &str) -> Result<(), StoreError> {
		*self.value.borrow_mut() = Some(raw.to_string());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_or_empty_value_uses_defaults() {
		assert_eq!(parse_layout(None), default_positions());
		assert_eq!(parse_layout(Some("")), default_positions());
		assert_eq!(parse_layout(Some("   ")), default_positions());
		assert_eq!(MemoryStore::default().load(), default_positions());
	}

	#[test]
	fn corrupted_value_uses_defaults() {
		for raw in ["{not json", "null", "[1, 2]", r#"{"status": "left"}"#, "42"] {
			assert_eq!(parse_layout(Some(raw)), default_positions(), "input {raw:?}");
		}
	}

	#[test]
	fn valid_value_is_used_verbatim() {
		let positions = parse_layout(Some(r#"{"status": {"x": 1.5, "y": 2.0}}"#));
		assert_eq!(positions.len(), 1);
		assert_eq!(positions["status"], WidgetOffset::new(1.5, 2.0));
	}

	#[test]
	fn save_overwrites_whole_map() {
		let store = MemoryStore::with_value(r#"{"legacy": {"x": 9.0, "y": 9.0}}"#);
		let mut positions = default_positions();
		positions.insert("status".into(), WidgetOffset::new(300.0, 40.0));
		store.save(&positions).unwrap();
		store.save(&positions).unwrap();

		let loaded = store.load();
		assert_eq!(loaded, positions);
		assert!(!loaded.contains_key("legacy"));
	}
}
