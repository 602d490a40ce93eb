//! Radial ring layout for the hub-and-spoke partner network.
//!
//! Siblings are spread over a full circle around their parent:
//! `theta = i * 2π / n`. A lone child has no neighbour to space against, so
//! it is placed straight below its parent (`theta = π/2`, screen y grows
//! downward). When a parent has more children than one ring holds, the
//! extra children move to concentric rings further out.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Deserialize;

use super::types::{NodeRole, Position};

/// Angle of sibling `index` among `count` siblings.
pub fn ring_angle(index: usize, count: usize) -> f64 {
	if count <= 1 {
		return FRAC_PI_2;
	}
	index as f64 * TAU / count as f64
}

/// Position of sibling `index` among `count` siblings on a circle of
/// `radius` around `anchor`.
pub fn ring_position(index: usize, count: usize, anchor: Position, radius: f64) -> Position {
	let theta = ring_angle(index, count);
	Position::new(anchor.x + radius * theta.cos(), anchor.y + radius * theta.sin())
}

/// Where one sibling lands in a multi-ring arrangement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSlot {
	/// Zero-based ring, 0 being the innermost.
	pub ring: usize,
	/// Index within the ring.
	pub index: usize,
	/// Number of siblings sharing the ring.
	pub population: usize,
	/// Distance from the parent.
	pub radius: f64,
}

/// Concentric rings of bounded capacity.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RingLayout {
	/// Maximum siblings per ring. 0 means a single unbounded ring.
	pub capacity: usize,
	/// Radius of the innermost ring.
	pub radius: f64,
	/// Radius added for every further ring.
	pub ring_step: f64,
}

impl Default for RingLayout {
	fn default() -> Self {
		Self {
			capacity: 6,
			radius: 200.0,
			ring_step: 110.0,
		}
	}
}

impl RingLayout {
	/// Ring set with the given geometry.
	pub fn new(capacity: usize, radius: f64, ring_step: f64) -> Self {
		Self {
			capacity,
			radius,
			ring_step,
		}
	}

	/// Ring assignment of sibling `index` among `count` siblings.
	pub fn slot(&self, index: usize, count: usize) -> RingSlot {
		let count = count.max(index + 1);
		let capacity = if self.capacity == 0 {
			count
		} else {
			self.capacity
		};
		let ring = index / capacity;
		let first = ring * capacity;
		RingSlot {
			ring,
			index: index - first,
			population: capacity.min(count - first),
			radius: self.radius + ring as f64 * self.ring_step,
		}
	}

	/// Position of sibling `index` among `count` siblings around `anchor`.
	pub fn position(&self, index: usize, count: usize, anchor: Position) -> Position {
		let slot = self.slot(index, count);
		ring_position(slot.index, slot.population, anchor, slot.radius)
	}

	/// First slot around `anchor` that none of `taken` occupies. Slots are
	/// spaced as if every ring were full, so existing children never move
	/// and a freed slot is reused before a new one is opened.
	pub fn free_position(&self, anchor: Position, taken: &[Position]) -> Position {
		let count = taken.len() + 1;
		let capacity = if self.capacity == 0 {
			count
		} else {
			self.capacity
		};
		let full = RingLayout::new(capacity, self.radius, self.ring_step);
		let slots = count.div_ceil(capacity) * capacity;
		let candidate = |i: usize| full.position(i, slots, anchor);
		(0..count)
			.map(candidate)
			.find(|p| taken.iter().all(|t| t.distance_to(*p) >= SLOT_TOLERANCE))
			.unwrap_or_else(|| candidate(taken.len()))
	}
}

/// Distance under which a slot counts as occupied.
const SLOT_TOLERANCE: f64 = 1.0;

/// Geometry of the whole network. Every field has a default, so a partial
/// JSON object overrides only what it names.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
	/// Centre of the hub.
	pub hub: Position,
	/// Distance from the hub straight down to the client.
	pub client_offset: f64,
	/// Suppliers around the client.
	pub suppliers: RingLayout,
	/// Sub-suppliers around their supplier.
	pub sub_suppliers: RingLayout,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			hub: Position::new(0.0, -170.0),
			client_offset: 340.0,
			suppliers: RingLayout::default(),
			sub_suppliers: RingLayout::new(6, 90.0, 60.0),
		}
	}
}

impl LayoutConfig {
	/// Where the client sits, straight below the hub.
	pub fn client_position(&self) -> Position {
		Position::new(self.hub.x, self.hub.y + self.client_offset)
	}

	/// Ring used for the children of a node with the given role.
	pub fn children_ring(&self, parent: NodeRole) -> RingLayout {
		match parent {
			NodeRole::Hub => RingLayout::new(1, self.client_offset, self.client_offset),
			NodeRole::Client => self.suppliers.clone(),
			NodeRole::Supplier | NodeRole::SubSupplier => self.sub_suppliers.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < EPS
	}

	#[test]
	fn same_inputs_same_position() {
		let anchor = Position::new(12.5, -3.0);
		let a = ring_position(3, 7, anchor, 42.0);
		let b = ring_position(3, 7, anchor, 42.0);
		assert_eq!(a, b);
	}

	#[test]
	fn single_child_sits_below_anchor_at_radius() {
		let anchor = Position::new(100.0, 50.0);
		let pos = ring_position(0, 1, anchor, 80.0);
		assert!(pos.x.is_finite() && pos.y.is_finite());
		assert!(close(pos.distance_to(anchor), 80.0));
		assert!(close(pos.x, 100.0));
		assert!(close(pos.y, 130.0));
	}

	#[test]
	fn zero_count_does_not_divide_by_zero() {
		assert!(close(ring_angle(0, 0), FRAC_PI_2));
	}

	#[test]
	fn angles_are_evenly_spaced_over_full_circle() {
		for n in 2..12 {
			let angles: Vec<f64> = (0..n).map(|i| ring_angle(i, n)).collect();
			assert!(close(angles[0], 0.0));
			for pair in angles.windows(2) {
				assert!(close(pair[1] - pair[0], TAU / n as f64));
			}
			assert!(angles.iter().all(|&a| (0.0..TAU).contains(&a)));
		}
	}

	#[test]
	fn every_sibling_is_at_radius() {
		let anchor = Position::new(-20.0, 40.0);
		for i in 0..5 {
			let pos = ring_position(i, 5, anchor, 150.0);
			assert!(close(pos.distance_to(anchor), 150.0));
		}
	}

	#[test]
	fn overflow_moves_to_outer_ring_with_actual_population() {
		let rings = RingLayout::new(6, 100.0, 50.0);
		let inner = rings.slot(5, 8);
		assert_eq!((inner.ring, inner.index, inner.population), (0, 5, 6));
		assert!(close(inner.radius, 100.0));

		let outer = rings.slot(7, 8);
		assert_eq!((outer.ring, outer.index, outer.population), (1, 1, 2));
		assert!(close(outer.radius, 150.0));

		let anchor = Position::default();
		let pos = rings.position(6, 8, anchor);
		assert!(close(pos.distance_to(anchor), 150.0));
		assert!(close(pos.y, 0.0));
	}

	#[test]
	fn free_position_skips_occupied_slots() {
		let rings = RingLayout::new(4, 100.0, 50.0);
		let anchor = Position::new(10.0, 10.0);
		let first = rings.free_position(anchor, &[]);
		assert!(close(first.x, 110.0) && close(first.y, 10.0));

		let second = rings.free_position(anchor, &[first]);
		assert!(close(second.x, 10.0) && close(second.y, 110.0));

		// a freed slot is handed out again before a new one
		let third = rings.free_position(anchor, &[second]);
		assert_eq!(third, first);
	}

	#[test]
	fn free_position_opens_outer_ring_when_full() {
		let rings = RingLayout::new(2, 100.0, 50.0);
		let anchor = Position::default();
		let a = rings.free_position(anchor, &[]);
		let b = rings.free_position(anchor, &[a]);
		let c = rings.free_position(anchor, &[a, b]);
		assert!(close(c.distance_to(anchor), 150.0));
	}

	#[test]
	fn zero_capacity_keeps_one_ring() {
		let rings = RingLayout::new(0, 100.0, 50.0);
		let slot = rings.slot(9, 10);
		assert_eq!((slot.ring, slot.index, slot.population), (0, 9, 10));
	}

	#[test]
	fn partial_config_keeps_defaults() {
		let config: LayoutConfig = serde_json::from_str(r#"{ "client_offset": 400.0 }"#).unwrap();
		assert!(close(config.client_offset, 400.0));
		assert_eq!(config.suppliers, RingLayout::default());
		let client = config.client_position();
		assert!(close(client.y, config.hub.y + 400.0));
	}
}
