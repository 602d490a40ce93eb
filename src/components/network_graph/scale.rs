//! Zoom-dependent sizing for the network canvas.
//!
//! Sizes are given in world units and resolved per frame against the zoom
//! factor `k` into [`ScaledValues`], which the renderer and hit testing
//! share so a click always lands where a node is drawn.

/// How a size reacts to zoom.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant world-space size.
	World,
	/// Constant on-screen size.
	Screen,
	/// World-space size kept within `min_screen..=max_screen` pixels.
	Clamped {
		/// Smallest on-screen size in pixels.
		min_screen: f64,
		/// Largest on-screen size in pixels.
		max_screen: f64,
	},
}

impl ScaleBehavior {
	/// World-space value for `base` at zoom `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// Node sizing.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Partner node radius in world units.
	pub radius: f64,
	/// How `radius` reacts to zoom.
	pub radius_behavior: ScaleBehavior,
	/// Radius multiplier for the hub.
	pub hub_factor: f64,
	/// Extra hit slop added around the drawn radius.
	pub hit_padding: f64,
	/// Name font size in screen pixels.
	pub label_size: f64,
	/// Description font size in screen pixels.
	pub caption_size: f64,
}

/// Edge sizing.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Line width in screen pixels.
	pub line_width: f64,
	/// Line width of emphasized edges in screen pixels.
	pub emphasized_width: f64,
	/// Dash (on, off) in world units, used on emphasized edges.
	pub dash_pattern: (f64, f64),
	/// Dash travel speed in world units per second.
	pub flow_speed: f64,
}

/// Selection and hover ring sizing, in screen pixels.
#[derive(Clone, Debug)]
pub struct RingScaleConfig {
	/// Stroke width.
	pub width: f64,
	/// Gap between the node and the ring.
	pub offset: f64,
}

/// Sizing for every canvas element.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Node sizing.
	pub node: NodeScaleConfig,
	/// Edge sizing.
	pub edge: EdgeScaleConfig,
	/// Selection and hover rings.
	pub ring: RingScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 22.0,
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 12.0,
					max_screen: f64::INFINITY,
				},
				hub_factor: 1.4,
				hit_padding: 4.0,
				label_size: 12.0,
				caption_size: 10.0,
			},
			edge: EdgeScaleConfig {
				line_width: 1.5,
				emphasized_width: 2.0,
				dash_pattern: (5.0, 5.0),
				flow_speed: 18.0,
			},
			ring: RingScaleConfig {
				width: 2.0,
				offset: 4.0,
			},
		}
	}
}

/// Scale values resolved for one zoom level, all in world units.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Zoom factor the values were resolved for.
	pub k: f64,
	/// Partner node radius.
	pub node_radius: f64,
	/// Hub radius.
	pub hub_radius: f64,
	/// Radius used for hit testing.
	pub hit_radius: f64,
	/// CSS font for node names.
	pub label_font: String,
	/// CSS font for descriptions.
	pub caption_font: String,
	/// Edge line width.
	pub edge_width: f64,
	/// Emphasized edge line width.
	pub emphasized_width: f64,
	/// Dash (on, off) for emphasized edges.
	pub dash_pattern: (f64, f64),
	/// Ring stroke width.
	pub ring_width: f64,
	/// Gap between a node and its ring.
	pub ring_offset: f64,
}

impl ScaledValues {
	/// Resolves `config` at zoom `k`.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let node_radius = config.node.radius_behavior.apply(config.node.radius, k);
		let hub_radius = node_radius * config.node.hub_factor;
		Self {
			k,
			node_radius,
			hub_radius,
			hit_radius: hub_radius.max(node_radius) + config.node.hit_padding / k,
			label_font: format!("600 {}px sans-serif", config.node.label_size / k),
			caption_font: format!("{}px sans-serif", config.node.caption_size / k),
			edge_width: config.edge.line_width / k,
			emphasized_width: config.edge.emphasized_width / k,
			dash_pattern: config.edge.dash_pattern,
			ring_width: config.ring.width / k,
			ring_offset: config.ring.offset / k,
		}
	}

	/// Dash offset that makes emphasized edges flow from parent to child.
	pub fn dash_offset(&self, flow_time: f64, flow_speed: f64) -> f64 {
		-flow_time * flow_speed
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clamped_radius_never_shrinks_below_screen_minimum() {
		let config = ScaleConfig::default();
		let far = ScaledValues::new(&config, 0.5);
		assert_eq!(far.node_radius, 24.0);
		let near = ScaledValues::new(&config, 2.0);
		assert_eq!(near.node_radius, 22.0);
		assert!(near.hit_radius > near.hub_radius);
	}

	#[test]
	fn screen_behavior_divides_by_zoom() {
		assert_eq!(ScaleBehavior::Screen.apply(10.0, 2.0), 5.0);
		assert_eq!(ScaleBehavior::World.apply(10.0, 2.0), 10.0);
	}
}
