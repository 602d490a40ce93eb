//! Colours and visual style for the network canvas.

use super::types::{NodeRole, Severity};

/// RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `0.0..=1.0`.
	pub a: f64,
}

impl Color {
	/// Opaque colour.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Colour with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same colour with opacity `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Mix toward white (0.0 = unchanged, 1.0 = white).
	pub fn lighten(self, factor: f64) -> Self {
		self.lerp(Color::rgba(255, 255, 255, self.a), factor)
	}

	/// Mix toward black (0.0 = unchanged, 1.0 = black).
	pub fn darken(self, factor: f64) -> Self {
		self.lerp(Color::rgba(0, 0, 0, self.a), factor)
	}

	/// Linear mix toward `other`; `t` is clamped to `0.0..=1.0`.
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
		Self {
			r: mix(self.r, other.r),
			g: mix(self.g, other.g),
			b: mix(self.b, other.b),
			a: self.a + (other.a - self.a) * t,
		}
	}

	/// CSS colour string: hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fill colours per severity, plus the hub's brand colour.
#[derive(Clone, Debug)]
pub struct SeverityPalette {
	/// Hub fill while healthy.
	pub hub: Color,
	/// Healthy partners.
	pub healthy: Color,
	/// Partners needing attention.
	pub warning: Color,
	/// Partners in alert.
	pub critical: Color,
}

impl SeverityPalette {
	/// Fill for a node of `role` at `severity`.
	pub fn fill(&self, role: NodeRole, severity: Severity) -> Color {
		match (role, severity) {
			(NodeRole::Hub, Severity::Healthy) => self.hub,
			(_, Severity::Healthy) => self.healthy,
			(_, Severity::Warning) => self.warning,
			(_, Severity::Critical) => self.critical,
		}
	}
}

/// Canvas backdrop.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Gradient centre.
	pub color: Color,
	/// Gradient edge.
	pub color_secondary: Color,
	/// Grid line colour; alpha 0 disables the grid.
	pub grid: Color,
	/// Grid spacing in screen pixels.
	pub grid_spacing: f64,
}

/// Edge colours.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Default edge colour.
	pub color: Color,
	/// Colour of edges leading to an alert.
	pub emphasized: Color,
}

/// Node decorations.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Name text.
	pub label: Color,
	/// Description text.
	pub caption: Color,
	/// Ring around the selected node.
	pub selection_ring: Color,
	/// Ring around the hovered node.
	pub hover_ring: Color,
	/// Vulnerability badge fill.
	pub badge: Color,
	/// Radius amplitude of the critical pulse, as a fraction of the radius.
	pub pulse_intensity: f64,
	/// Pulse angular speed in radians per second.
	pub pulse_speed: f64,
}

/// Complete visual style of the canvas.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Canvas backdrop.
	pub background: BackgroundStyle,
	/// Edge colours.
	pub edge: EdgeStyle,
	/// Node decorations.
	pub node: NodeStyle,
	/// Fills per severity.
	pub severity: SeverityPalette,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: BackgroundStyle {
				color: Color::rgb(15, 23, 30),
				color_secondary: Color::rgb(22, 34, 42),
				grid: Color::rgba(0, 118, 111, 0.08),
				grid_spacing: 40.0,
			},
			edge: EdgeStyle {
				color: Color::rgba(0, 118, 111, 0.7),
				emphasized: Color::rgb(239, 68, 68),
			},
			node: NodeStyle {
				label: Color::rgba(255, 255, 255, 0.92),
				caption: Color::rgba(180, 195, 205, 0.8),
				selection_ring: Color::rgb(45, 212, 191),
				hover_ring: Color::rgba(255, 255, 255, 0.8),
				badge: Color::rgb(220, 38, 38),
				pulse_intensity: 0.12,
				pulse_speed: 4.0,
			},
			severity: SeverityPalette {
				hub: Color::rgb(0, 118, 111),
				healthy: Color::rgb(34, 160, 94),
				warning: Color::rgb(234, 179, 8),
				critical: Color::rgb(239, 68, 68),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_uses_hex_when_opaque() {
		assert_eq!(Color::rgb(239, 68, 68).to_css(), "#ef4444");
		assert_eq!(
			Color::rgba(0, 118, 111, 0.5).to_css(),
			"rgba(0, 118, 111, 0.5)"
		);
	}

	#[test]
	fn palette_matches_every_severity() {
		let theme = Theme::default();
		let p = &theme.severity;
		assert_eq!(p.fill(NodeRole::Hub, Severity::Healthy), p.hub);
		assert_eq!(p.fill(NodeRole::Hub, Severity::Critical), p.critical);
		assert_eq!(p.fill(NodeRole::Supplier, Severity::Healthy), p.healthy);
		assert_eq!(p.fill(NodeRole::Client, Severity::Warning), p.warning);
	}

	#[test]
	fn lighten_and_darken_hit_extremes() {
		let c = Color::rgb(100, 100, 100);
		assert_eq!(c.lighten(1.0), Color::rgb(255, 255, 255));
		assert_eq!(c.darken(1.0), Color::rgb(0, 0, 0));
		assert_eq!(c.lighten(0.0), c);
	}
}
