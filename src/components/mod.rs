//! UI components: the partner-network canvas and the floating widgets.

pub mod network_graph;
pub mod widgets;

/// `z-index` of the overlays stacked above the canvas, bottom to top.
pub(crate) mod layer {
	pub const HEADER: u32 = 10;
	pub const WIDGETS: u32 = 20;
	pub const DETAIL: u32 = 30;
	pub const TOAST: u32 = 40;
	/// Above everything while a widget is dragged.
	pub const DRAG_SHIELD: u32 = 1000;

	#[cfg(test)]
	mod tests {
		use super::*;

		#[test]
		fn overlays_stack_in_order() {
			let order = [HEADER, WIDGETS, DETAIL, TOAST, DRAG_SHIELD];
			assert!(order.windows(2).all(|w| w[0] < w[1]));
		}
	}
}
