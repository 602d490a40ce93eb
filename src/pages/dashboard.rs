//! Dashboard page and the network view it shares with client pages.

use leptos::prelude::*;
use leptos_router::components::A;
use log::{info, warn};

use crate::components::layer;
use crate::components::network_graph::{
	LayoutConfig, NetworkGraphCanvas, NetworkState, NetworkTree, NodeDetailPanel, NoticeToast,
};
use crate::components::widgets::{
	AlertWidget, AttackWidget, BrowserStore, FloatingWidget, RecommendationsWidget, StatusWidget,
	TimelineWidget, WidgetBoard, WidgetId,
};
use crate::data::NetworkDirectory;

/// Directory provided by [`crate::App`], or the demo one outside of it.
pub(crate) fn directory() -> NetworkDirectory {
	use_context::<NetworkDirectory>().unwrap_or_else(NetworkDirectory::demo)
}

/// Network of the default client.
#[component]
pub fn Dashboard() -> impl IntoView {
	let directory = directory();
	match directory.default_client() {
		Some(client) => {
			view! { <NetworkView tree=directory.tree(client) layout=directory.layout.clone() /> }
				.into_any()
		}
		None => {
			view! {
				<div class="page-message">
					<h1>"No clients configured"</h1>
				</div>
			}
				.into_any()
		}
	}
}

/// Graph canvas with its overlays: header, floating widgets, detail panel
/// and notice toast. Each view owns its own editable session graph.
#[component]
pub fn NetworkView(tree: NetworkTree, layout: LayoutConfig) -> impl IntoView {
	info!("supply-graph: showing the network of {}", tree.client.name);
	let (hub, client) = (tree.hub.name.clone(), tree.client.name.clone());
	let state = RwSignal::new(NetworkState::from_tree(&tree, layout));
	let notice = RwSignal::new(None::<String>);
	let board = RwSignal::new(WidgetBoard::load(&BrowserStore::default()));

	view! {
		<div class="fullscreen-graph" style="position: fixed; inset: 0; overflow: hidden;">
			<NetworkGraphCanvas state=state fullscreen=true />
			<DashboardHeader hub=hub client=client board=board />
			<div
				class="widget-layer"
				style=format!(
					"position: absolute; inset: 0; z-index: {}; pointer-events: none;",
					layer::WIDGETS,
				)
			>
				<FloatingWidget id=WidgetId::Status board=board>
					<StatusWidget state=state />
				</FloatingWidget>
				<FloatingWidget id=WidgetId::Recommendations board=board>
					<RecommendationsWidget />
				</FloatingWidget>
				<FloatingWidget id=WidgetId::Timeline board=board>
					<TimelineWidget />
				</FloatingWidget>
				<FloatingWidget id=WidgetId::Alert board=board>
					<AlertWidget state=state />
				</FloatingWidget>
				<FloatingWidget id=WidgetId::Attack board=board>
					<AttackWidget />
				</FloatingWidget>
			</div>
			<NodeDetailPanel state=state notice=notice />
			<NoticeToast notice=notice />
		</div>
	}
}

#[component]
fn DashboardHeader(hub: String, client: String, board: RwSignal<WidgetBoard>) -> impl IntoView {
	let clients = directory()
		.clients
		.into_iter()
		.map(|c| {
			let href = format!("/client/{}", c.client.id);
			view! { <A href=href>{c.client.name}</A> }
		})
		.collect_view();

	let toggles = WidgetId::ALL
		.into_iter()
		.map(|id| {
			view! {
				<button
					class="widget-toggle"
					class:active=move || board.with(|b| b.is_visible(id))
					on:click=move |_| board.update(|b| b.toggle_visible(id))
				>
					{id.title()}
				</button>
			}
		})
		.collect_view();

	let on_reset = move |_| {
		board.update(|b| {
			if let Err(e) = b.reset_positions(&BrowserStore::default()) {
				warn!("supply-graph: widget layout not reset: {}", e);
			}
		})
	};

	view! {
		<header
			class="graph-overlay"
			style=format!(
				"position: absolute; top: 0; left: 0; right: 0; z-index: {}; padding: 12px 20px; color: #e2e8f0;",
				layer::HEADER,
			)
		>
			<h1>{hub}</h1>
			<p class="subtitle">
				{client} " · Click a partner for details. Drag to reposition. Scroll to zoom."
			</p>
			<nav class="clients">{clients}</nav>
			<div class="widget-controls">
				{toggles}
				<span class="widget-count">
					{move || format!("{} visible", board.with(WidgetBoard::visible_count))}
				</span>
				<button on:click=on_reset>"Reset positions"</button>
			</div>
		</header>
	}
}
