//! supply-graph: Radial supply-chain network dashboard.
//!
//! Renders a hub organization, one of its clients, the client's suppliers
//! and their sub-suppliers on concentric rings, with alerts bubbling up the
//! tree, an editable session graph and floating widgets whose positions
//! persist across reloads.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod data;
mod pages;

pub use components::network_graph::{
	LayoutConfig, NetworkGraphCanvas, NetworkState, NetworkTree, NodeSpec, NodeStatus,
};
pub use data::{ClientNetwork, NetworkDirectory};

use crate::pages::client_detail::ClientDetail;
use crate::pages::dashboard::Dashboard;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("supply-graph: logging initialized");
}

/// Load the partner directory from a script element with id="network-data".
/// Expected format: JSON with { hub: {...}, clients: [...], layout?: {...} }
fn load_directory() -> Option<NetworkDirectory> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("network-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match NetworkDirectory::from_json(&json_text) {
		Ok(directory) => {
			info!(
				"supply-graph: loaded {} clients for {}",
				directory.clients.len(),
				directory.hub.name
			);
			Some(directory)
		}
		Err(e) => {
			warn!("supply-graph: failed to parse network data, using demo: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the directory from the DOM and routes between client networks.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let directory = load_directory().unwrap_or_else(|| {
		info!("supply-graph: no network data found, using demo directory");
		NetworkDirectory::demo()
	});
	provide_context(directory);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Supply Chain Network" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Dashboard />
				<Route path=path!("/client/:client_id") view=ClientDetail />
			</Routes>
		</Router>
	}
}
