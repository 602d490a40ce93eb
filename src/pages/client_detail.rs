use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::dashboard::{NetworkView, directory};

/// Network of the client named by the `client_id` route parameter.
#[component]
pub fn ClientDetail() -> impl IntoView {
	let params = use_params_map();
	let directory = directory();

	move || {
		let client_id = params.with(|p| p.get("client_id")).unwrap_or_default();
		match directory.tree_for(&client_id) {
			Some(tree) => {
				view! { <NetworkView tree=tree layout=directory.layout.clone() /> }.into_any()
			}
			None => {
				view! {
					<div class="page-message">
						<h1>"Client not found"</h1>
						<p>{format!("No client is registered under \"{client_id}\".")}</p>
						<A href="/">"Back to the dashboard"</A>
					</div>
				}
					.into_any()
			}
		}
	}
}
