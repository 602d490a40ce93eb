use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback for unknown paths.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page-message">
			<h1>"Page not found"</h1>
			<A href="/">"Back to the dashboard"</A>
		</div>
	}
}
