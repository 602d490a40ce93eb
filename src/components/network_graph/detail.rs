//! Selection overlay: details of the selected partner, quick edits, and the
//! notice toast used to surface rejected edits.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::debug;

use super::state::{NetworkState, NodeEdit};
use super::types::{NodeRole, NodeSpec, NodeStatus, PartnerNode, Severity};
use crate::components::layer;

fn severity_class(severity: Severity) -> &'static str {
	match severity {
		Severity::Healthy => "severity-healthy",
		Severity::Warning => "severity-warning",
		Severity::Critical => "severity-critical",
	}
}

fn role_label(role: NodeRole) -> &'static str {
	match role {
		NodeRole::Hub => "Organization",
		NodeRole::Client => "Client",
		NodeRole::Supplier => "Supplier",
		NodeRole::SubSupplier => "Sub-supplier",
	}
}

/// Details of the selected node. Renders nothing while nothing is selected.
#[component]
pub fn NodeDetailPanel(
	state: RwSignal<NetworkState>,
	notice: RwSignal<Option<String>>,
) -> impl IntoView {
	move || {
		let node = state.with(|s| s.selected_node().cloned())?;
		Some(view! { <NodeDetailCard node=node state=state notice=notice /> })
	}
}

#[component]
fn NodeDetailCard(
	node: PartnerNode,
	state: RwSignal<NetworkState>,
	notice: RwSignal<Option<String>>,
) -> impl IntoView {
	let (toggle_id, delete_id) = (node.id.clone(), node.id.clone());

	let on_toggle = move |_| {
		if let Some(Err(e)) = state.try_update(|s| s.toggle_alert(&toggle_id)) {
			notice.set(Some(e.to_string()));
		}
	};
	let on_delete = move |_| match state.try_update(|s| s.remove_node(&delete_id)) {
		Some(Ok(removed)) => notice.set(Some(format!("{} removed", removed.name))),
		Some(Err(e)) => notice.set(Some(e.to_string())),
		None => {}
	};
	let on_close = move |_| state.update(|s| s.clear_selection());

	let fields = node
		.custom_fields
		.iter()
		.map(|f| {
			view! {
				<li>
					<span class="field-key">{f.key.clone()}</span>
					<span class="field-value">{f.value.clone()}</span>
				</li>
			}
		})
		.collect_view();

	view! {
		<div
			class=format!("node-detail {}", severity_class(node.severity))
			style=format!(
				"position: absolute; top: 96px; right: 16px; z-index: {}; width: 300px; \
				 max-height: calc(100vh - 120px); overflow-y: auto; padding: 12px; \
				 background: rgba(15, 23, 42, 0.95); color: #e2e8f0; border-radius: 8px;",
				layer::DETAIL,
			)
		>
			<div class="node-detail-header">
				<h3>{node.name.clone()}</h3>
				<button class="close" title="Close" on:click=on_close>
					"✕"
				</button>
			</div>
			<p class="role">{role_label(node.role)}</p>
			<p class="description">{node.description.clone()}</p>
			<dl>
				<dt>"Status"</dt>
				<dd class=severity_class(node.severity)>{node.status.label()}</dd>
				{(!node.last_scan.is_empty())
					.then(|| {
						view! {
							<dt>"Last scan"</dt>
							<dd>{node.last_scan.clone()}</dd>
						}
					})}
			</dl>
			{node
				.badge_count()
				.map(|count| {
					view! { <div class="vulnerabilities">{format!("{count} vulnerability(ies) detected")}</div> }
				})}
			{(!node.custom_fields.is_empty()).then(|| view! { <ul class="custom-fields">{fields}</ul> })}
			<div class="node-detail-actions">
				<button on:click=on_toggle>
					{if node.status == NodeStatus::Alert { "Clear alert" } else { "Raise alert" }}
				</button>
				<button class="danger" on:click=on_delete>
					"Remove"
				</button>
			</div>
			<EditNodeForm node=node.clone() state=state notice=notice />
			<ConnectForm source=node.id.clone() state=state notice=notice />
			{(node.role != NodeRole::Hub)
				.then(|| view! { <AddNodeForm parent=node.id.clone() state=state notice=notice /> })}
		</div>
	}
}

fn status_options() -> impl IntoView {
	NodeStatus::ALL
		.into_iter()
		.map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
		.collect_view()
}

/// Edits the selected partner's name, description, status and count.
#[component]
fn EditNodeForm(
	node: PartnerNode,
	state: RwSignal<NetworkState>,
	notice: RwSignal<Option<String>>,
) -> impl IntoView {
	let id = node.id.clone();
	let (name, set_name) = signal(node.name);
	let (description, set_description) = signal(node.description);
	let (status, set_status) = signal(node.status);
	let (count, set_count) = signal(node.vulnerabilities.map(|n| n.to_string()).unwrap_or_default());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let count = count.get_untracked();
		let count = count.trim();
		let vulnerabilities = if count.is_empty() {
			None
		} else {
			match count.parse::<u32>() {
				Ok(n) => Some(n),
				Err(_) => {
					notice.set(Some(format!("{count:?} is not a vulnerability count")));
					return;
				}
			}
		};
		let edit = NodeEdit {
			name: Some(name.get_untracked().trim().to_string()),
			description: Some(description.get_untracked().trim().to_string()),
			status: Some(status.get_untracked()),
			vulnerabilities: Some(vulnerabilities),
			..NodeEdit::default()
		};
		if let Some(Err(e)) = state.try_update(|s| s.update_node(&id, edit)) {
			notice.set(Some(e.to_string()));
		}
	};

	view! {
		<form class="edit-node" on:submit=on_submit>
			<h4>"Edit"</h4>
			<input
				type="text"
				placeholder="Name"
				prop:value=name
				on:input=move |ev| set_name.set(event_target_value(&ev))
			/>
			<input
				type="text"
				placeholder="Description"
				prop:value=description
				on:input=move |ev| set_description.set(event_target_value(&ev))
			/>
			<select
				prop:value=move || status.get().as_str()
				on:change=move |ev| {
					set_status.set(NodeStatus::parse(&event_target_value(&ev)).unwrap_or_default())
				}
			>
				{status_options()}
			</select>
			<input
				type="number"
				min="0"
				placeholder="Vulnerabilities"
				prop:value=count
				on:input=move |ev| set_count.set(event_target_value(&ev))
			/>
			<button type="submit">"Save"</button>
		</form>
	}
}

/// Draws an extra edge from `source` to another partner.
#[component]
fn ConnectForm(
	source: String,
	state: RwSignal<NetworkState>,
	notice: RwSignal<Option<String>>,
) -> impl IntoView {
	let targets: Vec<(String, String)> = state.with_untracked(|s| {
		s.nodes()
			.iter()
			.filter(|n| n.id != source)
			.map(|n| (n.id.clone(), n.name.clone()))
			.collect()
	});
	let (target, set_target) = signal(targets.first().map(|(id, _)| id.clone()).unwrap_or_default());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let target = target.get_untracked();
		match state.try_update(|s| s.connect(&source, &target).map(|e| e.id.clone())) {
			Some(Ok(edge)) => debug!("supply-graph: form connected {edge}"),
			Some(Err(e)) => notice.set(Some(e.to_string())),
			None => {}
		}
	};

	let options = targets
		.into_iter()
		.map(|(id, name)| view! { <option value=id>{name}</option> })
		.collect_view();

	view! {
		<form class="connect-node" on:submit=on_submit>
			<h4>"Connect to"</h4>
			<select on:change=move |ev| set_target.set(event_target_value(&ev))>{options}</select>
			<button type="submit">"Connect"</button>
		</form>
	}
}

/// Attaches a new partner below `parent`.
#[component]
pub fn AddNodeForm(
	parent: String,
	state: RwSignal<NetworkState>,
	notice: RwSignal<Option<String>>,
) -> impl IntoView {
	let (name, set_name) = signal(String::new());
	let (description, set_description) = signal(String::new());
	let (status, set_status) = signal(NodeStatus::Healthy);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let spec = NodeSpec::new("", name.get_untracked().trim())
			.with_description(description.get_untracked().trim())
			.with_status(status.get_untracked());
		match state.try_update(|s| s.add_node(&parent, spec)) {
			Some(Ok(id)) => {
				debug!("supply-graph: form added {id}");
				set_name.set(String::new());
				set_description.set(String::new());
			}
			Some(Err(e)) => notice.set(Some(e.to_string())),
			None => {}
		}
	};

	view! {
		<form class="add-node" on:submit=on_submit>
			<h4>"Add a dependency"</h4>
			<input
				type="text"
				placeholder="Name"
				prop:value=name
				on:input=move |ev| set_name.set(event_target_value(&ev))
			/>
			<input
				type="text"
				placeholder="Description"
				prop:value=description
				on:input=move |ev| set_description.set(event_target_value(&ev))
			/>
			<select on:change=move |ev| {
				set_status.set(NodeStatus::parse(&event_target_value(&ev)).unwrap_or_default())
			}>{status_options()}</select>
			<button type="submit">"Add"</button>
		</form>
	}
}

/// Dismissable message for rejected or notable edits.
#[component]
pub fn NoticeToast(notice: RwSignal<Option<String>>) -> impl IntoView {
	move || {
		notice
			.get()
			.map(|text| {
				view! {
					<div
						class="notice-toast"
						role="alert"
						style=format!(
							"position: fixed; bottom: 24px; left: 50%; transform: translateX(-50%); \
							 z-index: {}; padding: 8px 16px; background: #7f1d1d; color: #fff; border-radius: 6px;",
							layer::TOAST,
						)
					>
						<span>{text}</span>
						<button on:click=move |_| notice.set(None)>"✕"</button>
					</div>
				}
			})
	}
}
