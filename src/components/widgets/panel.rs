//! Draggable floating widget chrome and the widget bodies.
//!
//! A widget is dragged by its title bar. While a drag is in progress a
//! transparent shield covers the viewport so pointer moves are never lost
//! to the canvas underneath. The layout is saved once, on drop.

use std::time::Duration;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::warn;

use super::board::{WidgetBoard, WidgetId};
use super::replay::{ATTACK_SCRIPT, Replay};
use super::store::{BrowserStore, WidgetOffset};
use crate::components::layer;
use crate::components::network_graph::{NetworkState, Severity};

/// Covers the whole viewport above every overlay so no move or release
/// reaches the canvas mid-drag.
fn drag_shield_style() -> String {
	format!(
		"position: fixed; inset: 0; z-index: {}; pointer-events: auto; cursor: grabbing;",
		layer::DRAG_SHIELD
	)
}

#[derive(Clone, Copy, Debug)]
struct DragStart {
	x: f64,
	y: f64,
	origin: WidgetOffset,
}

/// Floating, draggable, minimisable panel bound to one [`WidgetId`].
#[component]
pub fn FloatingWidget(id: WidgetId, board: RwSignal<WidgetBoard>, children: ChildrenFn) -> impl IntoView {
	let drag = RwSignal::new(None::<DragStart>);
	let live = RwSignal::new(None::<WidgetOffset>);
	let offset = move || live.get().unwrap_or_else(|| board.with(|b| b.position(id)));
	let minimized = move || board.with(|b| b.is_minimized(id));

	let on_grab = move |ev: MouseEvent| {
		ev.prevent_default();
		let origin = live
			.get_untracked()
			.unwrap_or_else(|| board.with_untracked(|b| b.position(id)));
		drag.set(Some(DragStart {
			x: ev.client_x() as f64,
			y: ev.client_y() as f64,
			origin,
		}));
	};
	let on_move = move |ev: MouseEvent| {
		if let Some(start) = drag.get_untracked() {
			live.set(Some(WidgetOffset::new(
				(start.origin.x + ev.client_x() as f64 - start.x).max(0.0),
				(start.origin.y + ev.client_y() as f64 - start.y).max(0.0),
			)));
		}
	};
	let on_drop = move |_: MouseEvent| {
		if let Some(end) = live.get_untracked() {
			board.update(|b| {
				if let Err(e) = b.drag_stop(id, end, &BrowserStore::default()) {
					warn!("supply-graph: widget layout not saved: {}", e);
				}
			});
		}
		drag.set(None);
		live.set(None);
	};
	let keep_click = |ev: MouseEvent| ev.stop_propagation();

	view! {
		<Show when=move || board.with(|b| b.is_visible(id))>
			<div
				class="floating-widget"
				class:minimized=minimized
				style=move || {
					let p = offset();
					format!(
						"position: absolute; top: 0; left: 0; pointer-events: auto; min-width: 240px; \
						 background: rgba(15, 23, 42, 0.92); color: #e2e8f0; border-radius: 8px; \
						 transform: translate({}px, {}px);",
						p.x,
						p.y,
					)
				}
			>
				<div
					class="widget-handle"
					style="display: flex; align-items: center; gap: 4px; padding: 6px 10px; cursor: grab;"
					on:mousedown=on_grab
				>
					<span class="widget-title" style="flex: 1;">
						{id.title()}
					</span>
					<button
						title="Minimize"
						on:mousedown=keep_click
						on:click=move |_| board.update(|b| b.toggle_minimized(id))
					>
						{move || if minimized() { "▢" } else { "–" }}
					</button>
					<button
						title="Hide"
						on:mousedown=keep_click
						on:click=move |_| board.update(|b| b.toggle_visible(id))
					>
						"✕"
					</button>
				</div>
				{
					let children = children.clone();
					move || {
						(!minimized())
							.then(|| {
								view! {
									<div class="widget-body" style="padding: 0 10px 10px;">
										{children()}
									</div>
								}
							})
					}
				}
			</div>
			<Show when=move || drag.with(Option::is_some)>
				<div
					class="drag-shield"
					style=drag_shield_style()
					on:mousemove=on_move
					on:mouseup=on_drop
				></div>
			</Show>
		</Show>
	}
}

/// Live severity counts for the current network.
#[component]
pub fn StatusWidget(state: RwSignal<NetworkState>) -> impl IntoView {
	let count = move |severity: Severity| {
		state.with(|s| s.nodes().iter().filter(|n| n.severity == severity).count())
	};
	view! {
		<ul class="status-counts">
			<li class="severity-healthy">{move || count(Severity::Healthy)} " secure"</li>
			<li class="severity-warning">{move || count(Severity::Warning)} " need attention"</li>
			<li class="severity-critical">{move || count(Severity::Critical)} " in alert"</li>
		</ul>
	}
}

/// Partners currently in alert. Clicking one selects it on the graph.
#[component]
pub fn AlertWidget(state: RwSignal<NetworkState>) -> impl IntoView {
	move || {
		let alerts: Vec<(String, String, Option<u32>)> = state.with(|s| {
			s.nodes()
				.iter()
				.filter(|n| n.severity == Severity::Critical)
				.map(|n| (n.id.clone(), n.name.clone(), n.badge_count()))
				.collect()
		});
		if alerts.is_empty() {
			return view! { <p class="empty">"No active alerts"</p> }.into_any();
		}
		alerts
			.into_iter()
			.map(|(id, name, count)| {
				view! {
					<button class="alert-entry" on:click=move |_| state.update(|s| s.select(&id))>
						<span>{name}</span>
						{count.map(|n| view! { <span class="badge">{n}</span> })}
					</button>
				}
			})
			.collect_view()
			.into_any()
	}
}

/// Static hardening suggestions.
#[component]
pub fn RecommendationsWidget() -> impl IntoView {
	const ITEMS: [&str; 3] = [
		"Patch OpenShift clusters to the latest minor release",
		"Rotate service credentials shared with suppliers",
		"Require signed SBOMs from every new supplier",
	];
	view! { <ol class="recommendations">{ITEMS.map(|item| view! { <li>{item}</li> })}</ol> }
}

/// Static recent-events feed.
#[component]
pub fn TimelineWidget() -> impl IntoView {
	const EVENTS: [(&str, &str); 3] = [
		("06:00", "Daily scan completed"),
		("06:12", "Vulnerability reported on Red Hat"),
		("06:15", "Micrologic notified"),
	];
	view! {
		<ul class="timeline">
			{EVENTS
				.map(|(time, text)| {
					view! {
						<li>
							<time>{time}</time>
							<span>{text}</span>
						</li>
					}
				})}
		</ul>
	}
}

/// Replays [`ATTACK_SCRIPT`], one line per second while playing.
#[component]
pub fn AttackWidget() -> impl IntoView {
	let replay = RwSignal::new(Replay::new(ATTACK_SCRIPT.len()));
	let ticker = set_interval_with_handle(
		move || {
			if replay.try_with_untracked(Replay::is_running) == Some(true) {
				replay.update(|r| {
					r.tick();
				});
			}
		},
		Duration::from_secs(1),
	);
	match ticker {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(e) => warn!("supply-graph: attack replay timer unavailable: {:?}", e),
	}

	let running = move || replay.with(Replay::is_running);
	let revealed = move || replay.with(Replay::revealed);

	view! {
		<div class="attack-replay">
			<div class="replay-controls">
				<button disabled=running on:click=move |_| replay.update(Replay::start)>
					"Play"
				</button>
				<button disabled=move || !running() on:click=move |_| replay.update(Replay::pause)>
					"Pause"
				</button>
				<button on:click=move |_| replay.update(Replay::reset)>"Reset"</button>
			</div>
			{move || (revealed() == 0).then(|| view! { <p class="empty">"Press play to replay the scenario"</p> })}
			<ul class="replay-log">
				{move || {
					ATTACK_SCRIPT
						.into_iter()
						.take(revealed())
						.map(|event| {
							view! {
								<li>
									<time>{event.time}</time>
									<span class=event.level.class()>{event.partner}</span>
									<span>{event.text}</span>
								</li>
							}
						})
						.collect_view()
				}}
			</ul>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn drag_shield_spans_the_viewport_above_the_overlays() {
		let style = drag_shield_style();
		assert!(style.contains("position: fixed"));
		assert!(style.contains("inset: 0"));
		assert!(style.contains("pointer-events: auto"));
		assert!(style.contains(&format!("z-index: {}", layer::DRAG_SHIELD)));
		assert!(layer::DRAG_SHIELD > layer::TOAST);
	}
}
