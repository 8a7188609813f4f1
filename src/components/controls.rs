use leptos::prelude::*;

use crate::components::graph_canvas::{RANGE_MAX, RANGE_MIN, RANGE_STEP};

/// Toolbar driving the canvas: range display, proximity threshold, shortest
/// paths and trace mode.
#[component]
pub fn Controls(
	range: RwSignal<f64>,
	show_range: RwSignal<bool>,
	tracing: RwSignal<bool>,
	solve_requests: RwSignal<u32>,
) -> impl IntoView {
	view! {
		<div class="graph-controls">
			<button on:click=move |_| show_range.update(|v| *v = !*v)>
				{move || if show_range.get() { "Hide range" } else { "Show range" }}
			</button>

			<label class="range-control">
				"Range "
				<input
					type="range"
					min=RANGE_MIN.to_string()
					max=RANGE_MAX.to_string()
					step=RANGE_STEP.to_string()
					prop:value=move || range.get().to_string()
					on:input=move |ev| {
						if let Ok(value) = event_target_value(&ev).parse::<f64>() {
							range.set(value);
						}
					}
				/>
				<span>{move || range.get() as i64}</span>
			</label>

			<button on:click=move |_| solve_requests.update(|n| *n += 1)>
				"Shortest paths"
			</button>

			<button
				class:active=move || tracing.get()
				on:click=move |_| tracing.update(|v| *v = !*v)
			>
				{move || if tracing.get() { "Stop tracing" } else { "Trace to master" }}
			</button>
		</div>
	}
}
