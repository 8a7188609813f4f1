use leptos::prelude::*;

use crate::components::controls::Controls;
use crate::components::graph_canvas::GraphCanvas;
use crate::engine::EngineConfig;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let range = RwSignal::new(EngineConfig::default().default_range);
	let show_range = RwSignal::new(false);
	let tracing = RwSignal::new(false);
	let solve_requests = RwSignal::new(0u32);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-page">
				<div class="graph-overlay">
					<h1>"Proximity Graph"</h1>
					<p class="subtitle">
						"Click to place nodes, drag to move them. Nodes within range connect automatically."
					</p>
				</div>
				<Controls
					range=range
					show_range=show_range
					tracing=tracing
					solve_requests=solve_requests
				/>
				<div class="graph-stage">
					<GraphCanvas
						range=range
						show_range=show_range
						tracing=tracing
						solve_requests=solve_requests
					/>
				</div>
			</div>
		</ErrorBoundary>
	}
}
