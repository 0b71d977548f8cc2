use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use log::{debug, warn};

use crate::components::execution_panel::ExecutionPanel;
use crate::components::flow_canvas::FlowCanvas;
use crate::config::PlaybackConfig;
use crate::playback::Playback;
use crate::workflow::{CAMPAIGN_STEPS, campaign_flow};

/// Starts a run and schedules one timeout per log entry. The timeouts are
/// never cancelled; each one appends its entry when it fires.
fn execute(playback: RwSignal<Playback>) {
	let Some(started) = playback.try_update(Playback::start) else {
		return;
	};
	let schedule = match started {
		Ok(schedule) => schedule,
		Err(err) => {
			warn!("execute ignored: {err}");
			return;
		}
	};
	if schedule.is_empty() {
		return;
	}
	debug!("scheduling {} log entries", schedule.len());
	for tick in schedule.ticks() {
		set_timeout(
			move || {
				playback.update(|p| {
					p.deliver(tick);
				});
			},
			tick.at,
		);
	}
}

/// Workflow builder page: diagram on the left, execution log on the right.
#[component]
pub fn Home() -> impl IntoView {
	let flow = Signal::derive(campaign_flow);
	let playback = RwSignal::new(Playback::new(
		CAMPAIGN_STEPS,
		PlaybackConfig::default().interval,
	));
	let running = Signal::derive(move || playback.with(Playback::is_running));
	let log = Signal::derive(move || playback.with(|p| p.log().to_vec()));

	view! {
		<div class="app">
			<header class="app-header">
				<div>
					<h1>"📧 Cold Email Workflow Builder"</h1>
					<p class="subtitle">"Automated cold email campaign with follow-ups"</p>
				</div>
				<button
					class="run-button"
					disabled=move || running.get()
					on:click=move |_| execute(playback)
				>
					{move || if running.get() { "⚙️ Running..." } else { "▶️ Execute Workflow" }}
				</button>
			</header>

			<main class="workspace">
				<div class="canvas-area">
					<FlowCanvas data=flow />
				</div>
				<ExecutionPanel log=log />
			</main>
		</div>
	}
}
