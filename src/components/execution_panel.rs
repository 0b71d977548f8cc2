use leptos::prelude::*;

use crate::workflow::{CAMPAIGN_STATS, Stat};

/// Side panel with the playback log and the fixed campaign figures.
#[component]
pub fn ExecutionPanel(#[prop(into)] log: Signal<Vec<&'static str>>) -> impl IntoView {
	view! {
		<aside class="execution-panel">
			<h2>"📋 Execution Log"</h2>
			<Show
				when=move || log.with(|entries| !entries.is_empty())
				fallback=|| {
					view! {
						<p class="execution-placeholder">
							"Click \"Execute Workflow\" to start the campaign"
						</p>
					}
				}
			>
				<div class="execution-log">
					<For
						each=move || log.get().into_iter().enumerate()
						key=|(index, _)| *index
						children=|(_, entry)| view! { <div class="log-entry">{entry}</div> }
					/>
				</div>
			</Show>

			<div class="workflow-stats">
				<h3>"📊 Workflow Stats"</h3>
				{CAMPAIGN_STATS.iter().map(stat_row).collect_view()}
			</div>
		</aside>
	}
}

fn stat_row(stat: &'static Stat) -> impl IntoView {
	let Stat { icon, label, value } = *stat;
	view! {
		<div class="stat">
			{icon}" "<strong>{label}":"</strong>" "{value}
		</div>
	}
}
