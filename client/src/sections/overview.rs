//! Overview section: headline metrics and recent gate activity.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use leptos::prelude::*;

use crate::components::load_state::{LoadingPanel, RetryPanel};
use crate::components::stat_card::{Health, Metric, MetricGrid};
use crate::components::toast::notify_error;
use crate::config::POLL_INTERVAL;
use crate::net::types::{AccessStatus, Overview};
use crate::state::remote::RemoteData;
use crate::state::toast::ToastState;
use crate::util::fetch::load_into;
use crate::util::format::{grouped, millis, timestamp};
use crate::util::poll::spawn_poller;

const LOAD_FAILED: &str = "Failed to load dashboard data. Please try again.";
const SLOW_RESPONSE_MS: f64 = 500.0;

/// One row of the recent activity feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityEntry {
    pub id: String,
    pub tag_id: String,
    pub location: String,
    pub timestamp: String,
    pub verified: bool,
    pub user: String,
}

pub fn summary_metrics(overview: &Overview) -> Vec<Metric> {
    vec![
        Metric::new("Total NFC Tags", grouped(overview.total_devices), "Registered readers"),
        Metric::new("Total Visitors", grouped(overview.total_visitors_count), "Unique badge holders"),
        Metric::new(
            "Successful Verifications",
            grouped(overview.successful_verifications),
            format!("{:.1}% success rate", overview.verification_success_rate),
        ),
        Metric::new("Blocked Attempts", grouped(overview.denied_verifications), "Denied at the gate"),
    ]
}

pub fn analytics_metrics(overview: &Overview) -> Vec<Metric> {
    let response_health =
        if overview.response_time_ms < SLOW_RESPONSE_MS { Health::Online } else { Health::Warning };
    let sync_health = if overview.blockchain_sync { Health::Online } else { Health::Error };
    vec![
        Metric::new("Response Time", millis(overview.response_time_ms), "API latency").with_health(response_health),
        Metric::new(
            "Blockchain Sync",
            if overview.blockchain_sync { "Synced" } else { "Out of sync" },
            format!("Latency {}", millis(overview.blockchain_latency_ms)),
        )
        .with_health(sync_health),
        Metric::new(
            "Success Rate",
            format!("{:.1}%", overview.verification_success_rate),
            format!("{} total verifications", grouped(overview.total_verifications)),
        ),
        Metric::new(
            "Active Devices",
            grouped(overview.active_devices),
            format!("of {} devices", grouped(overview.total_devices)),
        )
        .with_health(Health::Online),
        Metric::new(
            "Active Users",
            grouped(overview.active_users),
            format!("of {} users", grouped(overview.total_users)),
        ),
    ]
}

pub fn activity_entries(overview: &Overview) -> Vec<ActivityEntry> {
    overview
        .recent_access_logs
        .iter()
        .enumerate()
        .map(|(index, log)| ActivityEntry {
            id: format!("{}-{index}", log.nfc_id),
            tag_id: log.nfc_id.clone(),
            location: format!("{} - {}", log.gate_name, log.location),
            timestamp: timestamp(&log.timestamp),
            verified: log.access_status == AccessStatus::Granted,
            user: log.name.clone(),
        })
        .collect()
}

#[component]
pub fn OverviewSection() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let overview = RwSignal::new(RemoteData::<Overview>::default());

    let load = Callback::new(move |()| {
        load_into(overview, crate::net::api::fetch_overview, move |_| notify_error(toasts, LOAD_FAILED));
    });
    load.run(());
    spawn_poller(POLL_INTERVAL, move || load.run(()));

    let summary = Signal::derive(move || overview.get().data.as_ref().map(summary_metrics).unwrap_or_default());
    let analytics = Signal::derive(move || overview.get().data.as_ref().map(analytics_metrics).unwrap_or_default());
    let activity = move || overview.get().data.as_ref().map(activity_entries).unwrap_or_default();

    view! {
        <section class="section section--overview">
            {move || {
                let state = overview.get();
                if state.data.is_none() {
                    if let Some(err) = state.failed_empty() {
                        return view! { <RetryPanel message=err.to_owned() on_retry=load/> }.into_any();
                    }
                    return view! { <LoadingPanel label="Loading dashboard..."/> }.into_any();
                }
                view! {
                    <div class="section__header">
                        <h1>"Dashboard"</h1>
                        <p class="section__subtitle">"Live view of gate activity. Refreshes every 5 seconds."</p>
                    </div>
                    <MetricGrid metrics=summary/>
                    <MetricGrid metrics=analytics/>
                    <div class="card activity">
                        <h2>"Recent Activity"</h2>
                        <ul class="activity__list">
                            <For
                                each=activity
                                key=|e| e.id.clone()
                                children=|e| {
                                    view! {
                                        <li class="activity__row">
                                            <span
                                                class="activity__status"
                                                class:activity__status--verified=e.verified
                                                class:activity__status--blocked=!e.verified
                                            >
                                                {if e.verified { "Verified" } else { "Blocked" }}
                                            </span>
                                            <span class="activity__user">{e.user}</span>
                                            <span class="activity__tag mono">{e.tag_id}</span>
                                            <span class="activity__location">{e.location}</span>
                                            <span class="activity__time">{e.timestamp}</span>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
