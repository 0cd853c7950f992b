//! Verification Logs section: searchable, paginated gate event history.

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use leptos::prelude::*;

use crate::components::load_state::{LoadingPanel, RetryPanel};
use crate::components::pager::Pager;
use crate::components::stat_card::{Health, Metric, MetricGrid};
use crate::components::toast::{notify_error, notify_success};
use crate::config::PAGE_SIZE;
use crate::net::types::{AccessStatus, LogsResponse, VerificationLog};
use crate::state::remote::RemoteData;
use crate::state::toast::ToastState;
use crate::util::csv_export::export_rows;
use crate::util::fetch::{load_into, reload_into};
use crate::util::format::{or_placeholder, percent, short_address};
use crate::util::table::{PageWindow, matches_query};

const LOAD_FAILED: &str = "Failed to load verification logs. Please try again.";
const REFRESH_FAILED: &str = "Failed to refresh verification logs. Please try again.";
const REFRESHED: &str = "Verification logs refreshed successfully.";

pub const CSV_HEADERS: [&str; 8] =
    ["Timestamp", "Name", "Email", "NFC ID", "Access Level", "Status", "Position", "TX Hash"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFilter {
    #[default]
    All,
    Only(AccessStatus),
}

impl LogFilter {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "granted" => Self::Only(AccessStatus::Granted),
            "denied" => Self::Only(AccessStatus::Denied),
            _ => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.as_str(),
        }
    }
}

/// Logs matching the search box (name, NFC id, email, position, access level)
/// and the status filter.
pub fn filter_logs(logs: &[VerificationLog], query: &str, filter: LogFilter) -> Vec<VerificationLog> {
    logs.iter()
        .filter(|log| match filter {
            LogFilter::All => true,
            LogFilter::Only(status) => log.access_status == status,
        })
        .filter(|log| {
            matches_query(
                query,
                [
                    Some(log.name.as_str()),
                    Some(log.nfc_id.as_str()),
                    Some(log.email.as_str()),
                    Some(log.position.as_str()),
                    Some(log.access_level.as_str()),
                ],
            )
        })
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogStats {
    pub total: usize,
    pub verified: usize,
    pub denied: usize,
    pub failed: usize,
}

impl LogStats {
    pub fn of(logs: &[VerificationLog]) -> Self {
        Self {
            total: logs.len(),
            verified: logs.iter().filter(|l| l.success && l.access_status == AccessStatus::Granted).count(),
            denied: logs.iter().filter(|l| l.access_status == AccessStatus::Denied).count(),
            failed: logs.iter().filter(|l| !l.success).count(),
        }
    }

    pub fn metrics(self) -> Vec<Metric> {
        vec![
            Metric::new("Total Verifications", self.total.to_string(), "All recorded attempts"),
            Metric::new(
                "Verified",
                self.verified.to_string(),
                format!("{} success rate", percent(self.verified, self.total)),
            )
            .with_health(Health::Online),
            Metric::new("Denied", self.denied.to_string(), "Access denied").with_health(Health::Error),
            Metric::new("Failed", self.failed.to_string(), "Technical failures").with_health(Health::Warning),
        ]
    }
}

/// Status column text: failed reads show `Failed` regardless of decision.
pub fn status_label(log: &VerificationLog) -> &'static str {
    if log.success { log.access_status.as_str() } else { "Failed" }
}

pub fn csv_rows(logs: &[VerificationLog]) -> Vec<Vec<String>> {
    logs.iter()
        .map(|log| {
            vec![
                format!("{} {}", log.access_time.date, log.access_time.time),
                or_placeholder(Some(log.name.as_str()), "Unknown").to_owned(),
                or_placeholder(Some(log.email.as_str()), "N/A").to_owned(),
                or_placeholder(Some(log.nfc_id.as_str()), "N/A").to_owned(),
                or_placeholder(Some(log.access_level.as_str()), "N/A").to_owned(),
                status_label(log).to_owned(),
                or_placeholder(Some(log.position.as_str()), "N/A").to_owned(),
                or_placeholder(log.blockchain_data.as_ref().map(|b| b.tx_hash.as_str()), "N/A").to_owned(),
            ]
        })
        .collect()
}

#[component]
pub fn LogsSection() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let logs = RwSignal::new(RemoteData::<LogsResponse>::default());
    let query = RwSignal::new(String::new());
    let filter = RwSignal::new(LogFilter::All);
    let page = RwSignal::new(1_usize);
    let selected = RwSignal::new(None::<VerificationLog>);

    let load = Callback::new(move |()| {
        load_into(logs, crate::net::api::fetch_logs, move |_| notify_error(toasts, LOAD_FAILED));
    });
    load.run(());

    let on_refresh = move |_| {
        reload_into(
            logs,
            crate::net::api::fetch_logs,
            move || notify_success(toasts, REFRESHED),
            move |_| notify_error(toasts, REFRESH_FAILED),
        );
    };

    let all_logs = move || logs.get().data.map(|l| l.logs).unwrap_or_default();
    let visible = Memo::new(move |_| filter_logs(&all_logs(), &query.get(), filter.get()));
    let stats = Signal::derive(move || LogStats::of(&all_logs()).metrics());
    let total = Signal::derive(move || visible.get().len());
    let window = Signal::derive(move || PageWindow::new(total.get(), page.get(), PAGE_SIZE));
    let page_rows = move || {
        let rows = visible.get();
        window.get().slice(&rows).to_vec()
    };

    let on_export = move |_| {
        let rows = csv_rows(&visible.get_untracked());
        match export_rows("verification-logs", &CSV_HEADERS, rows) {
            Ok(count) => notify_success(toasts, format!("Exported {count} verification logs to CSV file.")),
            Err(e) => notify_error(toasts, e.to_string()),
        }
    };

    view! {
        <section class="section section--logs">
            <div class="section__header">
                <div>
                    <h1>"Verification Logs"</h1>
                    <p class="section__subtitle">"Every badge read, with its on-chain record."</p>
                </div>
                <div class="section__actions">
                    <button class="btn" on:click=on_refresh>"Refresh"</button>
                    <button class="btn" on:click=on_export>"Export CSV"</button>
                </div>
            </div>

            {move || {
                let state = logs.get();
                if state.data.is_none() {
                    if let Some(err) = state.failed_empty() {
                        return view! { <RetryPanel message=err.to_owned() on_retry=load/> }.into_any();
                    }
                    return view! { <LoadingPanel label="Loading verification logs..."/> }.into_any();
                }
                view! {
                    <MetricGrid metrics=stats/>
                    <div class="card">
                        <div class="table-toolbar">
                            <input
                                class="table-toolbar__search"
                                type="search"
                                placeholder="Search logs..."
                                prop:value=move || query.get()
                                on:input=move |ev| {
                                    query.set(event_target_value(&ev));
                                    page.set(1);
                                }
                            />
                            <select
                                class="table-toolbar__filter"
                                prop:value=move || filter.get().as_str()
                                on:change=move |ev| {
                                    filter.set(LogFilter::parse(&event_target_value(&ev)));
                                    page.set(1);
                                }
                            >
                                <option value="All">"All"</option>
                                <option value="granted">"Granted"</option>
                                <option value="denied">"Denied"</option>
                            </select>
                        </div>
                        <h2>{move || format!("Recent Verification Logs ({})", total.get())}</h2>
                        <table class="table table--clickable">
                            <thead>
                                <tr>
                                    <th>"Timestamp"</th>
                                    <th>"User"</th>
                                    <th>"NFC ID / Method"</th>
                                    <th>"Location"</th>
                                    <th>"Access Level"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=page_rows
                                    key=|log| log.id.clone()
                                    children=move |log| {
                                        let status = status_label(&log);
                                        let picked = log.clone();
                                        view! {
                                            <tr on:click=move |_| selected.set(Some(picked.clone()))>
                                                <td>{format!("{} {}", log.access_time.date, log.access_time.time)}</td>
                                                <td>
                                                    <div>{log.name.clone()}</div>
                                                    <div class="muted">{log.email.clone()}</div>
                                                </td>
                                                <td>
                                                    <div class="mono">{log.nfc_id.clone()}</div>
                                                    <div class="muted">{log.access_method.clone()}</div>
                                                </td>
                                                <td>{format!("{} - {}", log.gate_name, log.location)}</td>
                                                <td>{log.access_level.clone()}</td>
                                                <td>
                                                    <span class=format!("badge badge--{}", status.to_lowercase())>
                                                        {status}
                                                    </span>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                        <Pager window=window total=total page=page/>
                    </div>
                }
                    .into_any()
            }}

            <Show when=move || selected.get().is_some()>
                <LogDetailDialog selected=selected/>
            </Show>
        </section>
    }
}

#[component]
fn LogDetailDialog(selected: RwSignal<Option<VerificationLog>>) -> impl IntoView {
    let close = move |_| selected.set(None);

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Verification Details"</h2>
                {move || {
                    selected
                        .get()
                        .map(|log| {
                            let chain = log.blockchain_data.clone().unwrap_or_default();
                            view! {
                                <dl class="detail-grid">
                                    <dt>"User"</dt>
                                    <dd>{format!("{} ({})", log.name, log.email)}</dd>
                                    <dt>"Position"</dt>
                                    <dd>{log.position.clone()}</dd>
                                    <dt>"Access Level"</dt>
                                    <dd>{log.access_level.clone()}</dd>
                                    <dt>"Gate"</dt>
                                    <dd>{format!("{} - {}", log.gate_name, log.location)}</dd>
                                    <dt>"Time"</dt>
                                    <dd>{format!("{} {}", log.access_time.date, log.access_time.time)}</dd>
                                    <dt>"Status"</dt>
                                    <dd>{status_label(&log)}</dd>
                                    <dt>"Method"</dt>
                                    <dd>{log.access_method.clone()}</dd>
                                </dl>
                                <h3>"Card Data"</h3>
                                <dl class="detail-grid">
                                    <dt>"NFC ID"</dt>
                                    <dd class="mono">{log.nfc_id.clone()}</dd>
                                    <dt>"Hex UID"</dt>
                                    <dd class="mono">{log.card_data.hex_uid.clone()}</dd>
                                    <dt>"Processed"</dt>
                                    <dd class="mono">{log.card_data.processed_hex.clone()}</dd>
                                </dl>
                                <h3>"Blockchain Data"</h3>
                                <dl class="detail-grid">
                                    <dt>"Transaction"</dt>
                                    <dd class="mono" title=chain.tx_hash.clone()>
                                        {or_placeholder(Some(short_address(&chain.tx_hash).as_str()), "N/A").to_owned()}
                                    </dd>
                                    <dt>"Block Time"</dt>
                                    <dd>{or_placeholder(Some(chain.block_time.as_str()), "N/A").to_owned()}</dd>
                                    <dt>"Stored Value"</dt>
                                    <dd class="mono">{or_placeholder(Some(chain.stored_value.as_str()), "N/A").to_owned()}</dd>
                                </dl>
                            }
                        })
                }}
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=close>"Close"</button>
                </div>
            </div>
        </div>
    }
}
