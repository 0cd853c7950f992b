//! Blockchain Status section: chain health and the live transaction feed.

#[cfg(test)]
#[path = "blockchain_test.rs"]
mod blockchain_test;

use leptos::prelude::*;

use crate::components::load_state::{LoadingPanel, RetryPanel};
use crate::components::stat_card::{Health, Metric, MetricGrid};
use crate::components::toast::{notify, notify_error, notify_success};
use crate::config::POLL_INTERVAL;
use crate::net::types::{BlockchainTransaction, ChainInfo, TransactionsResponse};
use crate::state::remote::RemoteData;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::clipboard::copy_text;
use crate::util::fetch::{load_into, reload_into};
use crate::util::format::{fee_eth, gas_price_gwei, grouped, millis, short_address, timestamp};
use crate::util::poll::spawn_poller;

const LOAD_FAILED: &str = "Failed to load blockchain data. Please try again.";
const REFRESHED: &str = "Blockchain data refreshed successfully.";

fn status_health(status: &str) -> Health {
    match status.to_ascii_lowercase().as_str() {
        "online" | "connected" | "healthy" => Health::Online,
        "degraded" | "syncing" => Health::Warning,
        _ => Health::Error,
    }
}

pub fn chain_metrics(info: &ChainInfo, transaction_count: usize) -> Vec<Metric> {
    vec![
        Metric::new("Network Status", info.status.clone(), format!("Chain ID: {}", info.chain_id))
            .with_health(status_health(&info.status)),
        Metric::new(
            "Latest Block",
            grouped(info.latest_block),
            format!("{} blocks today", grouped(info.blocks_mined_today)),
        ),
        Metric::new("Total Transactions", transaction_count.to_string(), "Live updates"),
        Metric::new("Network Latency", millis(info.latency_ms), "Response time"),
    ]
}

pub fn value_eth(value: f64) -> String {
    format!("{value} ETH")
}

/// Label/value pairs of the transaction detail dialog. The bool marks fields
/// with a copy button.
pub fn transaction_details(tx: &BlockchainTransaction) -> Vec<(&'static str, String, bool)> {
    vec![
        ("Transaction Hash", tx.hash.clone(), true),
        ("From", tx.from.clone(), true),
        ("To", tx.to.clone(), true),
        ("Value", value_eth(tx.value), false),
        ("Block", tx.block.to_string(), false),
        ("Timestamp", timestamp(&tx.timestamp), false),
        ("Gas Used", grouped(tx.gas_used), false),
        ("Gas Price", gas_price_gwei(&tx.gas_price), false),
        ("Transaction Fee", fee_eth(tx.gas_used, &tx.gas_price), false),
    ]
}

#[component]
pub fn BlockchainSection() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let info = RwSignal::new(RemoteData::<ChainInfo>::default());
    let txs = RwSignal::new(RemoteData::<TransactionsResponse>::default());
    let selected = RwSignal::new(None::<BlockchainTransaction>);

    let poll_transactions = move || {
        load_into(txs, crate::net::api::fetch_transactions, |e| {
            leptos::logging::warn!("transaction poll failed: {e}");
        });
    };
    let load = Callback::new(move |()| {
        load_into(info, crate::net::api::fetch_chain_info, move |_| notify_error(toasts, LOAD_FAILED));
        poll_transactions();
    });
    load.run(());
    spawn_poller(POLL_INTERVAL, poll_transactions);

    let on_refresh = move |_| {
        reload_into(
            info,
            crate::net::api::fetch_chain_info,
            move || notify_success(toasts, REFRESHED),
            move |_| notify_error(toasts, LOAD_FAILED),
        );
        poll_transactions();
    };

    let transactions = Memo::new(move |_| txs.get().data.map(|t| t.transactions).unwrap_or_default());
    let metrics = Signal::derive(move || {
        info.get().data.map(|i| chain_metrics(&i, transactions.get().len())).unwrap_or_default()
    });

    view! {
        <section class="section section--blockchain">
            <div class="section__header">
                <div>
                    <h1>"Blockchain Status"</h1>
                    <p class="section__subtitle">"Network health and recent on-chain access records."</p>
                </div>
                <div class="section__actions">
                    <button class="btn" on:click=on_refresh>"Refresh"</button>
                </div>
            </div>

            {move || {
                let state = info.get();
                if state.data.is_none() {
                    if let Some(err) = state.failed_empty() {
                        return view! { <RetryPanel message=err.to_owned() on_retry=load/> }.into_any();
                    }
                    return view! { <LoadingPanel label="Loading blockchain data..."/> }.into_any();
                }
                view! {
                    <MetricGrid metrics=metrics/>
                    <div class="card">
                        <h2>"Recent Transactions"</h2>
                        <table class="table table--clickable">
                            <thead>
                                <tr>
                                    <th>"Transaction Hash"</th>
                                    <th>"From"</th>
                                    <th>"To"</th>
                                    <th>"Value"</th>
                                    <th>"Block"</th>
                                    <th>"Gas Used"</th>
                                    <th>"Timestamp"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || !transactions.get().is_empty()>
                                    <For
                                        each=move || transactions.get()
                                        key=|tx| tx.hash.clone()
                                        children=move |tx| {
                                            let picked = tx.clone();
                                            view! {
                                                <tr on:click=move |_| selected.set(Some(picked.clone()))>
                                                    <td class="mono">{short_address(&tx.hash)}</td>
                                                    <td class="mono">{short_address(&tx.from)}</td>
                                                    <td class="mono">{short_address(&tx.to)}</td>
                                                    <td class="mono">{value_eth(tx.value)}</td>
                                                    <td><span class="badge mono">{tx.block}</span></td>
                                                    <td class="mono">{grouped(tx.gas_used)}</td>
                                                    <td>{timestamp(&tx.timestamp)}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </Show>
                                <Show when=move || transactions.get().is_empty()>
                                    <tr>
                                        <td class="table__empty" colspan="7">"No transactions found"</td>
                                    </tr>
                                </Show>
                            </tbody>
                        </table>
                    </div>
                }
                    .into_any()
            }}

            <Show when=move || selected.get().is_some()>
                <TransactionDialog selected=selected toasts=toasts/>
            </Show>
        </section>
    }
}

#[component]
fn TransactionDialog(
    selected: RwSignal<Option<BlockchainTransaction>>,
    toasts: RwSignal<ToastState>,
) -> impl IntoView {
    let close = move |_| selected.set(None);
    let rows = move || selected.get().map(|tx| transaction_details(&tx)).unwrap_or_default();
    let subtitle = move || {
        let hash = selected.get().map(|tx| tx.hash).unwrap_or_default();
        let head: String = hash.chars().take(10).collect();
        format!("Complete information for transaction {head}...")
    };

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Transaction Details"</h2>
                <p class="dialog__message">{subtitle}</p>
                <dl class="detail-grid">
                    {move || {
                        rows()
                            .into_iter()
                            .map(|(label, value, copyable)| {
                                let copied = value.clone();
                                view! {
                                    <dt>{label}</dt>
                                    <dd class="mono">
                                        <span class="detail-grid__value">{value}</span>
                                        {copyable
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class="btn btn--small"
                                                        title="Copy"
                                                        on:click=move |_| {
                                                            if copy_text(&copied) {
                                                                notify(
                                                                    toasts,
                                                                    ToastKind::Info,
                                                                    "Copied!",
                                                                    format!("{label} copied to clipboard."),
                                                                );
                                                            }
                                                        }
                                                    >
                                                        "Copy"
                                                    </button>
                                                }
                                            })}
                                    </dd>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </dl>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=close>"Close"</button>
                </div>
            </div>
        </div>
    }
}
