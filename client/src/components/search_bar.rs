//! Header search with suggestions and the badge-holder detail dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Typing runs a debounced search; picking a suggestion loads the holder's
//! profile and access history, then the assistant's summary. The dialog keeps
//! a short chat so the operator can ask follow-up questions.

use leptos::prelude::*;

use crate::config::SEARCH_DEBOUNCE;
use crate::net::types::{AccessStatus, SearchUser, UserDetails};
use crate::state::chat::{ChatRole, SummaryChat};
use crate::state::remote::RemoteData;
use crate::state::search::SearchState;
use crate::util::format::{or_placeholder, short_address};
use crate::util::markdown::render_markdown_html;
use crate::util::poll::spawn_after;

const HISTORY_ROWS: usize = 8;

#[component]
pub fn SearchBar() -> impl IntoView {
    let search = RwSignal::new(SearchState::default());
    let selected = RwSignal::new(None::<SearchUser>);
    let details = RwSignal::new(RemoteData::<UserDetails>::default());
    let chat = RwSignal::new(SummaryChat::default());

    let run_search = move |seq: u64| {
        let Some(query) = search.try_update(|s| s.begin(seq)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let users = match crate::net::api::search_users(&query).await {
                Ok(resp) => Some(resp.users),
                Err(e) => {
                    leptos::logging::warn!("search failed: {e}");
                    None
                }
            };
            search.update(|s| {
                s.resolve(seq, users);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        let seq = search.try_update(|s| s.keystroke(event_target_value(&ev))).unwrap_or_default();
        spawn_after(SEARCH_DEBOUNCE, move || {
            if search.try_with_untracked(|s| s.is_current(seq)).unwrap_or(false) {
                run_search(seq);
            }
        });
    };

    let on_pick = move |user: SearchUser| {
        search.update(SearchState::clear);
        chat.update(SummaryChat::reset);
        selected.set(Some(user.clone()));
        open_details(user, selected, details, chat);
    };

    let on_close = Callback::new(move |()| {
        selected.set(None);
        details.set(RemoteData::default());
        chat.update(SummaryChat::reset);
    });

    view! {
        <div class="search-bar">
            <input
                class="search-bar__input"
                type="search"
                placeholder="Search users by name, email, or position..."
                prop:value=move || search.get().query
                on:input=on_input
            />
            <Show when=move || search.get().loading>
                <span class="search-bar__spinner" aria-hidden="true"></span>
            </Show>
            <Show when=move || search.get().open>
                <ul class="search-bar__suggestions">
                    {move || {
                        search
                            .get()
                            .suggestions
                            .into_iter()
                            .map(|user| {
                                let picked = user.clone();
                                view! {
                                    <li class="search-bar__suggestion" on:click=move |_| on_pick(picked.clone())>
                                        <span class="search-bar__suggestion-name">{user.name}</span>
                                        <span class="search-bar__suggestion-meta">
                                            {format!("{} · {}", user.email, user.position)}
                                        </span>
                                        <span class="badge">{user.access_level}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
            <Show when=move || selected.get().is_some()>
                <UserDetailDialog details=details chat=chat on_close=on_close/>
            </Show>
        </div>
    }
}

/// Load profile then summary for `user`, dropping results if the dialog has
/// moved on to someone else.
fn open_details(
    user: SearchUser,
    selected: RwSignal<Option<SearchUser>>,
    details: RwSignal<RemoteData<UserDetails>>,
    chat: RwSignal<SummaryChat>,
) {
    let Some(token) = details.try_update(RemoteData::begin) else {
        return;
    };
    chat.update(|c| c.loading = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_user_details(&user.id).await.map(|r| r.user);
        let applied = details.try_update(|d| d.resolve(token, result)).unwrap_or(false);
        if !applied {
            return;
        }
        let summary = crate::net::api::fetch_summary(&user.id).await;
        let still_open = selected
            .try_with_untracked(|s| s.as_ref().is_some_and(|s| s.id == user.id))
            .unwrap_or(false);
        if !still_open {
            return;
        }
        match summary {
            Ok(resp) => chat.update(|c| c.set_summary(resp.user_summary)),
            Err(e) => {
                leptos::logging::warn!("summary failed for {}: {e}", user.id);
                chat.update(SummaryChat::summary_failed);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user, selected, token);
    }
}

#[component]
fn UserDetailDialog(
    details: RwSignal<RemoteData<UserDetails>>,
    chat: RwSignal<SummaryChat>,
    on_close: Callback<()>,
) -> impl IntoView {
    let input = RwSignal::new(String::new());

    let send = Callback::new(move |()| {
        let Some(nfc_id) = details.get_untracked().data.map(|d| d.nfc_id) else {
            return;
        };
        let Some(message) = chat.try_update(|c| c.ask(&input.get_untracked())).flatten() else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = crate::net::types::SummaryChatRequest { userid: nfc_id, message };
            match crate::net::api::send_summary_chat(&request).await {
                Ok(resp) => chat.update(|c| c.reply(resp.response)),
                Err(e) => {
                    leptos::logging::warn!("summary chat failed: {e}");
                    chat.update(SummaryChat::reply_failed);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (nfc_id, message);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide user-detail" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>"User Details"</h2>
                    <button class="btn dialog__close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                {move || {
                    let state = details.get();
                    if let Some(user) = state.data {
                        view! { <UserProfileCard user=user/> }.into_any()
                    } else if let Some(err) = state.error {
                        view! { <p class="user-detail__error">{err}</p> }.into_any()
                    } else {
                        view! { <p class="user-detail__loading">"Loading user details..."</p> }.into_any()
                    }
                }}
                <section class="user-detail__chat">
                    <h3>"AI Assistant"</h3>
                    <div class="user-detail__messages">
                        <For
                            each=move || chat.get().messages
                            key=|m| m.id.clone()
                            children=move |m| {
                                let user_side = m.role == ChatRole::User;
                                if user_side {
                                    view! {
                                        <div class="chat-message chat-message--user">{m.content}</div>
                                    }
                                        .into_any()
                                } else {
                                    let rendered = render_markdown_html(&m.content);
                                    view! {
                                        <div class="chat-message chat-message--assistant" inner_html=rendered></div>
                                    }
                                        .into_any()
                                }
                            }
                        />
                        <Show when=move || chat.get().loading>
                            <div class="chat-message chat-message--pending">"Thinking..."</div>
                        </Show>
                    </div>
                    <div class="user-detail__input-row">
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Ask about this user's access patterns..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    send.run(());
                                }
                            }
                        />
                        <button
                            class="btn btn--primary"
                            disabled=move || chat.get().loading || details.get().data.is_none()
                            on:click=move |_| send.run(())
                        >
                            "Send"
                        </button>
                    </div>
                </section>
            </div>
        </div>
    }
}

#[component]
fn UserProfileCard(user: UserDetails) -> impl IntoView {
    let status = if user.active { "Active" } else { "Inactive" };
    let history = user
        .access_history
        .iter()
        .take(HISTORY_ROWS)
        .map(|entry| {
            let granted = entry.success && entry.access_status == AccessStatus::Granted;
            let tx = entry
                .blockchain_data
                .as_ref()
                .map_or_else(|| "N/A".to_owned(), |b| short_address(&b.tx_hash));
            view! {
                <tr>
                    <td>{format!("{} {}", entry.access_time.date, entry.access_time.time)}</td>
                    <td class:status--granted=granted class:status--denied=!granted>
                        {entry.access_status.as_str()}
                    </td>
                    <td class="mono">{tx}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="user-detail__profile">
            <dl class="user-detail__fields">
                <dt>"Name"</dt>
                <dd>{user.name.clone()}</dd>
                <dt>"Email"</dt>
                <dd>{user.email.clone()}</dd>
                <dt>"Position"</dt>
                <dd>{user.position.clone()}</dd>
                <dt>"Access Level"</dt>
                <dd>{user.access_level.clone()}</dd>
                <dt>"NFC ID"</dt>
                <dd class="mono">{user.nfc_id.clone()}</dd>
                <dt>"Status"</dt>
                <dd>{status}</dd>
                <dt>"Last Access"</dt>
                <dd>
                    {format!(
                        "{} ({})",
                        or_placeholder(Some(&user.last_access), "Never"),
                        or_placeholder(Some(&user.last_gate_name), "N/A"),
                    )}
                </dd>
            </dl>
            <table class="table user-detail__history">
                <thead>
                    <tr>
                        <th>"Time"</th>
                        <th>"Status"</th>
                        <th>"Transaction"</th>
                    </tr>
                </thead>
                <tbody>{history}</tbody>
            </table>
        </div>
    }
}
