//! User Management section: badge holders, their access levels and status.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::load_state::{LoadingPanel, RetryPanel};
use crate::components::stat_card::{Health, Metric, MetricGrid};
use crate::components::toast::{notify_api_error, notify_error, notify_success};
use crate::net::types::{AccessLevel, AccessLevelsResponse, PortalUser, UserDraft, UserListResponse};
use crate::state::remote::RemoteData;
use crate::state::toast::ToastState;
use crate::util::fetch::{load_into, reload_into, rerun};
use crate::util::format::{or_placeholder, timestamp};
use crate::util::table::matches_query;
use crate::util::validation::{optional_field, validate_user};

const LOAD_FAILED: &str = "Failed to load users. Please try again.";
const REFRESH_FAILED: &str = "Failed to refresh users. Please try again.";
const REFRESHED: &str = "Users refreshed successfully.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LevelFilter {
    #[default]
    All,
    Named(String),
}

impl LevelFilter {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == "All" { Self::All } else { Self::Named(raw.to_owned()) }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Named(name) => name,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ActiveFilter {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            _ => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn matches(self, active: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => active,
            Self::Inactive => !active,
        }
    }
}

/// Users matching the search box (name, email, position, NFC id), the access
/// level dropdown and the status dropdown.
pub fn filter_users(users: &[PortalUser], query: &str, level: &LevelFilter, active: ActiveFilter) -> Vec<PortalUser> {
    users
        .iter()
        .filter(|u| match level {
            LevelFilter::All => true,
            LevelFilter::Named(name) => u.access_level == *name,
        })
        .filter(|u| active.matches(u.active))
        .filter(|u| {
            matches_query(
                query,
                [Some(u.name.as_str()), Some(u.email.as_str()), Some(u.position.as_str()), u.nfc_id.as_deref()],
            )
        })
        .cloned()
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Known access levels that have at least one holder, in level order.
    pub per_level: Vec<(String, usize)>,
}

impl UserStats {
    pub fn of(users: &[PortalUser], levels: &[AccessLevel]) -> Self {
        let active = users.iter().filter(|u| u.active).count();
        let per_level = levels
            .iter()
            .filter_map(|level| {
                let count = users.iter().filter(|u| u.access_level == level.name).count();
                (count > 0).then(|| (level.name.clone(), count))
            })
            .collect();
        Self { total: users.len(), active, inactive: users.len() - active, per_level }
    }

    pub fn metrics(&self) -> Vec<Metric> {
        vec![
            Metric::new("Total Users", self.total.to_string(), "Registered badge holders"),
            Metric::new("Active", self.active.to_string(), "Allowed to badge in").with_health(Health::Online),
            Metric::new("Inactive", self.inactive.to_string(), "Suspended").with_health(Health::Error),
        ]
    }
}

/// Open create/edit form. `editing` holds the user id when editing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserEditor {
    pub editing: Option<String>,
    pub draft: UserDraft,
}

impl Default for UserEditor {
    fn default() -> Self {
        Self { editing: None, draft: UserDraft::new() }
    }
}

/// Trim the form and blank optional fields to `None` before sending.
pub fn normalize_draft(mut draft: UserDraft) -> UserDraft {
    draft.name = draft.name.trim().to_owned();
    draft.email = draft.email.trim().to_owned();
    draft.position = draft.position.trim().to_owned();
    draft.nfc_id = draft.nfc_id.as_deref().and_then(optional_field);
    draft.phone = draft.phone.as_deref().and_then(optional_field);
    draft.department = draft.department.as_deref().and_then(optional_field);
    draft
}

/// Payload flipping a user's active flag, and the label of the new status.
pub fn toggled(user: &PortalUser) -> (UserDraft, &'static str) {
    let mut draft = UserDraft::from_user(user);
    draft.active = !user.active;
    let label = if draft.active { "Active" } else { "Inactive" };
    (draft, label)
}

#[component]
pub fn UsersSection() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let users = RwSignal::new(RemoteData::<UserListResponse>::default());
    let levels = RwSignal::new(RemoteData::<AccessLevelsResponse>::default());
    let query = RwSignal::new(String::new());
    let level_filter = RwSignal::new(LevelFilter::All);
    let active_filter = RwSignal::new(ActiveFilter::All);
    let editor = RwSignal::new(None::<UserEditor>);
    let delete_target = RwSignal::new(None::<PortalUser>);
    let busy = RwSignal::new(false);

    let load = Callback::new(move |()| {
        load_into(users, crate::net::api::fetch_users, move |_| notify_error(toasts, LOAD_FAILED));
        load_into(levels, crate::net::api::fetch_access_levels, |e| {
            leptos::logging::warn!("access levels unavailable: {e}");
        });
    });
    load.run(());

    let on_refresh = move |_| {
        reload_into(
            users,
            crate::net::api::fetch_users,
            move || notify_success(toasts, REFRESHED),
            move |_| notify_error(toasts, REFRESH_FAILED),
        );
    };

    let all_users = move || users.get().data.map(|u| u.users).unwrap_or_default();
    let level_options = Signal::derive(move || levels.get().data.map(|l| l.access_levels).unwrap_or_default());
    let visible = Memo::new(move |_| {
        filter_users(&all_users(), &query.get(), &level_filter.get(), active_filter.get())
    });
    let stats = Memo::new(move |_| UserStats::of(&all_users(), &level_options.get()));
    let metrics = Signal::derive(move || stats.get().metrics());

    let save = Callback::new(move |()| {
        let Some(UserEditor { editing, draft }) = editor.get_untracked() else {
            return;
        };
        if let Err(message) = validate_user(&draft) {
            notify_error(toasts, message);
            return;
        }
        let draft = normalize_draft(draft);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (result, action) = match &editing {
                Some(id) => (crate::net::api::update_user(id, &draft).await, "update"),
                None => (crate::net::api::create_user(&draft).await.map(|_| ()), "create"),
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    notify_success(toasts, format!("User {} has been {action}d successfully.", draft.name));
                    editor.set(None);
                    rerun(load);
                }
                Err(e) => notify_api_error(toasts, &e, format!("Failed to {action} user. Please try again.")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (editing, draft);
        }
    });

    let toggle = Callback::new(move |user: PortalUser| {
        let (draft, label) = toggled(&user);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_user(&user.id, &draft).await {
                Ok(()) => {
                    notify_success(toasts, format!("User status changed to {label}."));
                    rerun(load);
                }
                Err(e) => notify_api_error(toasts, &e, "Failed to update user status. Please try again."),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, draft, label);
        }
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(user) = delete_target.get_untracked() else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_user(&user.id).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    notify_success(toasts, format!("User {} has been deleted successfully.", user.name));
                    delete_target.set(None);
                    rerun(load);
                }
                Err(e) => notify_api_error(toasts, &e, "Failed to delete user. Please try again."),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
        }
    });

    view! {
        <section class="section section--users">
            <div class="section__header">
                <div>
                    <h1>"User Management"</h1>
                    <p class="section__subtitle">"Badge holders, their access levels and status."</p>
                </div>
                <div class="section__actions">
                    <button class="btn" on:click=on_refresh>"Refresh"</button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| editor.set(Some(UserEditor::default()))
                    >
                        "+ Add User"
                    </button>
                </div>
            </div>

            {move || {
                let state = users.get();
                if state.data.is_none() {
                    if let Some(err) = state.failed_empty() {
                        return view! { <RetryPanel message=err.to_owned() on_retry=load/> }.into_any();
                    }
                    return view! { <LoadingPanel label="Loading users..."/> }.into_any();
                }
                view! {
                    <MetricGrid metrics=metrics/>
                    <div class="level-counts">
                        {move || {
                            stats
                                .get()
                                .per_level
                                .into_iter()
                                .map(|(name, count)| {
                                    view! {
                                        <span class="badge">{format!("{name}: {count}")}</span>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <div class="card">
                        <div class="table-toolbar">
                            <input
                                class="table-toolbar__search"
                                type="search"
                                placeholder="Search by name, email, position, or NFC ID..."
                                prop:value=move || query.get()
                                on:input=move |ev| query.set(event_target_value(&ev))
                            />
                            <select
                                class="table-toolbar__filter"
                                prop:value=move || level_filter.get().as_str().to_owned()
                                on:change=move |ev| level_filter.set(LevelFilter::parse(&event_target_value(&ev)))
                            >
                                <option value="All">"All Access Levels"</option>
                                {move || {
                                    level_options
                                        .get()
                                        .into_iter()
                                        .map(|l| {
                                            let name = l.name.clone();
                                            view! { <option value=name>{l.name}</option> }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                            <select
                                class="table-toolbar__filter"
                                prop:value=move || active_filter.get().as_str()
                                on:change=move |ev| active_filter.set(ActiveFilter::parse(&event_target_value(&ev)))
                            >
                                <option value="All">"All Statuses"</option>
                                <option value="active">"Active"</option>
                                <option value="inactive">"Inactive"</option>
                            </select>
                        </div>
                        <h2>{move || format!("Users ({})", visible.get().len())}</h2>
                        <UserTable users=visible editor=editor delete_target=delete_target on_toggle=toggle/>
                    </div>
                }
                    .into_any()
            }}

            <Show when=move || editor.get().is_some()>
                <UserDialog
                    editor=editor
                    levels=level_options
                    busy=busy.into()
                    on_save=save
                    on_cancel=Callback::new(move |()| editor.set(None))
                />
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <ConfirmDialog
                    title="Delete User"
                    message=Signal::derive(move || {
                        let name = delete_target.get().map(|u| u.name).unwrap_or_default();
                        format!("This will permanently delete {name}. This action cannot be undone.")
                    })
                    busy=busy.into()
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| delete_target.set(None))
                />
            </Show>
        </section>
    }
}

#[component]
fn UserTable(
    users: Memo<Vec<PortalUser>>,
    editor: RwSignal<Option<UserEditor>>,
    delete_target: RwSignal<Option<PortalUser>>,
    on_toggle: Callback<PortalUser>,
) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"User"</th>
                    <th>"Contact"</th>
                    <th>"Access Level"</th>
                    <th>"Status"</th>
                    <th>"Position"</th>
                    <th>"NFC UID"</th>
                    <th>"Last Login"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    users
                        .get()
                        .into_iter()
                        .map(|user| {
                            let for_edit = user.clone();
                            let for_toggle = user.clone();
                            let for_delete = user.clone();
                            let status = if user.active { "Active" } else { "Inactive" };
                            view! {
                                <tr>
                                    <td>
                                        <div>{user.name.clone()}</div>
                                        <div class="muted">
                                            {or_placeholder(user.department.as_deref(), "No department").to_owned()}
                                        </div>
                                    </td>
                                    <td>
                                        <div>{user.email.clone()}</div>
                                        <div class="muted">{or_placeholder(user.phone.as_deref(), "").to_owned()}</div>
                                    </td>
                                    <td><span class="badge">{user.access_level.clone()}</span></td>
                                    <td>
                                        <span class=format!("badge badge--{}", status.to_lowercase())>{status}</span>
                                    </td>
                                    <td>{user.position.clone()}</td>
                                    <td class="mono">{or_placeholder(user.nfc_id.as_deref(), "Not assigned").to_owned()}</td>
                                    <td>{user.last_access.as_deref().map_or_else(|| "Never".to_owned(), timestamp)}</td>
                                    <td class="table__actions">
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| {
                                                editor
                                                    .set(
                                                        Some(UserEditor {
                                                            editing: Some(for_edit.id.clone()),
                                                            draft: UserDraft::from_user(&for_edit),
                                                        }),
                                                    );
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| on_toggle.run(for_toggle.clone())
                                        >
                                            {if user.active { "Deactivate" } else { "Activate" }}
                                        </button>
                                        <button
                                            class="btn btn--small btn--danger"
                                            on:click=move |_| delete_target.set(Some(for_delete.clone()))
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

fn edit(editor: RwSignal<Option<UserEditor>>, apply: impl FnOnce(&mut UserDraft)) {
    editor.update(|e| {
        if let Some(e) = e {
            apply(&mut e.draft);
        }
    });
}

#[component]
fn UserDialog(
    editor: RwSignal<Option<UserEditor>>,
    levels: Signal<Vec<AccessLevel>>,
    busy: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = move || editor.get().is_some_and(|e| e.editing.is_some());
    let draft = move || editor.get().map(|e| e.draft).unwrap_or_default();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if is_edit() { "Edit User" } else { "Add User" }}</h2>
                <label class="dialog__label">
                    "Name *"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft().name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(editor, |d| d.name = value);
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Email *"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || draft().email
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(editor, |d| d.email = value);
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Position *"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft().position
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(editor, |d| d.position = value);
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Access Level *"
                    <select
                        class="dialog__input"
                        prop:value=move || draft().access_level
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            edit(editor, |d| d.access_level = value);
                        }
                    >
                        <option value="">"Select access level"</option>
                        {move || {
                            levels
                                .get()
                                .into_iter()
                                .map(|l| {
                                    let name = l.name.clone();
                                    view! { <option value=name>{l.name}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Department"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft().department.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(editor, |d| d.department = Some(value));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Phone"
                    <input
                        class="dialog__input"
                        type="tel"
                        prop:value=move || draft().phone.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(editor, |d| d.phone = Some(value));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "NFC UID"
                    <input
                        class="dialog__input mono"
                        type="text"
                        prop:value=move || draft().nfc_id.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(editor, |d| d.nfc_id = Some(value));
                        }
                    />
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || draft().active
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            edit(editor, |d| d.active = checked);
                        }
                    />
                    "Active"
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| on_save.run(())>
                        {move || if busy.get() { "Saving..." } else if is_edit() { "Save Changes" } else { "Create User" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
