//! NFC Tags section: reader inventory with create, edit, delete and export.

#[cfg(test)]
#[path = "devices_test.rs"]
mod devices_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::load_state::{LoadingPanel, RetryPanel};
use crate::components::stat_card::{Health, Metric, MetricGrid};
use crate::components::toast::{notify_api_error, notify_error, notify_success};
use crate::net::types::{AccessLevel, AccessLevelsResponse, Device, DeviceDraft, DeviceListResponse, DeviceStatus};
use crate::state::remote::RemoteData;
use crate::state::toast::ToastState;
use crate::util::csv_export::export_rows;
use crate::util::fetch::{load_into, reload_into, rerun};
use crate::util::format::{or_placeholder, timestamp};
use crate::util::table::matches_query;
use crate::util::validation::{generate_tag_id, random_roll, validate_device};

const LOAD_FAILED: &str = "Failed to load NFC tags and access levels. Please try again.";
const REFRESH_FAILED: &str = "Failed to refresh NFC tags and access levels. Please try again.";
const REFRESHED: &str = "NFC tags and access levels refreshed successfully.";
const NO_LEVELS: &str = "No Access Levels";
const BADGE_LIMIT: usize = 3;

pub const CSV_HEADERS: [&str; 8] =
    ["Tag ID", "Name", "Location", "Status", "Last Restart", "Last Scanned", "Total Scans", "Access Levels"];

/// Status dropdown value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(DeviceStatus),
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Self {
        DeviceStatus::parse(raw).map_or(Self::All, Self::Only)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.as_str(),
        }
    }

    pub fn matches(self, status: DeviceStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Devices matching the search box (name, tag id, location, access levels)
/// and the status filter.
pub fn filter_devices(devices: &[Device], query: &str, status: StatusFilter) -> Vec<Device> {
    devices
        .iter()
        .filter(|d| status.matches(d.status))
        .filter(|d| {
            let fields = [d.name.as_deref(), d.tag_id.as_deref(), d.location.as_deref()]
                .into_iter()
                .chain(d.assigned_to.iter().map(|level| Some(level.as_str())));
            matches_query(query, fields)
        })
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub maintenance: usize,
}

impl DeviceStats {
    pub fn of(devices: &[Device]) -> Self {
        let count = |status: DeviceStatus| devices.iter().filter(|d| d.status == status).count();
        Self {
            total: devices.len(),
            active: count(DeviceStatus::Active),
            inactive: count(DeviceStatus::Inactive),
            maintenance: count(DeviceStatus::Maintenance),
        }
    }

    pub fn metrics(self) -> Vec<Metric> {
        vec![
            Metric::new("Total Tags", self.total.to_string(), "Registered readers"),
            Metric::new("Active", self.active.to_string(), "Scanning normally").with_health(Health::Online),
            Metric::new("Inactive", self.inactive.to_string(), "Switched off").with_health(Health::Error),
            Metric::new("Maintenance", self.maintenance.to_string(), "Under service").with_health(Health::Warning),
        ]
    }
}

/// Badges shown for a device's access levels plus the hidden remainder.
pub fn level_badges(assigned: &[String]) -> (Vec<String>, Option<usize>) {
    if assigned.len() <= BADGE_LIMIT {
        return (assigned.to_vec(), None);
    }
    (assigned[..2].to_vec(), Some(assigned.len() - 2))
}

pub fn csv_rows(devices: &[Device]) -> Vec<Vec<String>> {
    devices
        .iter()
        .map(|d| {
            vec![
                d.tag_id.clone().unwrap_or_default(),
                d.name.clone().unwrap_or_default(),
                d.location.clone().unwrap_or_default(),
                d.status.as_str().to_owned(),
                or_placeholder(d.last_restart.as_deref(), "Never restarted").to_owned(),
                or_placeholder(d.last_scanned.as_deref(), "Never").to_owned(),
                d.total_scans.unwrap_or(0).to_string(),
                if d.assigned_to.is_empty() { NO_LEVELS.to_owned() } else { d.assigned_to.join("; ") },
            ]
        })
        .collect()
}

/// Open create/edit form. `editing` holds the device id when editing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeviceEditor {
    pub editing: Option<String>,
    pub draft: DeviceDraft,
}

#[component]
pub fn DevicesSection() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let devices = RwSignal::new(RemoteData::<DeviceListResponse>::default());
    let levels = RwSignal::new(RemoteData::<AccessLevelsResponse>::default());
    let query = RwSignal::new(String::new());
    let status = RwSignal::new(StatusFilter::All);
    let editor = RwSignal::new(None::<DeviceEditor>);
    let delete_target = RwSignal::new(None::<Device>);
    let busy = RwSignal::new(false);

    let load = Callback::new(move |()| {
        load_into(devices, crate::net::api::fetch_devices, move |_| notify_error(toasts, LOAD_FAILED));
        load_into(levels, crate::net::api::fetch_access_levels, |e| {
            leptos::logging::warn!("access levels unavailable: {e}");
        });
    });
    load.run(());

    let on_refresh = move |_| {
        reload_into(
            devices,
            crate::net::api::fetch_devices,
            move || notify_success(toasts, REFRESHED),
            move |_| notify_error(toasts, REFRESH_FAILED),
        );
        load_into(levels, crate::net::api::fetch_access_levels, |_| {});
    };

    let all_devices = move || devices.get().data.map(|d| d.devices).unwrap_or_default();
    let visible = Memo::new(move |_| filter_devices(&all_devices(), &query.get(), status.get()));
    let stats = Signal::derive(move || DeviceStats::of(&all_devices()).metrics());
    let level_options = Signal::derive(move || levels.get().data.map(|l| l.access_levels).unwrap_or_default());

    let on_export = move |_| {
        let rows = csv_rows(&visible.get_untracked());
        match export_rows("nfc-tags", &CSV_HEADERS, rows) {
            Ok(count) => notify_success(toasts, format!("Exported {count} NFC tags to CSV file.")),
            Err(e) => notify_error(toasts, e.to_string()),
        }
    };

    let save = Callback::new(move |()| {
        let Some(DeviceEditor { editing, mut draft }) = editor.get_untracked() else {
            return;
        };
        let existing = all_devices_untracked(devices);
        if let Err(message) = validate_device(&draft, &existing, editing.as_deref()) {
            notify_error(toasts, message);
            return;
        }
        draft.tag_id = draft.tag_id.trim().to_owned();
        if editing.is_none() && draft.tag_id.is_empty() {
            draft.tag_id = generate_tag_id(&existing, random_roll);
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (result, action) = match &editing {
                Some(id) => (crate::net::api::update_device(id, &draft).await, "update"),
                None => (crate::net::api::create_device(&draft).await.map(|_| ()), "create"),
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    notify_success(toasts, format!("NFC Tag \"{}\" has been {action}d successfully.", draft.name));
                    editor.set(None);
                    rerun(load);
                }
                Err(e) => notify_api_error(toasts, &e, format!("Failed to {action} tag. Please try again.")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (editing, draft);
        }
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(device) = delete_target.get_untracked() else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_device(&device.id).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    let name = device.name.unwrap_or_default();
                    notify_success(toasts, format!("NFC Tag \"{name}\" has been deleted successfully."));
                    delete_target.set(None);
                    rerun(load);
                }
                Err(e) => notify_api_error(toasts, &e, "Failed to delete tag. Please try again."),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = device;
        }
    });

    view! {
        <section class="section section--devices">
            <div class="section__header">
                <div>
                    <h1>"NFC Tags"</h1>
                    <p class="section__subtitle">"Manage NFC readers and the access levels they enforce."</p>
                </div>
                <div class="section__actions">
                    <button class="btn" on:click=on_refresh>"Refresh"</button>
                    <button class="btn" on:click=on_export>"Export CSV"</button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| editor.set(Some(DeviceEditor::default()))
                    >
                        "+ Add Tag"
                    </button>
                </div>
            </div>

            {move || {
                let state = devices.get();
                if state.data.is_none() {
                    if let Some(err) = state.failed_empty() {
                        return view! { <RetryPanel message=err.to_owned() on_retry=load/> }.into_any();
                    }
                    return view! { <LoadingPanel label="Loading NFC tags..."/> }.into_any();
                }
                view! {
                    <MetricGrid metrics=stats/>
                    <div class="card">
                        <div class="table-toolbar">
                            <input
                                class="table-toolbar__search"
                                type="search"
                                placeholder="Search by name, tag ID, location, or access level..."
                                prop:value=move || query.get()
                                on:input=move |ev| query.set(event_target_value(&ev))
                            />
                            <select
                                class="table-toolbar__filter"
                                prop:value=move || status.get().as_str()
                                on:change=move |ev| status.set(StatusFilter::parse(&event_target_value(&ev)))
                            >
                                <option value="All">"All Statuses"</option>
                                {DeviceStatus::ALL
                                    .into_iter()
                                    .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </div>
                        <h2>{move || format!("NFC Tags ({})", visible.get().len())}</h2>
                        <DeviceTable devices=visible editor=editor delete_target=delete_target/>
                    </div>
                }
                    .into_any()
            }}

            <Show when=move || editor.get().is_some()>
                <DeviceDialog
                    editor=editor
                    levels=level_options
                    busy=busy.into()
                    on_save=save
                    on_cancel=Callback::new(move |()| editor.set(None))
                />
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <ConfirmDialog
                    title="Delete NFC Tag"
                    message=Signal::derive(move || {
                        let name = delete_target.get().and_then(|d| d.name).unwrap_or_default();
                        format!("This will permanently delete \"{name}\". This action cannot be undone.")
                    })
                    busy=busy.into()
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| delete_target.set(None))
                />
            </Show>
        </section>
    }
}

fn all_devices_untracked(devices: RwSignal<RemoteData<DeviceListResponse>>) -> Vec<Device> {
    devices.get_untracked().data.map(|d| d.devices).unwrap_or_default()
}

#[component]
fn DeviceTable(
    devices: Memo<Vec<Device>>,
    editor: RwSignal<Option<DeviceEditor>>,
    delete_target: RwSignal<Option<Device>>,
) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Tag ID"</th>
                    <th>"Name"</th>
                    <th>"Location"</th>
                    <th>"Status"</th>
                    <th>"Last Scanned"</th>
                    <th>"Total Scans"</th>
                    <th>"Access Levels"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    devices
                        .get()
                        .into_iter()
                        .map(|device| {
                            let (badges, more) = level_badges(&device.assigned_to);
                            let for_edit = device.clone();
                            let for_delete = device.clone();
                            view! {
                                <tr>
                                    <td class="mono">{device.tag_id.clone().unwrap_or_default()}</td>
                                    <td>{device.name.clone().unwrap_or_default()}</td>
                                    <td>{device.location.clone().unwrap_or_default()}</td>
                                    <td>
                                        <span class=format!(
                                            "badge badge--{}",
                                            device.status.as_str().to_lowercase(),
                                        )>{device.status.as_str()}</span>
                                    </td>
                                    <td>
                                        {device
                                            .last_scanned
                                            .as_deref()
                                            .map_or_else(|| "Never".to_owned(), timestamp)}
                                    </td>
                                    <td>{device.total_scans.unwrap_or(0)}</td>
                                    <td>
                                        {if badges.is_empty() {
                                            view! { <span class="muted">{NO_LEVELS}</span> }.into_any()
                                        } else {
                                            view! {
                                                {badges
                                                    .into_iter()
                                                    .map(|b| view! { <span class="badge">{b}</span> })
                                                    .collect::<Vec<_>>()}
                                                {more.map(|n| view! { <span class="badge badge--more">{format!("+{n} more")}</span> })}
                                            }
                                                .into_any()
                                        }}
                                    </td>
                                    <td class="table__actions">
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| {
                                                editor
                                                    .set(
                                                        Some(DeviceEditor {
                                                            editing: Some(for_edit.id.clone()),
                                                            draft: DeviceDraft::from_device(&for_edit),
                                                        }),
                                                    );
                                            }
                                        >
                                            "Edit"
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

fn edit(editor: RwSignal<Option<DeviceEditor>>, apply: impl FnOnce(&mut DeviceDraft)) {
    editor.update(|e| {
        if let Some(e) = e {
            apply(&mut e.draft);
        }
    });
}

#[component]
fn DeviceDialog(
    editor: RwSignal<Option<DeviceEditor>>,
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
                <h2>{move || if is_edit() { "Edit NFC Tag" } else { "Add NFC Tag" }}</h2>
                <label class="dialog__label">
                    "Tag ID"
                    <input
                        class="dialog__input mono"
                        type="text"
                        placeholder="Leave blank to generate"
                        disabled=is_edit
                        prop:value=move || draft().tag_id
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(editor, |d| d.tag_id = value);
                        }
                    />
                </label>
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
                    "Location *"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft().location
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(editor, |d| d.location = value);
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Status"
                    <select
                        class="dialog__input"
                        prop:value=move || draft().status.as_str()
                        on:change=move |ev| {
                            if let Some(status) = DeviceStatus::parse(&event_target_value(&ev)) {
                                edit(editor, |d| d.status = status);
                            }
                        }
                    >
                        {DeviceStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <fieldset class="dialog__fieldset">
                    <legend>"Access Levels"</legend>
                    {move || {
                        levels
                            .get()
                            .into_iter()
                            .map(|level| {
                                let name = level.name.clone();
                                let checked_name = level.name.clone();
                                view! {
                                    <label class="dialog__check">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || draft().assigned_to.contains(&checked_name)
                                            on:change=move |_| {
                                                let name = name.clone();
                                                edit(
                                                    editor,
                                                    |d| {
                                                        if let Some(pos) = d.assigned_to.iter().position(|n| *n == name) {
                                                            d.assigned_to.remove(pos);
                                                        } else {
                                                            d.assigned_to.push(name);
                                                        }
                                                    },
                                                );
                                            }
                                        />
                                        {level.name}
                                        <span class="muted">{level.description}</span>
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </fieldset>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| on_save.run(())
                    >
                        {move || if is_edit() { "Save Changes" } else { "Create Tag" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
