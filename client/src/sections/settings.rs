//! Settings section: organization, blockchain and system configuration plus
//! the admin password form.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::components::load_state::{LoadingPanel, RetryPanel};
use crate::components::toast::{notify, notify_api_error, notify_error};
use crate::net::types::Settings;
use crate::state::remote::RemoteData;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::fetch::reload_into;
use crate::util::validation::validate_password_change;

const LOAD_FAILED: &str = "Failed to load settings. Please try again.";
const SAVE_FAILED: &str = "Failed to save settings. Please try again.";

/// Password change inputs. There is no server endpoint for this form; a valid
/// submission is acknowledged locally and the fields are cleared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current: String,
    pub new_password: String,
    pub confirm: String,
}

impl PasswordForm {
    /// Validate and clear on success. Fields are left untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns the message to show when the passwords differ or are too short.
    pub fn submit(&mut self) -> Result<(), &'static str> {
        validate_password_change(&self.new_password, &self.confirm)?;
        *self = Self::default();
        Ok(())
    }
}

#[component]
pub fn SettingsSection() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let remote = RwSignal::new(RemoteData::<Settings>::default());
    let form = RwSignal::new(Settings::default());
    let password = RwSignal::new(PasswordForm::default());
    let saving = RwSignal::new(false);

    let load = Callback::new(move |()| {
        reload_into(
            remote,
            crate::net::api::fetch_settings,
            move || {
                if let Some(settings) = remote.get_untracked().data {
                    form.set(settings);
                }
            },
            move |_| notify_error(toasts, LOAD_FAILED),
        );
    });
    load.run(());

    let on_save = move |_| {
        let settings = form.get_untracked();
        saving.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::save_settings(&settings).await;
            saving.set(false);
            match result {
                Ok(()) => notify(
                    toasts,
                    ToastKind::Success,
                    "Settings saved",
                    "Your settings have been updated successfully.",
                ),
                Err(e) => notify_api_error(toasts, &e, SAVE_FAILED),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = settings;
        }
    };

    let on_password = move |_| {
        match password.try_update(PasswordForm::submit) {
            Some(Ok(())) => notify(
                toasts,
                ToastKind::Success,
                "Password updated",
                "Your password has been changed successfully.",
            ),
            Some(Err(message)) => notify_error(toasts, message),
            None => {}
        }
    };

    view! {
        <section class="section section--settings">
            <div class="section__header">
                <div>
                    <h1>"Settings"</h1>
                    <p class="section__subtitle">"Organization, blockchain and system configuration."</p>
                </div>
                <div class="section__actions">
                    <button class="btn btn--primary" disabled=move || saving.get() on:click=on_save>
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </div>
            </div>

            {move || {
                let state = remote.get();
                if state.data.is_none() {
                    if let Some(err) = state.failed_empty() {
                        return view! { <RetryPanel message=err.to_owned() on_retry=load/> }.into_any();
                    }
                    return view! { <LoadingPanel label="Loading settings..."/> }.into_any();
                }
                view! {
                    <div class="settings-grid">
                        <div class="card">
                            <h2>"Organization"</h2>
                            <label class="dialog__label">
                                "Organization Name"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || form.get().organization.name
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|s| s.organization.name = value);
                                    }
                                />
                            </label>
                            <label class="dialog__label">
                                "Email"
                                <input
                                    class="dialog__input"
                                    type="email"
                                    prop:value=move || form.get().organization.contact_email
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|s| s.organization.contact_email = value);
                                    }
                                />
                            </label>
                        </div>

                        <div class="card">
                            <h2>"Blockchain"</h2>
                            <label class="dialog__check">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.get().blockchain.enabled
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        form.update(|s| s.blockchain.enabled = checked);
                                    }
                                />
                                "Enable Blockchain"
                            </label>
                            <label class="dialog__label">
                                "Network Endpoint"
                                <input
                                    class="dialog__input mono"
                                    type="url"
                                    prop:value=move || form.get().blockchain.network_endpoint
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|s| s.blockchain.network_endpoint = value);
                                    }
                                />
                            </label>
                        </div>

                        <div class="card">
                            <h2>"Change Password"</h2>
                            <label class="dialog__label">
                                "Current Password"
                                <input
                                    class="dialog__input"
                                    type="password"
                                    placeholder="Enter your current password"
                                    prop:value=move || password.get().current
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        password.update(|p| p.current = value);
                                    }
                                />
                            </label>
                            <label class="dialog__label">
                                "New Password"
                                <input
                                    class="dialog__input"
                                    type="password"
                                    placeholder="Enter new password"
                                    prop:value=move || password.get().new_password
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        password.update(|p| p.new_password = value);
                                    }
                                />
                            </label>
                            <label class="dialog__label">
                                "Confirm New Password"
                                <input
                                    class="dialog__input"
                                    type="password"
                                    placeholder="Confirm new password"
                                    prop:value=move || password.get().confirm
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        password.update(|p| p.confirm = value);
                                    }
                                />
                            </label>
                            <p class="muted">"Use at least 8 characters."</p>
                            <button class="btn btn--primary" on:click=on_password>"Save Password"</button>
                        </div>

                        <div class="card">
                            <h2>"System"</h2>
                            <label class="dialog__check">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.get().system.maintenance_mode
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        form.update(|s| s.system.maintenance_mode = checked);
                                    }
                                />
                                "Maintenance Mode"
                            </label>
                            <p class="muted">"Gates reject all badges while maintenance mode is on."</p>
                        </div>
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
