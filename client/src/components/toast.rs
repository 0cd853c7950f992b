//! Toast host and helpers for queuing auto-dismissing notifications.

use leptos::prelude::*;

use crate::config::TOAST_TTL;
use crate::net::error::ApiError;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::poll::spawn_after;

/// Queue a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, title: &str, description: impl Into<String>) {
    let description = description.into();
    let Some(id) = toasts.try_update(|t| t.push(kind, title, description)) else {
        return;
    };
    spawn_after(TOAST_TTL, move || toasts.update(|t| t.dismiss(id)));
}

pub fn notify_success(toasts: RwSignal<ToastState>, description: impl Into<String>) {
    notify(toasts, ToastKind::Success, "Success", description);
}

pub fn notify_error(toasts: RwSignal<ToastState>, description: impl Into<String>) {
    notify(toasts, ToastKind::Error, "Error", description);
}

/// Error toast for a failed mutation, preferring the server's message.
/// `401`s are skipped; the REST client already redirected.
pub fn notify_api_error(toasts: RwSignal<ToastState>, err: &ApiError, fallback: impl Into<String>) {
    let message = match err {
        ApiError::Unauthorized => return,
        ApiError::Status { message, .. } => message.clone(),
        _ => fallback.into(),
    };
    notify_error(toasts, message);
}

/// Fixed-position stack of visible toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    view! {
                        <div class=format!("toast {}", t.kind.css_modifier())>
                            <div class="toast__body">
                                <strong class="toast__title">{t.title}</strong>
                                <p class="toast__description">{t.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|s| s.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
