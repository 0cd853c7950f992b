//! Placeholders shown while a section's first load is pending or has failed.

use leptos::prelude::*;

#[component]
pub fn LoadingPanel(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="load-panel">
            <span class="load-panel__spinner" aria-hidden="true"></span>
            <p>{label}</p>
        </div>
    }
}

/// Inline error with a "Try Again" action.
#[component]
pub fn RetryPanel(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="load-panel load-panel--error">
            <p class="load-panel__message">{message}</p>
            <button class="btn btn--primary" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </div>
    }
}
