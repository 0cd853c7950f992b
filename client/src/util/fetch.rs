//! Spawn a fetch into a [`RemoteData`] signal.

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::remote::RemoteData;

/// Start `fetch`, applying its result only if no newer request was started on
/// `target` meanwhile. `on_error` runs for applied failures other than `401`,
/// which the REST client already turned into a redirect.
pub fn load_into<T, F, Fut, E>(target: RwSignal<RemoteData<T>>, fetch: F, on_error: E)
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    E: FnOnce(&ApiError) + 'static,
{
    reload_into(target, fetch, || {}, on_error);
}

/// [`load_into`] with an extra hook for an applied success.
pub fn reload_into<T, F, Fut, S, E>(target: RwSignal<RemoteData<T>>, fetch: F, on_ok: S, on_error: E)
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    S: FnOnce() + 'static,
    E: FnOnce(&ApiError) + 'static,
{
    let Some(token) = target.try_update(RemoteData::begin) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fetch().await;
        let failure = result.as_ref().err().cloned();
        let applied = target.try_update(|d| d.resolve(token, result)).unwrap_or(false);
        if !applied {
            return;
        }
        match failure {
            None => on_ok(),
            Some(err) if err.is_unauthorized() => {}
            Some(err) => {
                leptos::logging::warn!("load failed: {err}");
                on_error(&err);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, fetch, on_ok, on_error);
    }
}

/// Run a section's reload callback from a task that may outlive the section.
/// Returns `false` when the owning view was already torn down.
pub fn rerun(load: Callback<()>) -> bool {
    load.try_run(()).is_some()
}
