//! Auth-gate transitions shared by the route wrapper, login page, header and
//! REST client.
//!
//! SYSTEM CONTEXT
//! ==============
//! There are two enforcement points: the render-time route check and the
//! per-request `401` check. Both end in the same redirect to the login route
//! after clearing the session record, so they can never drift apart.
//!
//! The flows take the store and the redirect action as parameters. In the
//! browser the redirect is [`go_to`]; tests pass a recorder.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use leptos::logging::{error, warn};
use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, LoginResponse};
use crate::state::auth::{AuthState, DASHBOARD_ROUTE, GateOutcome, LOGIN_ROUTE, is_login_route};
use crate::state::session::{SessionHandle, SessionRecord, SessionStore};
use crate::util::validation::validate_login_input;

/// Run the gate check for `route`, updating `state` in place.
///
/// On the deny path the stale record is cleared and `redirect` is invoked
/// before `checking` is released.
pub fn check_route<R>(state: &mut AuthState, route: &str, store: &dyn SessionStore, redirect: R) -> GateOutcome
where
    R: FnOnce(&str),
{
    if is_login_route(route) {
        state.checking = false;
        return GateOutcome::Public;
    }

    match store.load() {
        Ok(Some(record)) => {
            *state = AuthState::signed_in(&record);
            GateOutcome::Authenticated
        }
        Ok(None) => {
            deny(state, store, redirect);
            GateOutcome::Redirected
        }
        Err(e) => {
            warn!("session record rejected: {e}");
            deny(state, store, redirect);
            GateOutcome::Redirected
        }
    }
}

fn deny<R>(state: &mut AuthState, store: &dyn SessionStore, redirect: R)
where
    R: FnOnce(&str),
{
    state.authenticated = false;
    state.admin = false;
    store.clear();
    redirect(LOGIN_ROUTE);
    state.checking = false;
}

/// Drop the local session and send the viewer to the login route.
pub fn resolve_unauthorized<R>(store: &dyn SessionStore, redirect: R)
where
    R: FnOnce(&str),
{
    store.clear();
    redirect(LOGIN_ROUTE);
}

/// Pass `result` through, turning `Unauthorized` into the login redirect.
///
/// # Errors
///
/// Returns the original error unchanged.
pub fn enforce_session<T, R>(result: Result<T, ApiError>, store: &dyn SessionStore, redirect: R) -> Result<T, ApiError>
where
    R: FnOnce(&str),
{
    if let Err(ApiError::Unauthorized) = &result {
        warn!("request rejected with 401, redirecting to login");
        resolve_unauthorized(store, redirect);
    }
    result
}

/// Exchange credentials, persist the session record, and continue to the
/// dashboard.
///
/// Nothing is persisted and `navigate` is not called on failure.
///
/// # Errors
///
/// Returns a user-facing message for validation, credential, or network
/// failures.
pub async fn sign_in<X, Fut, N>(
    store: &dyn SessionStore,
    email: &str,
    password: &str,
    exchange: X,
    navigate: N,
) -> Result<SessionRecord, String>
where
    X: FnOnce(LoginRequest) -> Fut,
    Fut: Future<Output = Result<LoginResponse, ApiError>>,
    N: FnOnce(&str),
{
    let request = validate_login_input(email, password).map_err(str::to_owned)?;
    let response = exchange(request).await.map_err(|e| login_error_message(&e))?;
    let record = SessionRecord::from_login(&response);
    store.save(&record).map_err(|e| {
        error!("failed to persist session record: {e}");
        "Could not start a session. Please try again.".to_owned()
    })?;
    navigate(DASHBOARD_ROUTE);
    Ok(record)
}

fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } => message.clone(),
        ApiError::Unauthorized => "Invalid email or password".to_owned(),
        ApiError::Network(_) | ApiError::Decode(_) | ApiError::Unavailable => {
            "Login failed. Please try again.".to_owned()
        }
    }
}

/// Best-effort remote logout followed by unconditional local cleanup.
///
/// Returns whether the remote call succeeded. Safe to call repeatedly.
pub async fn sign_out<X, Fut, R>(state: &mut AuthState, store: &dyn SessionStore, remote: X, redirect: R) -> bool
where
    X: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
    R: FnOnce(&str),
{
    let remote_ok = match remote().await {
        Ok(()) => true,
        Err(e) => {
            warn!("logout request failed, clearing session locally: {e}");
            false
        }
    };
    store.clear();
    *state = AuthState::signed_out();
    redirect(LOGIN_ROUTE);
    remote_ok
}

/// Browser navigation used by every redirect in the app.
pub fn go_to(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Re-run the gate check whenever `pathname` changes.
pub fn install_route_check(auth: RwSignal<AuthState>, store: SessionHandle, pathname: Memo<String>) {
    Effect::new(move || {
        let route = pathname.get();
        let mut next = auth.get_untracked();
        check_route(&mut next, &route, store.as_ref(), go_to);
        auth.set(next);
    });
}
