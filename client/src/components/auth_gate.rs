//! Route-level auth gate components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` wraps the whole route tree and re-runs the session check on
//! every navigation. `ProtectedRoute` wraps individual subtrees and decides,
//! from the shared `AuthState`, whether they may paint.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::{AuthState, GuardView, is_login_route};
use crate::state::session::SessionHandle;
use crate::util::auth::install_route_check;

/// Blocks rendering of protected routes until the session check for the
/// current route has resolved. The login route renders immediately.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionHandle>();
    let pathname = use_location().pathname;

    install_route_check(auth, store, pathname);

    let ready = move || is_login_route(&pathname.get()) || !auth.get().checking;

    view! {
        <Show when=ready fallback=|| view! { <GateSplash/> }>
            {children()}
        </Show>
    }
}

/// Renders `children` only for an authenticated viewer, and only for an admin
/// when `require_admin` is set. Never redirects; the provider owns that.
#[component]
pub fn ProtectedRoute(#[prop(optional)] require_admin: bool, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let guard = Memo::new(move |_| GuardView::resolve(&auth.get(), require_admin));

    move || match guard.get() {
        GuardView::Loading => view! { <GateSplash/> }.into_any(),
        GuardView::Denied => view! { <AccessDenied/> }.into_any(),
        GuardView::Hidden => ().into_any(),
        GuardView::Content => children().into_any(),
    }
}

#[component]
fn GateSplash() -> impl IntoView {
    view! {
        <div class="gate-splash">
            <span class="gate-splash__spinner" aria-hidden="true"></span>
            <p>"Checking session..."</p>
        </div>
    }
}

#[component]
fn AccessDenied() -> impl IntoView {
    view! {
        <div class="gate-denied">
            <h2>"Access Denied"</h2>
            <p>"You need administrator privileges to view this page."</p>
        </div>
    }
}
