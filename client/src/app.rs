//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_gate::AuthProvider;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::{
    auth::AuthState,
    nav::NavState,
    session::{SessionRecord, default_store},
    toast::ToastState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, auth gate state, the header profile, section
/// navigation and the toast queue, then mounts the gated router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = default_store();
    let auth = RwSignal::new(AuthState::default());
    let profile = RwSignal::new(None::<SessionRecord>);

    // Header profile follows the stored record, including clears triggered by
    // a 401 from any request.
    let initial_store = store.clone();
    Effect::new(move || {
        profile.set(initial_store.load().ok().flatten());
    });
    let subscription = store.subscribe(Box::new(move |record: Option<&SessionRecord>| profile.set(record.cloned())));
    let cleanup_store = store.clone();
    on_cleanup(move || cleanup_store.unsubscribe(subscription));

    provide_context(store);
    provide_context(auth);
    provide_context(profile);
    provide_context(RwSignal::new(NavState::default()));
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/chaingate-portal.css"/>
        <Title text="ChainGate"/>

        <Router>
            <AuthProvider>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                </Routes>
            </AuthProvider>
        </Router>
    }
}
