//! Fixed dashboard header: brand, search, section buttons, profile, logout.

use leptos::prelude::*;

use super::search_bar::SearchBar;
use crate::state::auth::AuthState;
use crate::state::nav::{NavState, Section};
use crate::state::session::{SessionHandle, SessionRecord};

#[component]
pub fn DashboardHeader() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionHandle>();
    let profile = expect_context::<RwSignal<Option<SessionRecord>>>();
    let logging_out = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    let on_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        menu_open.set(false);
        let store = store.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let mut state = auth.get_untracked();
            crate::util::auth::sign_out(
                &mut state,
                store.as_ref(),
                crate::net::api::logout,
                crate::util::auth::go_to,
            )
            .await;
            auth.set(state);
            logging_out.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (store, auth);
        }
    };

    let admin_name = move || profile.get().map_or_else(|| "Admin".to_owned(), |p| p.name);
    let admin_email = move || profile.get().map(|p| p.email).unwrap_or_default();
    let initials = move || {
        profile
            .get()
            .and_then(|p| p.name.chars().next())
            .map_or_else(|| "A".to_owned(), |c| c.to_uppercase().collect())
    };

    view! {
        <header class="dashboard-header">
            <div class="dashboard-header__brand">
                <span class="dashboard-header__logo" aria-hidden="true">"⚡"</span>
                <span class="dashboard-header__name">"ChainGate"</span>
            </div>

            <div class="dashboard-header__search">
                <SearchBar/>
            </div>

            <nav class="dashboard-header__nav">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class="btn dashboard-header__nav-btn"
                                class:dashboard-header__nav-btn--active=move || nav.get().is_current(section)
                                title=section.title()
                                on:click=move |_| nav.update(|n| n.select(section))
                            >
                                {section.glyph()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <span class="dashboard-header__divider" aria-hidden="true"></span>

            <div class="dashboard-header__profile">
                <button
                    class="dashboard-header__avatar"
                    title="Account"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {initials}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="dashboard-header__menu">
                        <div class="dashboard-header__menu-label">
                            <span class="dashboard-header__menu-name">{admin_name}</span>
                            <span class="dashboard-header__menu-email">{admin_email}</span>
                        </div>
                        <button
                            class="btn btn--danger dashboard-header__logout"
                            disabled=move || logging_out.get()
                            on:click=on_logout.clone()
                        >
                            {move || if logging_out.get() { "Logging out..." } else { "Log out" }}
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
