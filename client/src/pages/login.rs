//! Admin sign-in page.
//!
//! The only route that renders without a session. A successful sign-in stores
//! the session record and reloads into the dashboard.

use leptos::prelude::*;

use crate::state::session::SessionHandle;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionHandle>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let store = store.clone();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::util::auth::sign_in(
                store.as_ref(),
                &email_value,
                &password_value,
                crate::net::api::login,
                crate::util::auth::go_to,
            )
            .await;
            if let Err(message) = result {
                error.set(Some(message));
                busy.set(false);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (store, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ChainGate"</h1>
                <p class="login-card__subtitle">"Admin Portal"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="admin@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
