//! Authenticated dashboard page: fixed header plus the selected section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation between sections is local state, not routing, so switching
//! sections never re-runs the session check. The whole page sits behind one
//! `ProtectedRoute`.

use leptos::prelude::*;

use crate::components::auth_gate::ProtectedRoute;
use crate::components::dashboard_header::DashboardHeader;
use crate::components::toast::ToastHost;
use crate::sections::{
    blockchain::BlockchainSection, devices::DevicesSection, logs::LogsSection, overview::OverviewSection,
    settings::SettingsSection, users::UsersSection,
};
use crate::state::nav::{NavState, Section};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let current = Memo::new(move |_| nav.get().current);

    view! {
        <ProtectedRoute>
            <div class="dashboard">
                <DashboardHeader/>
                <main class="dashboard__main">
                    {move || {
                        match current.get() {
                            Section::Overview => view! { <OverviewSection/> }.into_any(),
                            Section::NfcTags => view! { <DevicesSection/> }.into_any(),
                            Section::VerificationLogs => view! { <LogsSection/> }.into_any(),
                            Section::UserManagement => view! { <UsersSection/> }.into_any(),
                            Section::BlockchainStatus => view! { <BlockchainSection/> }.into_any(),
                            Section::Settings => view! { <SettingsSection/> }.into_any(),
                        }
                    }}
                </main>
                <ToastHost/>
            </div>
        </ProtectedRoute>
    }
}
