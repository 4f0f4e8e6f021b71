//! Authenticated dashboard shell: sidebar plus nested tab routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/dashboard/*` route renders inside this layout, so the unauthenticated
//! redirect is installed once here rather than per tab.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::state::access::AccessGate;
use crate::state::session::Session;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    install_unauth_redirect(session, "/dashboard", use_navigate());

    view! {
        <Show
            when=move || AccessGate::from_session(&session.get()).is_logged_in()
            fallback=|| view! { <div class="dashboard-loading">"Redirecting to login..."</div> }
        >
            <div class="dashboard-container">
                <Sidebar/>
                <main class="dashboard-content">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
