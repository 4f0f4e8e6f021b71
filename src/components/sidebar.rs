//! Dashboard sidebar. Tabs come from the access gate so the superuser-only
//! entry disappears as soon as the session loses the flag.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::access::AccessGate;
use crate::state::session::Session;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();

    view! {
        <nav class="sidebar">
            <h2>"Dashboard"</h2>
            <ul>
                <For
                    each=move || AccessGate::from_session(&session.get()).dashboard_tabs()
                    key=|tab| *tab
                    let:tab
                >
                    <li class:active=move || location.pathname.get() == tab.path()>
                        <a href=tab.path()>{tab.label()}</a>
                    </li>
                </For>
            </ul>
        </nav>
    }
}
