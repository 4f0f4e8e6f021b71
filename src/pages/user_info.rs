//! Superuser-only user management: stats, table, and delete.

use leptos::prelude::*;

use crate::app::Services;
use crate::components::toasts::{notify_error, notify_success};
use crate::net::types::UserRecord;
use crate::net::users::{delete_failure_message, delete_user, list_failure_message, list_users};
use crate::state::access::AccessGate;
use crate::state::notice::NoticeQueue;
use crate::state::users::{UserTable, format_timestamp};

/// Ask the browser for confirmation. Always declines outside the browser.
fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

#[component]
pub fn UserInfoPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let notices = expect_context::<RwSignal<NoticeQueue>>();
    let table = RwSignal::new(UserTable::default());

    // Gate on storage, not the signal: the signal may predate a logout in another tab.
    if AccessGate::read(&services.sessions()).can_see_superuser_tab() {
        let load_services = services.clone();
        leptos::task::spawn_local(async move {
            let token = load_services.sessions().read().token;
            match list_users(&load_services.api, token.as_deref()).await {
                Ok(users) => table.update(|t| t.loaded(users)),
                Err(e) => table.update(|t| t.failed(list_failure_message(&e))),
            }
        });
    } else {
        table.update(|t| t.failed("Access denied. Superuser privileges required."));
    }

    let on_delete = move |user: UserRecord| {
        let prompt = format!("Are you sure you want to delete user \"{}\"? This cannot be undone.", user.username);
        if !confirm(&prompt) {
            return;
        }
        let services = services.clone();
        leptos::task::spawn_local(async move {
            let token = services.sessions().read().token;
            match delete_user(&services.api, token.as_deref(), user.user_id).await {
                Ok(()) => {
                    table.update(|t| {
                        t.remove(user.user_id);
                    });
                    notify_success(notices, format!("User \"{}\" deleted successfully", user.username));
                }
                Err(e) => notify_error(notices, delete_failure_message(&e)),
            }
        });
    };

    let stat = |label: &'static str, value: Signal<usize>| {
        view! {
            <div class="stat-card">
                <span class="stat-number">{move || value.get()}</span>
                <span class="stat-label">{label}</span>
            </div>
        }
    };

    view! {
        <div class="user-info-container">
            <h2 class="user-info-title">"User Information"</h2>
            {move || {
                let state = table.get();
                if state.loading {
                    return view! { <div class="user-info-loading">"Loading users..."</div> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! { <div class="user-info-error">{error}</div> }.into_any();
                }
                let on_delete = on_delete.clone();
                view! {
                    <div class="user-stats">
                        {stat("Total Users", Signal::derive(move || table.with(|t| t.stats().total)))}
                        {stat("Google Users", Signal::derive(move || table.with(|t| t.stats().google)))}
                        {stat("Email Users", Signal::derive(move || table.with(|t| t.stats().email)))}
                        {stat("Superusers", Signal::derive(move || table.with(|t| t.stats().superusers)))}
                    </div>
                    <table class="users-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Username"</th>
                                <th>"Email"</th>
                                <th>"Signup Method"</th>
                                <th>"Superuser"</th>
                                <th>"Created At"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {state
                                .users
                                .into_iter()
                                .map(|user| {
                                    let on_delete = on_delete.clone();
                                    let target = user.clone();
                                    view! {
                                        <tr>
                                            <td>{user.user_id}</td>
                                            <td>{user.username}</td>
                                            <td>{user.email}</td>
                                            <td>{user.signup_method}</td>
                                            <td>{if user.is_superuser { "Yes" } else { "No" }}</td>
                                            <td>{format_timestamp(user.created_at.as_deref())}</td>
                                            <td>
                                                <button class="delete-button" on:click=move |_| on_delete(target.clone())>
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}
