//! "Add Todo" tab.

#[cfg(test)]
#[path = "add_todo_test.rs"]
mod add_todo_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::Services;
use crate::components::toasts::{notify_error, notify_success};
use crate::error::ApiError;
use crate::net::todos::create_todo;
use crate::net::types::TodoDraft;
use crate::state::access::DashboardTab;
use crate::state::notice::NoticeQueue;

fn create_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::MissingField("title") => "Title is required".to_owned(),
        other => format!("Failed to add todo: {}", other.user_message()),
    }
}

#[component]
pub fn AddTodoPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let notices = expect_context::<RwSignal<NoticeQueue>>();
    let navigate = use_navigate();
    let draft = RwSignal::new(TodoDraft::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if draft.with(|d| d.title.trim().is_empty()) {
            notify_error(notices, create_failure_message(&ApiError::MissingField("title")));
            return;
        }
        busy.set(true);
        let body = draft.get();
        let services = services.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let token = services.sessions().read().token;
            match create_todo(&services.api, token.as_deref(), &body).await {
                Ok(()) => {
                    draft.set(TodoDraft::default());
                    notify_success(notices, "Todo added successfully!");
                    navigate(DashboardTab::Todos.path(), NavigateOptions::default());
                }
                Err(e) => notify_error(notices, create_failure_message(&e)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="add-todo">
            <h2>"Add New Todo"</h2>
            <form class="add-todo__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || busy.get()>"Add Todo"</button>
            </form>
        </div>
    }
}
