//! Todo list with inline edit, status toggle, and delete.
//!
//! Mounted both as the dashboard "Todos" tab and at the top-level
//! `/all-products` route; the latter installs its own login redirect since it
//! sits outside the dashboard layout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::Services;
use crate::components::toasts::{notify_error, notify_success};
use crate::net::todos::{delete_todo, list_todos, set_todo_status, update_todo};
use crate::net::types::Todo;
use crate::state::notice::NoticeQueue;
use crate::state::session::Session;
use crate::state::todos::TodoList;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn TodosPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let notices = expect_context::<RwSignal<NoticeQueue>>();
    let list = RwSignal::new(TodoList::default());

    let load_services = services.clone();
    leptos::task::spawn_local(async move {
        let token = load_services.sessions().read().token;
        match list_todos(&load_services.api, token.as_deref()).await {
            Ok(todos) => list.update(|l| l.loaded(todos)),
            Err(e) => {
                leptos::logging::warn!("todo load failed: {e}");
                list.update(|l| l.failed("Failed to load todos"));
            }
        }
    });

    let save_services = services.clone();
    let on_save = move |id: i64| {
        let Some(draft) = list.with_untracked(|l| l.draft().cloned()) else {
            return;
        };
        let services = save_services.clone();
        leptos::task::spawn_local(async move {
            let token = services.sessions().read().token;
            match update_todo(&services.api, token.as_deref(), id, &draft).await {
                Ok(saved) => {
                    list.update(|l| l.apply_saved(saved));
                    notify_success(notices, "Todo updated successfully!");
                }
                Err(e) => notify_error(notices, format!("Failed to update todo! {}", e.user_message())),
            }
        });
    };

    let toggle_services = services.clone();
    let on_toggle = move |id: i64| {
        let Some(status) = list.with_untracked(|l| l.toggled_status(id)) else {
            return;
        };
        let services = toggle_services.clone();
        leptos::task::spawn_local(async move {
            let token = services.sessions().read().token;
            match set_todo_status(&services.api, token.as_deref(), id, status).await {
                Ok(saved) => list.update(|l| l.apply_saved(saved)),
                Err(e) => notify_error(notices, e.user_message()),
            }
        });
    };

    let on_delete = move |id: i64| {
        let services = services.clone();
        leptos::task::spawn_local(async move {
            let token = services.sessions().read().token;
            match delete_todo(&services.api, token.as_deref(), id).await {
                Ok(()) => {
                    list.update(|l| l.remove(id));
                    notify_success(notices, "Todo deleted successfully!");
                }
                Err(e) => {
                    leptos::logging::warn!("todo delete failed: {e}");
                    notify_error(notices, "Failed to delete todo!");
                }
            }
        });
    };

    let row = move |todo: Todo| {
        let id = todo.id;
        let editing = move || list.with(|l| l.editing_id() == Some(id));
        let on_save = on_save.clone();
        let on_toggle = on_toggle.clone();
        let on_delete = on_delete.clone();
        let done = todo.status;
        let shown = todo;
        view! {
            <li class=if done { "todo-item todo-item--done" } else { "todo-item" }>
                <Show
                    when=editing
                    fallback=move || {
                        let on_toggle = on_toggle.clone();
                        let on_delete = on_delete.clone();
                        let Todo { title, description, status, .. } = shown.clone();
                        view! {
                            <input
                                type="checkbox"
                                prop:checked=status
                                on:change=move |_| on_toggle(id)
                            />
                            <div class="todo-text">
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </div>
                            <button on:click=move |_| {
                                list.update(|l| {
                                    l.begin_edit(id);
                                });
                            }>"✏️ Edit"</button>
                            <button on:click=move |_| on_delete(id)>"❌ Delete"</button>
                        }
                    }
                >
                    <input
                        type="text"
                        prop:value=move || list.with(|l| l.draft().map(|d| d.title.clone()).unwrap_or_default())
                        on:input=move |ev| list.update(|l| l.edit_title(event_target_value(&ev)))
                    />
                    <textarea
                        prop:value=move || list.with(|l| l.draft().map(|d| d.description.clone()).unwrap_or_default())
                        on:input=move |ev| list.update(|l| l.edit_description(event_target_value(&ev)))
                    ></textarea>
                    <button on:click={
                        let on_save = on_save.clone();
                        move |_| on_save(id)
                    }>"💾 Save"</button>
                    <button on:click=move |_| list.update(TodoList::cancel_edit)>"❌ Cancel"</button>
                </Show>
            </li>
        }
    };

    // Draft edits must not rebuild the rows, or the edit inputs lose focus.
    let rows = Memo::new(move |_| list.with(|l| (l.loading, l.error.clone(), l.todos.clone())));

    view! {
        <div class="todos-container">
            <h2>"Your Todos"</h2>
            {move || {
                let (loading, error, todos) = rows.get();
                if loading {
                    return view! { <p>"Loading todos..."</p> }.into_any();
                }
                if let Some(error) = error {
                    return view! { <p class="todos-error">{error}</p> }.into_any();
                }
                if todos.is_empty() {
                    return view! {
                        <p class="todos-empty">"No todos yet. " <a href="/dashboard/add-product">"Add one"</a></p>
                    }
                    .into_any();
                }
                view! { <ul class="todo-list">{todos.into_iter().map(row.clone()).collect_view()}</ul> }.into_any()
            }}
        </div>
    }
}

/// `/all-products` outside the dashboard shell.
#[component]
pub fn StandaloneTodosPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    install_unauth_redirect(session, "/all-products", use_navigate());

    view! {
        <Show when=move || session.with(Session::is_logged_in)>
            <TodosPage/>
        </Show>
    }
}
