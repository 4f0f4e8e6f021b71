//! Landing page: greeting, avatar, and auth-dependent actions.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{Services, refresh_session};
use crate::components::avatar::Avatar;
use crate::state::access::{AccessGate, HomeAction};
use crate::state::session::Session;

const FEATURES: [(&str, &str); 4] = [
    ("🔐 Multiple Login Options", "Email and password with one-time code verification, or Google sign-in."),
    ("👤 User Profile Management", "Editable profile fields with your photo and last login."),
    ("🎨 Theme Customization", "Light and dark themes with a persistent preference."),
    ("👑 Superuser Dashboard", "User management with signup analytics for administrators."),
];

/// Greeting line for the current session.
fn greeting(session: &Session) -> String {
    if session.is_logged_in() && !session.display_name.is_empty() {
        format!("Hey, {}!", session.display_name)
    } else {
        "Welcome, Guest!".to_owned()
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let services = expect_context::<Services>();
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let on_logout = move || {
        services.gateway().logout();
        refresh_session(&services, session);
        leptos::logging::log!("logged out");
        navigate("/login", NavigateOptions::default());
    };

    let action_button = move |action: HomeAction| match action.path() {
        Some(path) => view! { <a href=path><button>{action.label()}</button></a> }.into_any(),
        None => {
            let on_logout = on_logout.clone();
            view! { <button on:click=move |_| on_logout()>{action.label()}</button> }.into_any()
        }
    };

    view! {
        <div class="home-container">
            <h1>"Welcome to Technians Softech"</h1>
            <Avatar session=session/>
            <h3>{move || greeting(&session.get())}</h3>
            <div class="home-buttons">
                {move || {
                    AccessGate::from_session(&session.get())
                        .home_actions()
                        .into_iter()
                        .map(action_button.clone())
                        .collect_view()
                }}
            </div>
            <section class="about-project">
                <h2>"About This Project"</h2>
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="description-card">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
