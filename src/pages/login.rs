//! Email + password login.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{Services, refresh_session};
use crate::components::google_button::GoogleButton;
use crate::components::toasts::{notify_error, notify_success};
use crate::state::notice::NoticeQueue;
use crate::state::session::Session;

/// Trim the email and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeQueue>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(message) => {
                notify_error(notices, message);
                return;
            }
        };
        busy.set(true);
        let services = services.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match services.gateway().login(&email_value, &password_value).await {
                Ok(signed_in) => {
                    refresh_session(&services, session);
                    notify_success(notices, format!("Welcome back, {}!", signed_in.display_name));
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => notify_error(notices, e.user_message()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <a href="/" class="auth-back">"Go Back"</a>
            <form class="auth-form" on:submit=on_submit>
                <h2>"Login"</h2>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <div class="input-wrapper">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-form__reveal" type="button" on:click=move |_| show_password.update(|v| *v = !*v)>
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
                <p class="auth-form__switch">"New here? " <a href="/signup">"Sign up"</a></p>
            </form>
            <GoogleButton/>
        </div>
    }
}
