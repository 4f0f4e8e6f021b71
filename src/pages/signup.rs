//! Email signup: collect identity, request a code, verify it inline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shares the app-level `OtpFlow` with `/otp-verification`. Verification
//! creates the account but does not sign in; the user is sent to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::Services;
use crate::components::google_button::GoogleButton;
use crate::components::otp_entry::OtpEntry;
use crate::components::toasts::{notify_error, notify_success};
use crate::state::notice::NoticeQueue;
use crate::state::otp::{IdentityField, OtpFlow};

#[component]
pub fn SignupPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let flow = expect_context::<RwSignal<OtpFlow>>();
    let notices = expect_context::<RwSignal<NoticeQueue>>();
    let navigate = use_navigate();

    let on_request = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(started) = flow.try_update(OtpFlow::begin_request) else {
            return;
        };
        let identity = match started {
            Ok(identity) => identity,
            Err(message) => {
                notify_error(notices, message);
                return;
            }
        };
        let gateway = services.gateway();
        leptos::task::spawn_local(async move {
            match gateway.request_signup_otp(&identity).await {
                Ok(()) => {
                    flow.update(OtpFlow::request_succeeded);
                    notify_success(notices, "OTP sent to your email. Please enter it below.");
                }
                Err(e) => {
                    let message = e.user_message();
                    flow.update(|f| f.request_failed(message.clone()));
                    notify_error(notices, message);
                }
            }
        });
    };

    let on_verified = Callback::new(move |()| {
        flow.update(OtpFlow::reset);
        navigate("/login", NavigateOptions::default());
    });

    let set_field = move |kind: IdentityField, value: String| {
        flow.update(|f| {
            f.set_field(kind, value);
        });
    };

    view! {
        <div class="auth-page">
            <a href="/" class="auth-back">"Go Back"</a>
            <form class="auth-form" on:submit=on_request>
                <h2>"Signup"</h2>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || flow.with(|f| f.identity().name.clone())
                    prop:disabled=move || flow.with(OtpFlow::identity_locked)
                    on:input=move |ev| set_field(IdentityField::Name, event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || flow.with(|f| f.identity().email.clone())
                    prop:disabled=move || flow.with(OtpFlow::identity_locked)
                    on:input=move |ev| set_field(IdentityField::Email, event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || flow.with(|f| f.identity().password.clone())
                    prop:disabled=move || flow.with(OtpFlow::identity_locked)
                    on:input=move |ev| set_field(IdentityField::Password, event_target_value(&ev))
                />
                <Show when=move || !flow.with(OtpFlow::code_requested)>
                    <button type="submit" disabled=move || flow.with(OtpFlow::is_busy)>
                        {move || if flow.with(OtpFlow::is_busy) { "Sending OTP..." } else { "Sign Up" }}
                    </button>
                </Show>
                <Show when=move || flow.with(|f| f.error().is_some() && !f.code_requested())>
                    <p class="auth-form__error">{move || flow.with(|f| f.error().unwrap_or_default().to_owned())}</p>
                </Show>
            </form>
            <Show when=move || flow.with(OtpFlow::code_requested)>
                <div class="auth-form auth-form--otp">
                    <p>
                        "Enter the code sent to "
                        <strong>{move || flow.with(|f| f.identity().email.clone())}</strong>
                    </p>
                    <OtpEntry on_verified=on_verified/>
                    <button
                        type="button"
                        class="auth-form__link"
                        prop:disabled=move || flow.with(OtpFlow::is_busy)
                        on:click=move |_| {
                            flow.update(|f| {
                                f.abandon();
                            });
                        }
                    >
                        "Use a different email"
                    </button>
                </div>
            </Show>
            <p class="auth-form__switch">"Already have an account? " <a href="/login">"Log in"</a></p>
            <GoogleButton/>
        </div>
    }
}
