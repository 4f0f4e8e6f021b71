//! Standalone code-entry route for a signup already in progress.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::otp_entry::OtpEntry;
use crate::state::otp::OtpFlow;

#[component]
pub fn OtpVerificationPage() -> impl IntoView {
    let flow = expect_context::<RwSignal<OtpFlow>>();
    let navigate = use_navigate();

    let on_verified = Callback::new(move |()| {
        flow.update(OtpFlow::reset);
        navigate("/login", NavigateOptions::default());
    });

    view! {
        <div class="auth-page">
            <div class="auth-form auth-form--otp">
                <h2>"Verify Your Email"</h2>
                <Show
                    when=move || flow.with(OtpFlow::code_requested)
                    fallback=|| {
                        view! {
                            <p>"No signup in progress. " <a href="/signup">"Start signing up"</a></p>
                        }
                    }
                >
                    <p>
                        "We've sent a 6-digit code to "
                        <strong>{move || flow.with(|f| f.identity().email.clone())}</strong>
                    </p>
                    <OtpEntry on_verified=on_verified/>
                </Show>
                <a href="/login" class="auth-form__link">"Back to Login"</a>
            </div>
        </div>
    }
}
