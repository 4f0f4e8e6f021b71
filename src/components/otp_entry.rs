//! Six-cell code entry with resend countdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered both inline on `/signup` and on `/otp-verification`. Both bind to
//! the app-level `RwSignal<OtpFlow>`, so the cells and the countdown carry
//! over when the user moves between the two routes.
//!
//! The countdown is a `spawn_local` loop that ticks the flow once per second
//! until the component unmounts.

use leptos::prelude::*;

use crate::app::Services;
use crate::components::toasts::{notify_error, notify_success};
use crate::state::notice::NoticeQueue;
use crate::state::otp::{OTP_LEN, OtpFlow};

type Cells = [NodeRef<leptos::html::Input>; OTP_LEN];

fn focus_cell(cells: &Cells, index: Option<usize>) {
    #[cfg(feature = "csr")]
    {
        if let Some(input) = index.and_then(|i| cells.get(i)).and_then(NodeRef::get) {
            if input.focus().is_err() {
                leptos::logging::warn!("could not focus OTP cell");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (cells, index);
    }
}

#[component]
pub fn OtpEntry(#[prop(into)] on_verified: Callback<()>) -> impl IntoView {
    let services = expect_context::<Services>();
    let flow = expect_context::<RwSignal<OtpFlow>>();
    let notices = expect_context::<RwSignal<NoticeQueue>>();
    let cells: Cells = std::array::from_fn(|_| NodeRef::new());

    #[cfg(feature = "csr")]
    {
        let countdown_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let countdown_alive_task = countdown_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !countdown_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if flow.with_untracked(|f| f.timer().can_resend()) {
                    continue;
                }
                flow.update(|f| {
                    f.tick();
                });
            }
        });
        on_cleanup(move || countdown_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let verify_services = services.clone();
    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(started) = flow.try_update(OtpFlow::begin_verify) else {
            return;
        };
        let (identity, code) = match started {
            Ok(pair) => pair,
            Err(message) => {
                notify_error(notices, message);
                return;
            }
        };
        let gateway = verify_services.gateway();
        leptos::task::spawn_local(async move {
            match gateway.verify_signup_otp(&identity, &code).await {
                Ok(()) => {
                    if flow.try_update(OtpFlow::verify_succeeded) == Some(true) {
                        notify_success(notices, "Signup successful! Please log in.");
                        on_verified.run(());
                    }
                }
                Err(e) => {
                    let message = e.user_message();
                    flow.update(|f| f.verify_failed(message.clone()));
                    notify_error(notices, message);
                    focus_cell(&cells, Some(0));
                }
            }
        });
    };

    let on_resend = move |_| {
        let Some(started) = flow.try_update(OtpFlow::begin_resend) else {
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
            match gateway.resend_signup_otp(&identity).await {
                Ok(()) => {
                    flow.update(OtpFlow::resend_succeeded);
                    notify_success(notices, "OTP resent successfully!");
                    focus_cell(&cells, Some(0));
                }
                Err(e) => {
                    let message = e.user_message();
                    flow.update(|f| f.resend_failed(message.clone()));
                    notify_error(notices, message);
                }
            }
        });
    };

    let cell_inputs = (0..OTP_LEN)
        .map(|i| {
            view! {
                <input
                    node_ref=cells[i]
                    class="otp-input"
                    type="text"
                    inputmode="numeric"
                    maxlength="1"
                    placeholder="0"
                    prop:value=move || flow.with(|f| f.code().cell_text(i))
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        let next = flow.try_update(|f| f.input_digit(i, &value)).flatten();
                        focus_cell(&cells, next);
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Backspace" {
                            focus_cell(&cells, flow.with_untracked(|f| f.backspace(i)));
                        }
                    }
                    on:paste=move |ev: leptos::ev::ClipboardEvent| {
                        #[cfg(feature = "csr")]
                        {
                            let text = ev
                                .clipboard_data()
                                .and_then(|data| data.get_data("text").ok())
                                .unwrap_or_default();
                            if flow.try_update(|f| f.paste_code(&text)).unwrap_or(false) {
                                ev.prevent_default();
                                focus_cell(&cells, Some(OTP_LEN - 1));
                            }
                        }
                        #[cfg(not(feature = "csr"))]
                        let _ = ev;
                    }
                />
            }
        })
        .collect_view();

    view! {
        <form class="otp-form" on:submit=on_verify>
            <div class="otp-inputs">{cell_inputs}</div>
            <button class="otp-submit" type="submit" disabled=move || !flow.with(OtpFlow::can_submit)>
                {move || if flow.with(OtpFlow::is_busy) { "Verifying..." } else { "Verify OTP" }}
            </button>
            <Show when=move || flow.with(|f| f.error().is_some())>
                <p class="otp-error">{move || flow.with(|f| f.error().unwrap_or_default().to_owned())}</p>
            </Show>
            <div class="otp-resend">
                <Show
                    when=move || flow.with(|f| f.timer().can_resend())
                    fallback=move || {
                        view! {
                            <p class="resend-timer">
                                {move || format!("Resend OTP in {} seconds", flow.with(|f| f.timer().seconds_remaining()))}
                            </p>
                        }
                    }
                >
                    <button class="resend-button" type="button" on:click=on_resend.clone() disabled=move || !flow.with(OtpFlow::can_resend)>
                        {move || if flow.with(OtpFlow::is_busy) { "Sending..." } else { "Resend OTP" }}
                    </button>
                </Show>
            </div>
        </form>
    }
}
