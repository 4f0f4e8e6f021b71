//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route components apply identical unauthenticated redirect
//! behavior, keyed off the session signal the app refreshes after login and
//! logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::access::AccessGate;
use crate::state::session::Session;

/// Whether a visit to `path` with `session` must bounce to `/login`.
#[must_use]
pub fn should_redirect_unauth(session: &Session, path: &str) -> bool {
    let gate = AccessGate::from_session(session);
    !gate.is_logged_in() && !gate.allows(path)
}

/// Redirect to `/login` whenever the session drops its token while a
/// protected `path` is shown.
pub fn install_unauth_redirect<F>(session: RwSignal<Session>, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get(), path) {
            leptos::logging::log!("no session, leaving {path} for /login");
            navigate("/login", NavigateOptions::default());
        }
    });
}
