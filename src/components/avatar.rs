//! Home-page avatar: Google photo, generic icon, or a login link.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use leptos::prelude::*;

use crate::state::session::{Session, SignupMethod};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarKind {
    /// Logged out: icon linking to `/login`.
    LoginLink,
    /// Google account with a stored photo.
    Image(String),
    Icon,
}

#[must_use]
pub fn avatar_for(session: &Session) -> AvatarKind {
    if !session.is_logged_in() || session.display_name.is_empty() {
        return AvatarKind::LoginLink;
    }
    match session.avatar_url.as_deref() {
        Some(url) if session.signup_method == Some(SignupMethod::Google) && !url.is_empty() => {
            AvatarKind::Image(url.to_owned())
        }
        _ => AvatarKind::Icon,
    }
}

#[component]
pub fn Avatar(#[prop(into)] session: Signal<Session>) -> impl IntoView {
    let broken = RwSignal::new(false);

    move || match avatar_for(&session.get()) {
        AvatarKind::LoginLink => view! {
            <a href="/login" class="avatar-icon" title="Login">"👤"</a>
        }
        .into_any(),
        AvatarKind::Image(url) if !broken.get() => view! {
            <a href="/dashboard" class="avatar-container" title="Go to Profile">
                <img src=url alt="Profile" class="avatar-image" on:error=move |_| broken.set(true)/>
            </a>
        }
        .into_any(),
        _ => view! {
            <a href="/dashboard" class="avatar-icon" title="Go to Profile">"👤"</a>
        }
        .into_any(),
    }
}
