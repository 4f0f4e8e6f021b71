//! Light/dark toggle.

use leptos::prelude::*;

use crate::components::toasts::notify_error;
use crate::state::notice::NoticeQueue;
use crate::util::storage::BrowserStore;
use crate::util::theme::{self, Theme};

#[component]
pub fn ThemeSettingsPage() -> impl IntoView {
    let current = expect_context::<RwSignal<Theme>>();
    let notices = expect_context::<RwSignal<NoticeQueue>>();

    let on_toggle = move |_| {
        let next = current.get_untracked().toggled();
        current.set(next);
        if let Err(e) = theme::select(&BrowserStore, next) {
            leptos::logging::warn!("theme not persisted: {e}");
            notify_error(notices, "Could not save your theme preference.");
        }
    };

    view! {
        <div class="theme-settings">
            <h2>"Theme Settings"</h2>
            <label class="theme-settings__toggle">
                <span>"🌗"</span>
                <span>{move || if current.get() == Theme::Dark { "Dark Mode" } else { "Light Mode" }}</span>
                <input type="checkbox" prop:checked=move || current.get() == Theme::Dark on:change=on_toggle/>
            </label>
        </div>
    }
}
