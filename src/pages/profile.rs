//! "My Profile" tab: read-only account details plus editable fields.

use leptos::prelude::*;

use crate::app::Services;
use crate::components::toasts::{notify_error, notify_success};
use crate::net::profile::{fetch_profile, update_profile};
use crate::state::notice::NoticeQueue;
use crate::state::profile::{ProfileEditor, profile_image};
use crate::state::users::format_timestamp;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let services = expect_context::<Services>();
    let notices = expect_context::<RwSignal<NoticeQueue>>();
    let editor = RwSignal::new(ProfileEditor::default());

    let load_services = services.clone();
    leptos::task::spawn_local(async move {
        let token = load_services.sessions().read().token;
        match fetch_profile(&load_services.api, token.as_deref()).await {
            Ok(profile) => editor.update(|e| e.loaded(profile)),
            Err(e) => {
                leptos::logging::warn!("profile load failed: {e}");
                editor.update(|s| s.failed("Failed to load profile"));
            }
        }
    });

    let on_save = move |_| {
        let Some(body) = editor.try_update(ProfileEditor::begin_save).flatten() else {
            return;
        };
        let services = services.clone();
        leptos::task::spawn_local(async move {
            let token = services.sessions().read().token;
            match update_profile(&services.api, token.as_deref(), &body).await {
                Ok(()) => {
                    editor.update(|e| e.saved(&body));
                    notify_success(notices, "Profile updated successfully!");
                }
                Err(e) => {
                    leptos::logging::warn!("profile save failed: {e}");
                    editor.update(|s| s.saving = false);
                    notify_error(notices, "Failed to save profile");
                }
            }
        });
    };

    let detail = move |label: &'static str, value: Signal<String>| {
        view! {
            <div class="profile-detail">
                <label>{label}</label>
                <span>{move || value.get()}</span>
            </div>
        }
    };
    // Form edits must not rebuild the header.
    let header = Memo::new(move |_| {
        editor.with(|s| {
            let error = s.error.clone().filter(|_| s.profile.is_none());
            let image = s.profile.as_ref().and_then(profile_image).map(str::to_owned);
            (s.loading, error, image)
        })
    });
    let field_text = move |f: fn(&ProfileEditor) -> String| Signal::derive(move || editor.with(f));

    view! {
        <div class="profile-container">
            <h2 class="profile-title">"My Profile"</h2>
            {move || {
                let (loading, error, image) = header.get();
                if loading {
                    return view! { <div>"Loading profile..."</div> }.into_any();
                }
                if let Some(error) = error {
                    return view! { <div class="profile-error">{error}</div> }.into_any();
                }
                view! {
                    <div class="profile-image-container">
                        {match image {
                            Some(src) => view! { <img src=src alt="Profile" class="profile-image"/> }.into_any(),
                            None => view! { <div class="profile-image-fallback">"👤"</div> }.into_any(),
                        }}
                    </div>
                }
                .into_any()
            }}
            {detail("Name", field_text(|s| s.profile.as_ref().map(|p| p.username.clone()).unwrap_or_default()))}
            {detail("Email", field_text(|s| s.profile.as_ref().map(|p| p.email.clone()).unwrap_or_default()))}
            {detail(
                "Signup Method",
                field_text(|s| s.profile.as_ref().and_then(|p| p.signup_method.clone()).unwrap_or_else(|| "-".to_owned())),
            )}
            {detail(
                "Last Login",
                field_text(|s| format_timestamp(s.profile.as_ref().and_then(|p| p.last_login.as_deref()))),
            )}
            <div class="profile-edit">
                <label>"About Me"</label>
                <textarea
                    placeholder="Tell us about yourself"
                    prop:value=move || editor.with(|s| s.form.about_me.clone())
                    on:input=move |ev| editor.update(|s| s.form.about_me = event_target_value(&ev))
                ></textarea>
                <label>"Contact Number"</label>
                <input
                    type="text"
                    placeholder="Enter your phone number"
                    prop:value=move || editor.with(|s| s.form.contact_number.clone())
                    on:input=move |ev| editor.update(|s| s.form.contact_number = event_target_value(&ev))
                />
                <label>"Company Name"</label>
                <input
                    type="text"
                    placeholder="Enter your company name"
                    prop:value=move || editor.with(|s| s.form.company_name.clone())
                    on:input=move |ev| editor.update(|s| s.form.company_name = event_target_value(&ev))
                />
                <button
                    class="profile-save"
                    on:click=on_save
                    disabled=move || editor.with(|s| s.saving || s.profile.is_none())
                >
                    {move || if editor.with(|s| s.saving) { "Saving..." } else { "Save" }}
                </button>
            </div>
        </div>
    }
}
