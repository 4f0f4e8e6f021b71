//! "Sign in with Google" via Google Identity Services.
//!
//! The GIS script is injected on first mount; once loaded it renders its own
//! button into our host `<div>` and hands back a credential, which is traded
//! for a session through the auth gateway. Hidden when no client id is
//! configured.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{Services, refresh_session};
use crate::components::toasts::{notify_error, notify_success};
use crate::state::notice::NoticeQueue;
use crate::state::session::Session;

#[cfg(feature = "csr")]
mod gsi {
    use js_sys::{Array, Function, Object, Reflect};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    const SCRIPT_URL: &str = "https://accounts.google.com/gsi/client";

    /// `window.google.accounts.id`, once the script has loaded.
    fn accounts_id() -> Option<JsValue> {
        let window = web_sys::window()?;
        let google = Reflect::get(&window, &"google".into()).ok()?;
        let accounts = Reflect::get(&google, &"accounts".into()).ok()?;
        Reflect::get(&accounts, &"id".into()).ok().filter(|id| id.is_object())
    }

    fn call(target: &JsValue, name: &str, args: &Array) -> Result<(), JsValue> {
        let method: Function = Reflect::get(target, &name.into())?.dyn_into()?;
        method.apply(target, args)?;
        Ok(())
    }

    /// Run `on_ready` once the GIS script is available, injecting it if needed.
    pub fn load(on_ready: impl FnOnce() + 'static) -> Result<(), JsValue> {
        if accounts_id().is_some() {
            on_ready();
            return Ok(());
        }
        let document = web_sys::window().and_then(|w| w.document()).ok_or("no document")?;
        let script = document.create_element("script")?;
        script.set_attribute("src", SCRIPT_URL)?;
        script.set_attribute("async", "")?;
        Reflect::set(&script, &"onload".into(), &Closure::once_into_js(on_ready))?;
        document.body().ok_or("no body")?.append_child(&script)?;
        Ok(())
    }

    /// Initialize GIS with `client_id` and render its button into `host`.
    pub fn render(client_id: &str, host: &web_sys::HtmlElement, on_credential: impl Fn(String) + 'static) -> Result<(), JsValue> {
        let id = accounts_id().ok_or("Google Identity Services not loaded")?;
        let callback = Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
            let credential = Reflect::get(&response, &"credential".into())
                .ok()
                .and_then(|c| c.as_string())
                .unwrap_or_default();
            on_credential(credential);
        });

        let config = Object::new();
        Reflect::set(&config, &"client_id".into(), &client_id.into())?;
        Reflect::set(&config, &"callback".into(), callback.as_ref())?;
        // GIS keeps calling back for the life of the page.
        callback.forget();
        call(&id, "initialize", &Array::of1(&config))?;

        let options = Object::new();
        Reflect::set(&options, &"theme".into(), &"outline".into())?;
        Reflect::set(&options, &"size".into(), &"large".into())?;
        call(&id, "renderButton", &Array::of2(host, &options))
    }
}

#[component]
pub fn GoogleButton() -> impl IntoView {
    let services = expect_context::<Services>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeQueue>>();
    let navigate = use_navigate();
    let host: NodeRef<leptos::html::Div> = NodeRef::new();
    let client_id = services.config.google_client_id.clone();
    let enabled = client_id.is_some();

    let on_credential = move |credential: String| {
        let services = services.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match services.gateway().exchange_google_token(&credential).await {
                Ok(_) => {
                    refresh_session(&services, session);
                    notify_success(notices, "Signed up with Google!");
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => notify_error(notices, e.user_message()),
            }
        });
    };

    #[cfg(feature = "csr")]
    {
        let rendered = RwSignal::new(false);
        Effect::new(move || {
            let (Some(el), Some(client_id)) = (host.get(), client_id.clone()) else {
                return;
            };
            if rendered.get_untracked() {
                return;
            }
            rendered.set(true);
            let on_credential = on_credential.clone();
            let loaded = gsi::load(move || {
                if let Err(e) = gsi::render(&client_id, &el, on_credential) {
                    leptos::logging::error!("google button render failed: {e:?}");
                }
            });
            if let Err(e) = loaded {
                leptos::logging::error!("google identity script failed to load: {e:?}");
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client_id, on_credential);
    }

    view! {
        <Show when=move || enabled>
            <div class="google-login">
                <p class="google-login__divider">"or"</p>
                <div node_ref=host></div>
            </div>
        </Show>
    }
}
