//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::toasts::Toasts;
use crate::config::AppConfig;
use crate::net::auth::AuthGateway;
use crate::net::client::ApiClient;
use crate::net::transport::HttpTransport;
use crate::pages::{
    add_todo::AddTodoPage,
    dashboard::DashboardLayout,
    home::HomePage,
    login::LoginPage,
    otp_verification::OtpVerificationPage,
    profile::ProfilePage,
    signup::SignupPage,
    theme_settings::ThemeSettingsPage,
    todos::{StandaloneTodosPage, TodosPage},
    user_info::UserInfoPage,
};
use crate::state::notice::NoticeQueue;
use crate::state::otp::OtpFlow;
use crate::state::session::{Session, SessionStore};
use crate::util::storage::BrowserStore;
use crate::util::theme::{self, Theme};

/// Backend handles shared by every page.
#[derive(Clone, Debug)]
pub struct Services {
    pub config: AppConfig,
    pub api: ApiClient<HttpTransport>,
}

impl Services {
    pub fn new(config: AppConfig) -> Self {
        let api = ApiClient::new(&config, HttpTransport);
        Self { config, api }
    }

    pub fn sessions(&self) -> SessionStore<BrowserStore> {
        SessionStore::new(BrowserStore)
    }

    pub fn gateway(&self) -> AuthGateway<HttpTransport, BrowserStore> {
        AuthGateway::new(self.api.clone(), self.sessions())
    }
}

/// Re-read the persisted session into the shared signal. Only notifies
/// subscribers when the stored record actually changed.
pub fn refresh_session(services: &Services, session: RwSignal<Session>) {
    if let Some(fresh) = session.with_untracked(|shown| services.sessions().refresh(shown)) {
        leptos::logging::log!("session changed in storage, logged_in={}", fresh.is_logged_in());
        session.set(fresh);
    }
}

/// Keeps the session signal in step with storage: re-read on every
/// navigation, and whenever another tab touches localStorage.
#[component]
fn SessionSync() -> impl IntoView {
    let services = expect_context::<Services>();
    let session = expect_context::<RwSignal<Session>>();
    let pathname = use_location().pathname;

    let on_navigate = services.clone();
    Effect::new(move || {
        pathname.track();
        refresh_session(&on_navigate, session);
    });

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::storage, move |_| refresh_session(&services, session));
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "csr"))]
    let _ = services;
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let services = Services::new(AppConfig::load());
    let session = RwSignal::new(services.sessions().read());
    let otp = RwSignal::new(OtpFlow::default());
    let notices = RwSignal::new(NoticeQueue::default());
    let theme_pref = RwSignal::new(theme::load(&BrowserStore));
    theme::apply(theme_pref.get_untracked());

    provide_context(services);
    provide_context(session);
    provide_context(otp);
    provide_context(notices);
    provide_context::<RwSignal<Theme>>(theme_pref);

    view! {
        <Title text="Technians Softech"/>

        <Router>
            <SessionSync/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("otp-verification") view=OtpVerificationPage/>
                <Route path=StaticSegment("all-products") view=StandaloneTodosPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=ProfilePage/>
                    <Route path=StaticSegment("all-products") view=TodosPage/>
                    <Route path=StaticSegment("add-product") view=AddTodoPage/>
                    <Route path=StaticSegment("user-info") view=UserInfoPage/>
                    <Route path=StaticSegment("theme-settings") view=ThemeSettingsPage/>
                </ParentRoute>
            </Routes>
        </Router>
        <Toasts/>
    }
}
