//! Navigation and route visibility derived from the session.
//!
//! INVARIANTS
//! ==========
//! The gate is a pure function of a freshly read `Session`. Nothing is shown
//! optimistically and nothing is cached between navigations.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use super::session::{Session, SessionStore};
use crate::util::storage::KeyValueStore;

/// Buttons on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeAction {
    Dashboard,
    Logout,
    SignUp,
    LogIn,
}

impl HomeAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Logout => "Logout",
            Self::SignUp => "Sign Up",
            Self::LogIn => "Log In",
        }
    }

    /// Route for link-style actions; `Logout` is a button handled by the page.
    #[must_use]
    pub fn path(self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("/dashboard"),
            Self::Logout => None,
            Self::SignUp => Some("/signup"),
            Self::LogIn => Some("/login"),
        }
    }
}

/// Dashboard sidebar entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    Home,
    Profile,
    Todos,
    AddTodo,
    UserInfo,
    ThemeSettings,
}

impl DashboardTab {
    pub const ALL: [Self; 6] = [Self::Home, Self::Profile, Self::Todos, Self::AddTodo, Self::UserInfo, Self::ThemeSettings];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "🏠 Home",
            Self::Profile => "👤 Profile",
            Self::Todos => "📝 Todos",
            Self::AddTodo => "➕ Add Todo",
            Self::UserInfo => "👥 User Info",
            Self::ThemeSettings => "🎨 Theme Settings",
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Profile => "/dashboard",
            Self::Todos => "/dashboard/all-products",
            Self::AddTodo => "/dashboard/add-product",
            Self::UserInfo => "/dashboard/user-info",
            Self::ThemeSettings => "/dashboard/theme-settings",
        }
    }

    #[must_use]
    pub fn requires_superuser(self) -> bool {
        matches!(self, Self::UserInfo)
    }
}

/// Visibility decisions for one render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessGate {
    logged_in: bool,
    superuser: bool,
}

impl AccessGate {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let logged_in = session.token.is_some();
        Self { logged_in, superuser: logged_in && session.is_superuser }
    }

    /// Derive from the store as it is right now.
    pub fn read<S: KeyValueStore>(sessions: &SessionStore<S>) -> Self {
        Self::from_session(&sessions.read())
    }

    #[must_use]
    pub fn is_logged_in(self) -> bool {
        self.logged_in
    }

    #[must_use]
    pub fn can_see_superuser_tab(self) -> bool {
        self.superuser
    }

    #[must_use]
    pub fn home_actions(self) -> [HomeAction; 2] {
        if self.logged_in {
            [HomeAction::Dashboard, HomeAction::Logout]
        } else {
            [HomeAction::SignUp, HomeAction::LogIn]
        }
    }

    /// Sidebar tabs for the dashboard. Empty when logged out.
    #[must_use]
    pub fn dashboard_tabs(self) -> Vec<DashboardTab> {
        if !self.logged_in {
            return Vec::new();
        }
        DashboardTab::ALL
            .into_iter()
            .filter(|tab| !tab.requires_superuser() || self.superuser)
            .collect()
    }

    /// Whether `path` may be rendered for this session.
    #[must_use]
    pub fn allows(self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or_default().trim_end_matches('/');
        if path == DashboardTab::UserInfo.path() {
            return self.superuser;
        }
        if is_protected(path) {
            return self.logged_in;
        }
        true
    }
}

fn is_protected(path: &str) -> bool {
    ["/dashboard", "/all-products"]
        .iter()
        .any(|prefix| path == *prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/')))
}
