use super::*;
use crate::state::session::{SUPERUSER_KEY, SignupMethod};
use crate::util::storage::MemoryStore;

fn session(token: Option<&str>, is_superuser: bool) -> Session {
    Session {
        token: token.map(str::to_owned),
        display_name: "Ann".to_owned(),
        avatar_url: None,
        signup_method: Some(SignupMethod::Email),
        is_superuser,
    }
}

#[test]
fn logged_out_gate_hides_everything_protected() {
    let gate = AccessGate::from_session(&Session::default());
    assert!(!gate.is_logged_in());
    assert!(!gate.can_see_superuser_tab());
    assert!(gate.dashboard_tabs().is_empty());
    assert_eq!(gate.home_actions(), [HomeAction::SignUp, HomeAction::LogIn]);
}

#[test]
fn superuser_flag_without_token_is_ignored() {
    let gate = AccessGate::from_session(&session(None, true));
    assert!(!gate.can_see_superuser_tab());
    assert!(!gate.allows("/dashboard/user-info"));
}

#[test]
fn regular_user_sees_all_tabs_but_user_info() {
    let gate = AccessGate::from_session(&session(Some("t"), false));
    let tabs = gate.dashboard_tabs();
    assert!(!tabs.contains(&DashboardTab::UserInfo));
    assert_eq!(tabs.len(), DashboardTab::ALL.len() - 1);
    assert_eq!(gate.home_actions(), [HomeAction::Dashboard, HomeAction::Logout]);
}

#[test]
fn superuser_sees_user_info_tab() {
    let gate = AccessGate::from_session(&session(Some("t"), true));
    assert!(gate.can_see_superuser_tab());
    assert_eq!(gate.dashboard_tabs(), DashboardTab::ALL.to_vec());
}

#[test]
fn allows_public_routes_for_everyone() {
    let gate = AccessGate::default();
    for path in ["/", "/login", "/signup", "/otp-verification"] {
        assert!(gate.allows(path), "{path} should be public");
    }
}

#[test]
fn allows_protected_routes_only_when_logged_in() {
    let out = AccessGate::default();
    let user = AccessGate::from_session(&session(Some("t"), false));
    for path in ["/dashboard", "/dashboard/", "/dashboard/all-products", "/all-products", "/dashboard/theme-settings?x=1"] {
        assert!(!out.allows(path), "{path} should need login");
        assert!(user.allows(path), "{path} should be allowed for users");
    }
    assert!(out.allows("/dashboards-are-public"));
}

#[test]
fn user_info_route_requires_superuser() {
    let user = AccessGate::from_session(&session(Some("t"), false));
    let admin = AccessGate::from_session(&session(Some("t"), true));
    assert!(!user.allows("/dashboard/user-info"));
    assert!(admin.allows("/dashboard/user-info/"));
}

#[test]
fn gate_reads_store_freshly_after_clear() {
    let store = MemoryStore::new();
    let sessions = SessionStore::new(&store);
    sessions.write(&session(Some("t"), true)).unwrap();
    assert!(AccessGate::read(&sessions).can_see_superuser_tab());
    assert_eq!(store.get(SUPERUSER_KEY).as_deref(), Some("true"));

    sessions.clear();

    let gate = AccessGate::read(&sessions);
    assert!(!gate.is_logged_in());
    assert!(!gate.can_see_superuser_tab());
}

#[test]
fn tab_paths_are_unique() {
    let mut paths: Vec<_> = DashboardTab::ALL.iter().map(|t| t.path()).collect();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), DashboardTab::ALL.len());
}
