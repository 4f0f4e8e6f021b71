use super::*;
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStore;

#[test]
fn load_defaults_to_light() {
    assert_eq!(load(&MemoryStore::new()), Theme::Light);
    assert_eq!(load(&MemoryStore::with_entries([(THEME_KEY, "purple")])), Theme::Light);
}

#[test]
fn select_persists_choice() {
    let store = MemoryStore::new();
    assert_eq!(select(&store, Theme::Dark), Ok(Theme::Dark));
    assert_eq!(load(&store), Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn toggled_flips_between_themes() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_survives_session_clear() {
    let store = MemoryStore::with_entries([("token", "jwt"), (THEME_KEY, "dark")]);
    SessionStore::new(&store).clear();
    assert_eq!(load(&store), Theme::Dark);
}

#[cfg(not(feature = "csr"))]
#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
