use super::*;
use crate::state::access::AccessGate;
use crate::util::storage::MemoryStore;
use std::cell::Cell;

fn sample_session() -> Session {
    Session {
        token: Some("tok-1".to_owned()),
        display_name: "Ann".to_owned(),
        avatar_url: Some("https://img.test/ann.png".to_owned()),
        signup_method: Some(SignupMethod::Email),
        is_superuser: true,
    }
}

/// Store that rejects writes to one key.
struct RejectingStore {
    inner: MemoryStore,
    reject_key: &'static str,
    writes: Cell<usize>,
}

impl KeyValueStore for RejectingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        if key == self.reject_key {
            return Err(StorageError::Write { key: key.to_owned(), reason: "quota".to_owned() });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

// =============================================================
// write / read
// =============================================================

#[test]
fn write_then_read_round_trips_all_fields() {
    let sessions = SessionStore::new(MemoryStore::new());
    sessions.write(&sample_session()).unwrap();
    assert_eq!(sessions.read(), sample_session());
}

#[test]
fn write_stores_superuser_as_string_flag() {
    let sessions = SessionStore::new(MemoryStore::new());
    sessions.write(&sample_session()).unwrap();
    assert_eq!(sessions.backing().get(SUPERUSER_KEY).as_deref(), Some("true"));

    let regular = Session { is_superuser: false, ..sample_session() };
    sessions.write(&regular).unwrap();
    assert_eq!(sessions.backing().get(SUPERUSER_KEY).as_deref(), Some("false"));
}

#[test]
fn write_keeps_empty_avatar_as_empty_string() {
    let sessions = SessionStore::new(MemoryStore::new());
    let session = Session { avatar_url: Some(String::new()), ..sample_session() };
    sessions.write(&session).unwrap();
    assert_eq!(sessions.read().avatar_url.as_deref(), Some(""));
}

#[test]
fn write_rejects_tokenless_session_without_touching_store() {
    let store = MemoryStore::with_entries([(NAME_KEY, "Old")]);
    let sessions = SessionStore::new(&store);
    let err = sessions.write(&Session::default()).unwrap_err();
    assert_eq!(err, StorageError::MissingToken);
    assert_eq!(store.get(NAME_KEY).as_deref(), Some("Old"));
    assert_eq!(store.len(), 1);
}

#[test]
fn failed_write_restores_previous_values() {
    let store = RejectingStore {
        inner: MemoryStore::with_entries([(TOKEN_KEY, "old-token"), (NAME_KEY, "Old Name")]),
        reject_key: SIGNUP_METHOD_KEY,
        writes: Cell::new(0),
    };
    let sessions = SessionStore::new(&store);

    let err = sessions.write(&sample_session()).unwrap_err();
    assert!(matches!(err, StorageError::Write { ref key, .. } if key == SIGNUP_METHOD_KEY));

    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("old-token"));
    assert_eq!(store.get(NAME_KEY).as_deref(), Some("Old Name"));
    assert_eq!(store.get(PROFILE_IMAGE_KEY), None);
    assert_eq!(store.get(SUPERUSER_KEY), None);
    assert!(store.writes.get() > 3);
}

#[test]
fn read_without_token_ignores_residual_fields() {
    let store = MemoryStore::with_entries([
        (NAME_KEY, "Stale"),
        (PROFILE_IMAGE_KEY, "https://img.test/stale.png"),
        (SIGNUP_METHOD_KEY, "google"),
        (SUPERUSER_KEY, "true"),
    ]);
    let sessions = SessionStore::new(store);
    assert_eq!(sessions.read(), Session::default());
}

#[test]
fn read_treats_empty_token_as_logged_out() {
    let sessions = SessionStore::new(MemoryStore::with_entries([(TOKEN_KEY, ""), (SUPERUSER_KEY, "true")]));
    assert!(!sessions.read().is_logged_in());
}

#[test]
fn read_normalizes_unknown_flag_values() {
    let sessions = SessionStore::new(MemoryStore::with_entries([
        (TOKEN_KEY, "t"),
        (SUPERUSER_KEY, "yes"),
        (SIGNUP_METHOD_KEY, "github"),
    ]));
    let session = sessions.read();
    assert!(!session.is_superuser);
    assert_eq!(session.signup_method, None);
    assert_eq!(session.display_name, "");
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_removes_session_keys_and_keeps_theme() {
    let store = MemoryStore::with_entries([("theme", "dark")]);
    let sessions = SessionStore::new(&store);
    sessions.write(&sample_session()).unwrap();

    sessions.clear();

    assert_eq!(sessions.read(), Session::default());
    for key in SESSION_KEYS {
        assert_eq!(store.get(key), None, "{key} should be cleared");
    }
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn clear_is_idempotent() {
    let sessions = SessionStore::new(MemoryStore::new());
    sessions.clear();
    sessions.clear();
    assert!(sessions.backing().is_empty());
}

#[test]
fn refresh_picks_up_changes_made_outside_this_store() {
    let store = MemoryStore::new();
    let sessions = SessionStore::new(&store);
    sessions.write(&sample_session()).unwrap();
    let shown = sessions.read();
    assert_eq!(sessions.refresh(&shown), None);

    // Another tab logs out.
    store.remove(TOKEN_KEY);

    let fresh = sessions.refresh(&shown).expect("stale session must be replaced");
    assert_eq!(fresh, Session::default());
    let gate = AccessGate::from_session(&fresh);
    assert!(!gate.is_logged_in());
    assert!(!gate.can_see_superuser_tab());
    assert!(!gate.allows("/dashboard/user-info"));
}

#[test]
fn refresh_sees_a_demoted_superuser() {
    let store = MemoryStore::new();
    let sessions = SessionStore::new(&store);
    sessions.write(&sample_session()).unwrap();
    let shown = sessions.read();

    store.set(SUPERUSER_KEY, "false").unwrap();

    let fresh = sessions.refresh(&shown).expect("flag change must be visible");
    assert!(AccessGate::from_session(&fresh).is_logged_in());
    assert!(!AccessGate::read(&sessions).can_see_superuser_tab());
}

// =============================================================
// SignupMethod
// =============================================================

#[test]
fn signup_method_parse_is_case_insensitive() {
    assert_eq!(SignupMethod::parse("Google"), Some(SignupMethod::Google));
    assert_eq!(SignupMethod::parse(" email "), Some(SignupMethod::Email));
    assert_eq!(SignupMethod::parse(""), None);
}
