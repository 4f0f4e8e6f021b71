//! Persisted session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthGateway` is the only writer. Pages, the access gate, and bearer-token
//! call sites read through [`SessionStore::read`], which always goes to the
//! backing store so a write or clear is visible on the very next read.
//!
//! INVARIANTS
//! ==========
//! A missing token means logged out: `read` then returns `Session::default()`
//! and ignores any residual profile keys.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::{KeyValueStore, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const NAME_KEY: &str = "name";
pub const PROFILE_IMAGE_KEY: &str = "profileImage";
pub const SIGNUP_METHOD_KEY: &str = "signupMethod";
pub const SUPERUSER_KEY: &str = "isSuperuser";

/// Every key owned by the session. `theme` is deliberately absent.
pub const SESSION_KEYS: [&str; 5] = [TOKEN_KEY, NAME_KEY, PROFILE_IMAGE_KEY, SIGNUP_METHOD_KEY, SUPERUSER_KEY];

/// How the account was created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupMethod {
    Email,
    Google,
}

impl SignupMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Google => "google",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "email" => Some(Self::Email),
            "google" => Some(Self::Google),
            _ => None,
        }
    }
}

/// Authenticated identity and its privilege flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Bearer credential; `None` means logged out.
    pub token: Option<String>,
    pub display_name: String,
    /// Avatar reference. An empty string is a stored value, not absence.
    pub avatar_url: Option<String>,
    pub signup_method: Option<SignupMethod>,
    pub is_superuser: bool,
}

impl Session {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

/// Service owning the persisted session record.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn backing(&self) -> &S {
        &self.store
    }

    /// Persist every session field, or none of them.
    ///
    /// Fields that are `None` are removed. If any key fails to persist, keys
    /// already written are restored to their previous values before the error
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::MissingToken`] for a logged-out session, or the
    /// backend's write error.
    pub fn write(&self, session: &Session) -> Result<(), StorageError> {
        let token = session
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(StorageError::MissingToken)?;
        let entries: [(&str, Option<&str>); 5] = [
            (TOKEN_KEY, Some(token)),
            (NAME_KEY, Some(session.display_name.as_str())),
            (PROFILE_IMAGE_KEY, session.avatar_url.as_deref()),
            (SIGNUP_METHOD_KEY, session.signup_method.map(SignupMethod::as_str)),
            (SUPERUSER_KEY, Some(if session.is_superuser { "true" } else { "false" })),
        ];

        let previous: Vec<(&str, Option<String>)> = entries.iter().map(|(key, _)| (*key, self.store.get(key))).collect();

        for (written, (key, value)) in entries.iter().enumerate() {
            let result = match value {
                Some(value) => self.store.set(key, value),
                None => {
                    self.store.remove(key);
                    Ok(())
                }
            };
            if let Err(e) = result {
                leptos::logging::warn!("session write failed at '{key}', rolling back: {e}");
                self.restore(&previous[..written]);
                return Err(e);
            }
        }
        Ok(())
    }

    fn restore(&self, previous: &[(&str, Option<String>)]) {
        for (key, value) in previous {
            match value {
                Some(value) => {
                    if let Err(e) = self.store.set(key, value) {
                        leptos::logging::error!("session rollback failed for '{key}': {e}");
                    }
                }
                None => self.store.remove(key),
            }
        }
    }

    /// Read and normalize the stored session.
    pub fn read(&self) -> Session {
        let Some(token) = self.store.get(TOKEN_KEY).filter(|t| !t.is_empty()) else {
            return Session::default();
        };
        Session {
            token: Some(token),
            display_name: self.store.get(NAME_KEY).unwrap_or_default(),
            avatar_url: self.store.get(PROFILE_IMAGE_KEY),
            signup_method: self.store.get(SIGNUP_METHOD_KEY).as_deref().and_then(SignupMethod::parse),
            is_superuser: self.store.get(SUPERUSER_KEY).as_deref() == Some("true"),
        }
    }

    /// The stored session, if it no longer matches `shown`.
    ///
    /// Picks up writes made outside this tab's gateway, such as a logout in
    /// another tab or a cleared storage.
    #[must_use]
    pub fn refresh(&self, shown: &Session) -> Option<Session> {
        let fresh = self.read();
        (fresh != *shown).then_some(fresh)
    }

    /// Remove every session key. Idempotent; leaves `theme` alone.
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.store.remove(key);
        }
    }
}
