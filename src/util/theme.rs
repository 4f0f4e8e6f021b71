//! Light/dark theme preference.
//!
//! The preference lives under `theme` in the same store as the session but is
//! not a session key, so it survives logout. The active theme is applied as a
//! `data-theme` attribute on `<html>`; outside the browser `apply` is a no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::{KeyValueStore, StorageError};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Stored preference, or light when nothing valid is stored.
pub fn load<S: KeyValueStore>(store: &S) -> Theme {
    store.get(THEME_KEY).as_deref().and_then(Theme::parse).unwrap_or_default()
}

/// Persist the preference.
///
/// # Errors
///
/// Returns the backend's write error.
pub fn save<S: KeyValueStore>(store: &S, theme: Theme) -> Result<(), StorageError> {
    store.set(THEME_KEY, theme.as_str())
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if el.set_attribute("data-theme", theme.as_str()).is_err() {
                leptos::logging::warn!("failed to apply theme {}", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Switch to `next`, apply it, and persist it. Applying happens even if the
/// write fails so the page still reflects the choice.
///
/// # Errors
///
/// Returns the backend's write error.
pub fn select<S: KeyValueStore>(store: &S, next: Theme) -> Result<Theme, StorageError> {
    apply(next);
    save(store, next)?;
    Ok(next)
}
