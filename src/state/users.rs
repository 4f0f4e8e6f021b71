//! Admin user table state.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::net::types::UserRecord;

/// Counters shown above the user table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub google: usize,
    pub email: usize,
    pub superusers: usize,
}

impl UserStats {
    #[must_use]
    pub fn from_users(users: &[UserRecord]) -> Self {
        let method = |name: &str| users.iter().filter(|u| u.signup_method == name).count();
        Self {
            total: users.len(),
            google: method("google"),
            email: method("email"),
            superusers: users.iter().filter(|u| u.is_superuser).count(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserTable {
    pub users: Vec<UserRecord>,
    pub loading: bool,
    /// Replaces the table when set.
    pub error: Option<String>,
}

impl Default for UserTable {
    fn default() -> Self {
        Self { users: Vec::new(), loading: true, error: None }
    }
}

impl UserTable {
    pub fn loaded(&mut self, users: Vec<UserRecord>) {
        self.users = users;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(message.to_owned());
    }

    /// Drop a deleted user. Returns `false` if no row had that id.
    pub fn remove(&mut self, user_id: i64) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.user_id != user_id);
        self.users.len() != before
    }

    #[must_use]
    pub fn stats(&self) -> UserStats {
        UserStats::from_users(&self.users)
    }
}

/// Render a backend timestamp as e.g. `May 1, 2024, 09:05 AM` (UTC).
///
/// Accepts RFC 3339 and `YYYY-MM-DD HH:MM:SS`. Missing values render as `-`;
/// anything unparseable is shown verbatim.
#[must_use]
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return "-".to_owned();
    };
    let display = format_description!("[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]");
    let parsed = OffsetDateTime::parse(raw, &Rfc3339).map(|dt| dt.to_offset(time::UtcOffset::UTC)).or_else(|_| {
        PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
            .map(PrimitiveDateTime::assume_utc)
    });
    match parsed.ok().and_then(|dt| dt.format(display).ok()) {
        Some(text) => text,
        None => {
            leptos::logging::warn!("unrecognized timestamp '{raw}'");
            raw.to_owned()
        }
    }
}
