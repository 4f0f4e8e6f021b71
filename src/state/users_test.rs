use super::*;

fn user(user_id: i64, signup_method: &str, is_superuser: bool) -> UserRecord {
    UserRecord {
        user_id,
        username: format!("user{user_id}"),
        email: format!("user{user_id}@x.com"),
        signup_method: signup_method.to_owned(),
        is_superuser,
        created_at: None,
    }
}

// =============================================================
// UserTable
// =============================================================

#[test]
fn table_starts_loading() {
    let table = UserTable::default();
    assert!(table.loading);
    assert!(table.users.is_empty());
}

#[test]
fn stats_count_methods_and_superusers() {
    let mut table = UserTable::default();
    table.loaded(vec![user(1, "email", true), user(2, "google", false), user(3, "google", true), user(4, "", false)]);
    assert_eq!(table.stats(), UserStats { total: 4, google: 2, email: 1, superusers: 2 });
}

#[test]
fn remove_drops_only_matching_row() {
    let mut table = UserTable::default();
    table.loaded(vec![user(1, "email", false), user(2, "google", false)]);
    assert!(table.remove(1));
    assert!(!table.remove(1));
    assert_eq!(table.users.len(), 1);
    assert_eq!(table.users[0].user_id, 2);
    assert_eq!(table.stats().total, 1);
}

#[test]
fn failed_sets_error_and_stops_loading() {
    let mut table = UserTable::default();
    table.failed("Failed to load users");
    assert!(!table.loading);
    assert_eq!(table.error.as_deref(), Some("Failed to load users"));
}

// =============================================================
// format_timestamp
// =============================================================

#[test]
fn formats_rfc3339_in_utc() {
    assert_eq!(format_timestamp(Some("2024-05-01T09:05:00.000Z")), "May 1, 2024, 09:05 AM");
    assert_eq!(format_timestamp(Some("2024-12-31T23:30:00+02:00")), "Dec 31, 2024, 09:30 PM");
}

#[test]
fn formats_sql_style_timestamps() {
    assert_eq!(format_timestamp(Some("2023-01-15 14:00:00")), "Jan 15, 2023, 02:00 PM");
}

#[test]
fn missing_and_garbage_timestamps() {
    assert_eq!(format_timestamp(None), "-");
    assert_eq!(format_timestamp(Some("  ")), "-");
    assert_eq!(format_timestamp(Some("yesterday")), "yesterday");
}
