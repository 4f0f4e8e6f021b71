//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod add_todo;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod otp_verification;
pub mod profile;
pub mod signup;
pub mod theme_settings;
pub mod todos;
pub mod user_info;
