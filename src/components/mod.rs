//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write shared state from Leptos context providers
//! installed by `App`.

pub mod avatar;
pub mod google_button;
pub mod otp_entry;
pub mod sidebar;
pub mod toasts;
