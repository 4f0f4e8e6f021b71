//! Client-side state, kept free of browser APIs so it can be unit tested.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` persists identity, `access` derives visibility from it, `otp`
//! and `timer` drive email signup. The remaining modules back one page each.

pub mod access;
pub mod notice;
pub mod otp;
pub mod profile;
pub mod session;
pub mod timer;
pub mod todos;
pub mod users;
