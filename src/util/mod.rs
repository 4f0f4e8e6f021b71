//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (`localStorage`, the `<html>`
//! theme attribute, redirects) from page and component logic.

pub mod auth;
pub mod storage;
pub mod theme;
