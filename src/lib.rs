//! # technians-web
//!
//! Leptos + WASM browser client for the Technians account service: email
//! signup with a one-time code, password and Google login, a dashboard with
//! profile, todos, and theme settings, and a superuser user-management panel.
//!
//! Browser glue lives behind the `csr` feature. Everything in `state`, `net`,
//! and `util` also builds natively so it can be unit tested.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::mount_to_body(app::App);
}
