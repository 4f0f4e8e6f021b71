//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam, `client` builds requests and classifies
//! failures, `types` defines the wire schema. `auth` owns session-writing
//! calls; `profile`, `users`, and `todos` are bearer-token resources.

pub mod auth;
pub mod client;
pub mod profile;
pub mod todos;
pub mod transport;
pub mod types;
pub mod users;
