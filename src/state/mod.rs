//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the one piece of app-wide mutable state (which screen is
//! shown); `auth` holds the dashboard's read-only profile copy.

pub mod auth;
pub mod session;
