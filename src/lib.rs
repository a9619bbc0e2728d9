//! # workhub
//!
//! Leptos + WASM client for the eStores WorkHub employee portal: account
//! registration, sign-in, and a profile dashboard. Authentication, sessions,
//! and profile storage live in a Supabase project; this crate collects form
//! input, calls the backend, and renders what comes back.
//!
//! The one stateful piece is [`state::session::SessionController`], which
//! decides which screen is shown as session events arrive.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
