//! Page modules for the three screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signals and hands submission to a flow in
//! `services`; rendering details live in `components`.

pub mod dashboard;
pub mod login;
pub mod signup;
