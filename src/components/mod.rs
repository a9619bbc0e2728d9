//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Small presentational pieces shared by the login, signup, and dashboard
//! screens. None of them talk to the backend.

pub mod brand_header;
pub mod form_error;
pub mod loading_screen;
pub mod profile_card;
