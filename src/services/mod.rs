//! Screen flows that talk to the backend.
//!
//! ARCHITECTURE
//! ============
//! Each flow takes the provider traits and the session controller directly,
//! so pages stay thin and the flows run under test against in-memory fakes.

pub mod login;
pub mod profile;
pub mod registration;
