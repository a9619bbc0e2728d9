//! Backend boundary: capability traits, their Supabase implementation, and
//! the shared wire types and errors.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` defines what the app needs from the backend, `supabase`
//! implements it over HTTP, `events` fans session changes out to
//! subscribers, and `types`/`error` define the shared schema.

pub mod error;
pub mod events;
pub mod provider;
pub mod supabase;
pub mod types;
