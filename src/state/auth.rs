//! Profile state for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled by the dashboard each time it mounts. There is no caching or
//! invalidation; a fresh mount refetches.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthUser;

/// Read-only copy of the current user's profile and its loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// State after the profile fetch finished, found or not.
    #[must_use]
    pub fn loaded(user: Option<AuthUser>) -> Self {
        Self { user, loading: false }
    }
}
