//! Capability traits for the external auth provider and profile store.
//!
//! DESIGN
//! ======
//! The controller and flows depend only on these traits, held as
//! `Arc<dyn _>`, so tests can substitute in-memory fakes for the Supabase
//! adapter. Futures are `?Send` because browser HTTP futures are not `Send`;
//! the trait objects themselves are `Send + Sync` so handles can sit in
//! Leptos context.

use async_trait::async_trait;

use super::error::{AuthError, StoreError};
use super::events::{SessionCallback, Subscription};
use super::types::{AuthUser, Identity, Session, SignUpMetadata, SignUpOutcome};

/// Remote authentication service.
#[async_trait(?Send)]
pub trait AuthProvider: Send + Sync {
    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the credentials are rejected or the request fails.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Create an account carrying `metadata` as user metadata.
    ///
    /// The outcome carries a session only when the project signs new accounts
    /// in immediately.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the account cannot be created.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &SignUpMetadata,
    ) -> Result<SignUpOutcome, AuthError>;

    /// End the current session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the remote revoke fails. The local session is
    /// cleared regardless.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Current session, if any.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if a stale session could not be refreshed.
    async fn get_current_session(&self) -> Result<Option<Session>, AuthError>;

    /// Identity behind the current session, if any.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the session lookup fails.
    async fn get_current_user(&self) -> Result<Option<Identity>, AuthError>;

    /// Register `callback` for session-change events.
    fn subscribe_session_changes(&self, callback: SessionCallback) -> Subscription;
}

/// Remote `profiles` table.
#[async_trait(?Send)]
pub trait ProfileStore: Send + Sync {
    /// Look up a profile by account id.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the query fails.
    async fn find_profile_by_id(&self, id: &str) -> Result<Option<AuthUser>, StoreError>;

    /// Insert a new profile row.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on constraint violations or request failure.
    async fn insert_profile(&self, record: &AuthUser) -> Result<(), StoreError>;
}
