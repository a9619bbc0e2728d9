//! In-memory fakes for the auth provider and profile store.
//!
//! Every fake records the calls it receives so tests can assert that local
//! validation short-circuits before any remote call.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::net::error::{AuthError, StoreError};
use crate::net::events::{SessionCallback, SessionListeners, Subscription};
use crate::net::provider::{AuthProvider, ProfileStore};
use crate::net::types::{AuthUser, Identity, Session, SignUpMetadata, SignUpOutcome, UserRole};

pub fn session(user_id: &str) -> Session {
    Session {
        access_token: format!("access-{user_id}"),
        refresh_token: format!("refresh-{user_id}"),
        expires_at: i64::MAX,
        user: Identity { id: user_id.to_owned(), email: Some(format!("{user_id}@example.com")) },
    }
}

pub fn profile(user_id: &str) -> AuthUser {
    AuthUser {
        id: user_id.to_owned(),
        email: format!("{user_id}@example.com"),
        name: "Ada".to_owned(),
        surname: "Lovelace".to_owned(),
        phone: "555-0100".to_owned(),
        role: UserRole::Admin,
    }
}

type SessionResult = Result<Option<Session>, AuthError>;

/// Scripted answer for one `get_current_session` call.
pub enum SessionReply {
    Ready(SessionResult),
    /// Resolves when the paired sender fires.
    Deferred(oneshot::Receiver<SessionResult>),
}

#[derive(Default)]
pub struct FakeAuth {
    calls: Mutex<Vec<String>>,
    session_replies: Mutex<VecDeque<SessionReply>>,
    current: Mutex<Option<Session>>,
    user_error: Mutex<Option<AuthError>>,
    sign_in_error: Mutex<Option<AuthError>>,
    sign_up_error: Mutex<Option<AuthError>>,
    sign_out_error: Mutex<Option<AuthError>>,
    sign_up_pending: Mutex<bool>,
    pub listeners: SessionListeners,
}

impl FakeAuth {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_session(session: Session) -> Arc<Self> {
        let fake = Self::default();
        *fake.current.lock().unwrap() = Some(session);
        Arc::new(fake)
    }

    pub fn push_session_reply(&self, reply: SessionReply) {
        self.session_replies.lock().unwrap().push_back(reply);
    }

    pub fn fail_user_lookup(&self, err: AuthError) {
        *self.user_error.lock().unwrap() = Some(err);
    }

    pub fn fail_sign_in(&self, err: AuthError) {
        *self.sign_in_error.lock().unwrap() = Some(err);
    }

    pub fn fail_sign_up(&self, err: AuthError) {
        *self.sign_up_error.lock().unwrap() = Some(err);
    }

    /// Make `sign_up` create the account without signing it in.
    pub fn require_confirmation(&self) {
        *self.sign_up_pending.lock().unwrap() = true;
    }

    pub fn fail_sign_out(&self, err: AuthError) {
        *self.sign_out_error.lock().unwrap() = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn current_session(&self) -> Option<Session> {
        self.current.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait(?Send)]
impl AuthProvider for FakeAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.record(format!("sign_in:{email}:{password}"));
        if let Some(err) = self.sign_in_error.lock().unwrap().clone() {
            return Err(err);
        }
        let session = session("u-signed-in");
        *self.current.lock().unwrap() = Some(session.clone());
        Ok(session)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &SignUpMetadata,
    ) -> Result<SignUpOutcome, AuthError> {
        self.record(format!("sign_up:{email}:{password}:{}:{}:{}", metadata.name, metadata.surname, metadata.phone));
        if let Some(err) = self.sign_up_error.lock().unwrap().clone() {
            return Err(err);
        }
        let session = session("u-new");
        if *self.sign_up_pending.lock().unwrap() {
            return Ok(SignUpOutcome { user: session.user, session: None });
        }
        *self.current.lock().unwrap() = Some(session.clone());
        Ok(SignUpOutcome { user: session.user.clone(), session: Some(session) })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.record("sign_out".to_owned());
        *self.current.lock().unwrap() = None;
        match self.sign_out_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn get_current_session(&self) -> Result<Option<Session>, AuthError> {
        self.record("get_current_session".to_owned());
        let reply = self.session_replies.lock().unwrap().pop_front();
        match reply {
            Some(SessionReply::Ready(result)) => result,
            Some(SessionReply::Deferred(rx)) => rx.await.unwrap_or(Ok(None)),
            None => Ok(self.current_session()),
        }
    }

    async fn get_current_user(&self) -> Result<Option<Identity>, AuthError> {
        self.record("get_current_user".to_owned());
        if let Some(err) = self.user_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.current_session().map(|s| s.user))
    }

    fn subscribe_session_changes(&self, callback: SessionCallback) -> Subscription {
        self.record("subscribe_session_changes".to_owned());
        self.listeners.subscribe(callback)
    }
}

#[derive(Default)]
pub struct FakeStore {
    calls: Mutex<Vec<String>>,
    profiles: Mutex<Vec<AuthUser>>,
    find_error: Mutex<Option<StoreError>>,
    insert_error: Mutex<Option<StoreError>>,
}

impl FakeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_profile(profile: AuthUser) -> Arc<Self> {
        let fake = Self::default();
        fake.profiles.lock().unwrap().push(profile);
        Arc::new(fake)
    }

    pub fn fail_find(&self, err: StoreError) {
        *self.find_error.lock().unwrap() = Some(err);
    }

    pub fn fail_insert(&self, err: StoreError) {
        *self.insert_error.lock().unwrap() = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn profiles(&self) -> Vec<AuthUser> {
        self.profiles.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl ProfileStore for FakeStore {
    async fn find_profile_by_id(&self, id: &str) -> Result<Option<AuthUser>, StoreError> {
        self.calls.lock().unwrap().push(format!("find_profile_by_id:{id}"));
        if let Some(err) = self.find_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.profiles.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn insert_profile(&self, record: &AuthUser) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(format!("insert_profile:{}", record.id));
        if let Some(err) = self.insert_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.profiles.lock().unwrap().push(record.clone());
        Ok(())
    }
}
