//! Supabase adapter implementing [`AuthProvider`] and [`ProfileStore`].
//!
//! Browser (csr): real HTTP calls via `gloo-net` against the project's auth
//! (`/auth/v1`) and REST (`/rest/v1`) endpoints.
//! Host builds: remote calls fail with [`AuthError::Network`] /
//! [`StoreError::Network`]; local session bookkeeping still works so it can
//! be tested.
//!
//! SESSION LIFECYCLE
//! =================
//! The current session is held in memory and mirrored to `localStorage` under
//! `sb-{project_ref}-auth-token`. It is restored at construction, refreshed
//! when it is within [`SESSION_EXPIRY_MARGIN_SECS`] of expiry, and cleared on
//! sign-out or a rejected refresh. Every change is emitted to subscribers.
//!
//! [`SESSION_EXPIRY_MARGIN_SECS`]: super::types::SESSION_EXPIRY_MARGIN_SECS

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

#[cfg(feature = "csr")]
use super::error::{classify_auth_failure, classify_store_failure};
use super::error::{AuthError, StoreError};
use super::events::{SessionCallback, SessionListeners, Subscription};
use super::provider::{AuthProvider, ProfileStore};
use super::types::{AuthUser, Identity, Session, SessionEvent, SignUpMetadata, SignUpOutcome};
use crate::config::WorkhubConfig;
use crate::util::clock;
use crate::util::storage::SessionSlot;

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "network requests are only available in the browser";

fn password_grant_url(base: &str) -> String {
    format!("{base}/auth/v1/token?grant_type=password")
}

fn refresh_grant_url(base: &str) -> String {
    format!("{base}/auth/v1/token?grant_type=refresh_token")
}

fn signup_url(base: &str) -> String {
    format!("{base}/auth/v1/signup")
}

fn logout_url(base: &str) -> String {
    format!("{base}/auth/v1/logout")
}

fn profiles_url(base: &str) -> String {
    format!("{base}/rest/v1/profiles")
}

fn profile_lookup_url(base: &str, id: &str) -> String {
    format!("{base}/rest/v1/profiles?id=eq.{id}&select=*")
}

fn sign_up_payload(email: &str, password: &str, metadata: &SignUpMetadata) -> Value {
    serde_json::json!({
        "email": email,
        "password": password,
        "data": metadata,
    })
}

/// Token grant body returned by sign-in, sign-up, and refresh.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: Identity,
}

impl TokenResponse {
    /// A grant without any expiry would be stale on arrival and refresh forever.
    fn into_session(self, now_secs: i64) -> Result<Session, AuthError> {
        let expires_at = match (self.expires_at, self.expires_in) {
            (Some(at), _) => at,
            (None, Some(secs)) => now_secs.saturating_add(secs),
            (None, None) => {
                return Err(AuthError::Rejected { status: 200, message: "token response carries no expiry".to_owned() });
            }
        };
        Ok(Session { access_token: self.access_token, refresh_token: self.refresh_token, expires_at, user: self.user })
    }
}

fn unexpected_body(err: &serde_json::Error) -> AuthError {
    AuthError::Rejected { status: 200, message: format!("unexpected response: {err}") }
}

fn parse_token_response(body: Value, now_secs: i64) -> Result<Session, AuthError> {
    let token: TokenResponse = serde_json::from_value(body).map_err(|e| unexpected_body(&e))?;
    token.into_session(now_secs)
}

/// Sign-up returns a token grant when the project auto-confirms accounts and a
/// bare user object (or `{ "user": .. }`) when email confirmation is required.
fn parse_sign_up_response(body: Value, now_secs: i64) -> Result<SignUpOutcome, AuthError> {
    if body.get("access_token").is_some() {
        let session = parse_token_response(body, now_secs)?;
        return Ok(SignUpOutcome { user: session.user.clone(), session: Some(session) });
    }
    let user = body.get("user").cloned().unwrap_or(body);
    let user: Identity = serde_json::from_value(user)
        .map_err(|_| AuthError::Rejected { status: 200, message: "unexpected sign-up response".to_owned() })?;
    Ok(SignUpOutcome { user, session: None })
}

fn first_profile(body: Value) -> Result<Option<AuthUser>, StoreError> {
    let rows: Vec<AuthUser> = serde_json::from_value(body)
        .map_err(|e| StoreError::Rejected { status: 200, message: format!("unexpected response: {e}") })?;
    Ok(rows.into_iter().next())
}

/// HTTP client for one Supabase project.
pub struct SupabaseClient {
    config: WorkhubConfig,
    slot: SessionSlot,
    session: Arc<Mutex<Option<Session>>>,
    listeners: SessionListeners,
}

impl SupabaseClient {
    /// Create a client, restoring any session persisted by a previous visit.
    #[must_use]
    pub fn new(config: WorkhubConfig) -> Self {
        let slot = SessionSlot::for_project(&config.project_ref);
        let restored = slot.load();
        Self { config, slot, session: Arc::new(Mutex::new(restored)), listeners: SessionListeners::new() }
    }

    fn current(&self) -> Option<Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Bearer token for REST calls: the session's access token or the anon key.
    fn bearer(&self) -> String {
        self.current()
            .map_or_else(|| self.config.anon_key.clone(), |s| s.access_token)
    }

    fn store_session(&self, session: Session, event: SessionEvent) {
        self.slot.save(&session);
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(session);
        self.listeners.emit(event);
    }

    fn clear_session(&self) {
        let previous = self.session.lock().unwrap_or_else(PoisonError::into_inner).take();
        self.slot.clear();
        if previous.is_some() {
            self.listeners.emit(SessionEvent::SignedOut);
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let payload = serde_json::json!({ "refresh_token": refresh_token });
        let body = self.auth_post(&refresh_grant_url(&self.config.url), None, Some(&payload)).await?;
        let session = parse_token_response(body, clock::now_unix_secs())?;
        self.store_session(session.clone(), SessionEvent::TokenRefreshed);
        Ok(session)
    }

    #[cfg(feature = "csr")]
    async fn auth_post(&self, url: &str, bearer: Option<&str>, payload: Option<&Value>) -> Result<Value, AuthError> {
        let token = bearer.unwrap_or(&self.config.anon_key);
        let builder = gloo_net::http::Request::post(url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {token}"));
        let request = match payload {
            Some(payload) => builder.json(payload),
            None => builder.build(),
        }
        .map_err(|e| AuthError::Network(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            return Err(classify_auth_failure(status, &body));
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| unexpected_body(&e))
    }

    #[cfg(not(feature = "csr"))]
    async fn auth_post(&self, url: &str, bearer: Option<&str>, payload: Option<&Value>) -> Result<Value, AuthError> {
        let _ = (url, bearer, payload);
        Err(AuthError::Network(UNAVAILABLE.to_owned()))
    }

    #[cfg(feature = "csr")]
    async fn rest_get(&self, url: &str) -> Result<Value, StoreError> {
        let resp = gloo_net::http::Request::get(url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", self.bearer()))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            return Err(classify_store_failure(status, &body));
        }
        serde_json::from_str(&body)
            .map_err(|e| StoreError::Rejected { status, message: format!("unexpected response: {e}") })
    }

    #[cfg(not(feature = "csr"))]
    async fn rest_get(&self, url: &str) -> Result<Value, StoreError> {
        let _ = (url, self.bearer());
        Err(StoreError::Network(UNAVAILABLE.to_owned()))
    }

    #[cfg(feature = "csr")]
    async fn rest_insert(&self, url: &str, payload: &Value) -> Result<(), StoreError> {
        let resp = gloo_net::http::Request::post(url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", self.bearer()))
            .header("Prefer", "return=minimal")
            .json(payload)
            .map_err(|e| StoreError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(classify_store_failure(status, &body));
        }
        Ok(())
    }

    #[cfg(not(feature = "csr"))]
    async fn rest_insert(&self, url: &str, payload: &Value) -> Result<(), StoreError> {
        let _ = (url, payload, self.bearer());
        Err(StoreError::Network(UNAVAILABLE.to_owned()))
    }
}

#[async_trait(?Send)]
impl AuthProvider for SupabaseClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let payload = serde_json::json!({ "email": email, "password": password });
        let body = self.auth_post(&password_grant_url(&self.config.url), None, Some(&payload)).await?;
        let session = parse_token_response(body, clock::now_unix_secs())?;
        self.store_session(session.clone(), SessionEvent::SignedIn);
        Ok(session)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &SignUpMetadata,
    ) -> Result<SignUpOutcome, AuthError> {
        let payload = sign_up_payload(email, password, metadata);
        let body = self.auth_post(&signup_url(&self.config.url), None, Some(&payload)).await?;
        let outcome = parse_sign_up_response(body, clock::now_unix_secs())?;
        if let Some(session) = &outcome.session {
            self.store_session(session.clone(), SessionEvent::SignedIn);
        }
        Ok(outcome)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(session) = self.current() else {
            return Ok(());
        };
        let result = self
            .auth_post(&logout_url(&self.config.url), Some(&session.access_token), None)
            .await
            .map(|_| ());
        self.clear_session();
        result
    }

    async fn get_current_session(&self) -> Result<Option<Session>, AuthError> {
        let Some(session) = self.current() else {
            return Ok(None);
        };
        if !session.is_stale(clock::now_unix_secs()) {
            return Ok(Some(session));
        }
        match self.refresh(&session.refresh_token).await {
            Ok(refreshed) => Ok(Some(refreshed)),
            Err(err @ AuthError::Network(_)) => Err(err),
            Err(err) => {
                leptos::logging::warn!("session refresh rejected ({}): {err}", err.error_code());
                self.clear_session();
                Ok(None)
            }
        }
    }

    async fn get_current_user(&self) -> Result<Option<Identity>, AuthError> {
        Ok(self.get_current_session().await?.map(|s| s.user))
    }

    fn subscribe_session_changes(&self, callback: SessionCallback) -> Subscription {
        self.listeners.subscribe(callback)
    }
}

#[async_trait(?Send)]
impl ProfileStore for SupabaseClient {
    async fn find_profile_by_id(&self, id: &str) -> Result<Option<AuthUser>, StoreError> {
        let body = self.rest_get(&profile_lookup_url(&self.config.url, id)).await?;
        first_profile(body)
    }

    async fn insert_profile(&self, record: &AuthUser) -> Result<(), StoreError> {
        let payload = serde_json::to_value(record)
            .map_err(|e| StoreError::Rejected { status: 0, message: e.to_string() })?;
        self.rest_insert(&profiles_url(&self.config.url), &payload).await
    }
}
