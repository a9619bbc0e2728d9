//! Typed errors for the auth provider and profile store.
//!
//! ERROR HANDLING
//! ==============
//! Every variant carries the human-readable message shown inline in the
//! initiating form. `error_code()` gives a stable machine-readable kind for
//! logs and tests. Classification of HTTP failures is kept pure so it can be
//! tested without a browser.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Errors produced by authentication provider calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Email/password pair was rejected.
    #[error("{0}")]
    InvalidCredentials(String),

    /// An account already exists for the email.
    #[error("{0}")]
    DuplicateAccount(String),

    /// The password does not meet the provider's policy.
    #[error("{0}")]
    WeakPassword(String),

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// Any other non-success response.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl AuthError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials(_) => "E_INVALID_CREDENTIALS",
            Self::DuplicateAccount(_) => "E_DUPLICATE_ACCOUNT",
            Self::WeakPassword(_) => "E_WEAK_PASSWORD",
            Self::Network(_) => "E_NETWORK",
            Self::Rejected { .. } => "E_AUTH_REJECTED",
        }
    }
}

/// Errors produced by profile store calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A table constraint (unique key, not-null, foreign key) was violated.
    #[error("{0}")]
    ConstraintViolation(String),

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// Any other non-success response.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl StoreError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConstraintViolation(_) => "E_CONSTRAINT_VIOLATION",
            Self::Network(_) => "E_NETWORK",
            Self::Rejected { .. } => "E_STORE_REJECTED",
        }
    }
}

/// Pick the first non-empty string field of a JSON error body.
fn first_str<'a>(body: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .find(|s| !s.trim().is_empty())
}

/// Map a failed auth API response to a typed [`AuthError`].
///
/// Understands both the current `{error_code, msg}` body shape and the older
/// OAuth-style `{error, error_description}` shape.
#[must_use]
pub fn classify_auth_failure(status: u16, body: &str) -> AuthError {
    let parsed: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    let code = first_str(&parsed, &["error_code", "error"]).unwrap_or_default();
    let message = first_str(&parsed, &["msg", "error_description", "message"])
        .map_or_else(|| format!("auth request failed: {status}"), str::to_owned);

    match code {
        "invalid_credentials" | "invalid_grant" => AuthError::InvalidCredentials(message),
        "user_already_exists" | "email_exists" => AuthError::DuplicateAccount(message),
        "weak_password" => AuthError::WeakPassword(message),
        _ => AuthError::Rejected { status, message },
    }
}

/// Map a failed `PostgREST` response to a typed [`StoreError`].
///
/// SQLSTATE class `23` (integrity constraint violation) becomes
/// [`StoreError::ConstraintViolation`].
#[must_use]
pub fn classify_store_failure(status: u16, body: &str) -> StoreError {
    let parsed: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    let code = first_str(&parsed, &["code"]).unwrap_or_default();
    let message = first_str(&parsed, &["message", "details", "hint"])
        .map_or_else(|| format!("profile request failed: {status}"), str::to_owned);

    if code.starts_with("23") {
        StoreError::ConstraintViolation(message)
    } else {
        StoreError::Rejected { status, message }
    }
}
