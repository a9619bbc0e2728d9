//! Shared data types for the auth provider and profile store boundary.
//!
//! DESIGN
//! ======
//! `AuthUser` mirrors a row of the `profiles` table so serde round-trips stay
//! lossless. `Session` is treated as opaque by the view controller; only the
//! Supabase adapter looks inside it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Seconds before expiry at which a stored session is treated as stale.
pub const SESSION_EXPIRY_MARGIN_SECS: i64 = 60;

/// Portal role attached to a profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Employee,
    Admin,
    College,
    Industry,
}

impl UserRole {
    /// Every role in selector order.
    pub const ALL: [UserRole; 4] = [Self::Employee, Self::Admin, Self::College, Self::Industry];

    /// Wire value as stored in the `role` column.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Admin => "admin",
            Self::College => "college",
            Self::Industry => "industry",
        }
    }

    /// Human-readable label for selectors and the dashboard.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Admin => "Admin",
            Self::College => "College",
            Self::Industry => "Industry",
        }
    }

    /// Parse a wire value; unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == raw)
    }
}

/// Identity of the authenticated account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Account id (UUID string) assigned by the auth provider.
    pub id: String,
    /// Sign-in email, if the provider returned one.
    #[serde(default)]
    pub email: Option<String>,
}

/// An authenticated session held by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Expiry as seconds since the Unix epoch.
    pub expires_at: i64,
    pub user: Identity,
}

/// Account created by a sign-up request.
///
/// `session` is `None` when the project requires email confirmation before
/// the first sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub user: Identity,
    pub session: Option<Session>,
}

impl Session {
    /// Whether the access token is expired or about to expire at `now_secs`.
    #[must_use]
    pub fn is_stale(&self, now_secs: i64) -> bool {
        self.expires_at.saturating_sub(SESSION_EXPIRY_MARGIN_SECS) <= now_secs
    }
}

/// Profile record as stored in the `profiles` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub phone: String,
    #[serde(default)]
    pub role: UserRole,
}

impl AuthUser {
    /// Name and surname joined for display.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname).trim().to_owned()
    }
}

/// Profile fields attached to a new account as auth user metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpMetadata {
    pub name: String,
    pub surname: String,
    pub phone: String,
}

/// Session-change notification emitted by the auth provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

impl SessionEvent {
    /// Event name as used in log lines.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignedIn => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
            Self::TokenRefreshed => "TOKEN_REFRESHED",
        }
    }
}
