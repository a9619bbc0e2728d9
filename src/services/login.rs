//! Sign-in flow behind the login screen.
//!
//! The form's role selector is collected but never sent: the provider signs in
//! by email and password alone, and the dashboard shows the role stored on the
//! profile.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::error::AuthError;
use crate::net::provider::AuthProvider;
use crate::net::types::{Session, UserRole};
use crate::state::session::SessionController;

/// Shown when the provider rejects a sign-in without a message of its own.
pub const SIGN_IN_FALLBACK: &str = "Failed to sign in. Please create an account first.";

/// Raw login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Selected on the form; has no effect on authentication.
    pub role: UserRole,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Enter your email and password.")]
    MissingCredentials,

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl LoginError {
    /// Inline message for the login form.
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() { SIGN_IN_FALLBACK.to_owned() } else { message }
    }
}

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns [`LoginError::MissingCredentials`] if either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), LoginError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Sign in with the form's credentials and move the controller to the
/// dashboard on success.
///
/// # Errors
///
/// Returns a [`LoginError`] for blank input (no provider call is made) or a
/// rejected sign-in.
pub async fn submit_login(
    auth: &dyn AuthProvider,
    controller: &SessionController,
    form: &LoginForm,
) -> Result<Session, LoginError> {
    let (email, password) = validate_login_input(&form.email, &form.password)?;
    let session = auth.sign_in(&email, &password).await?;
    controller.request_login_success();
    Ok(session)
}
