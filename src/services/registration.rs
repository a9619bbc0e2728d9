//! Account registration flow behind the signup screen.
//!
//! Local checks run before any remote call. A new account always gets the
//! `employee` role, and its profile row is inserted whether or not the
//! provider signed it in (projects that require email confirmation return
//! no session). If the profile insert fails after the account was created,
//! the account is left in place and the store error is returned.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::net::error::{AuthError, StoreError};
use crate::net::provider::{AuthProvider, ProfileStore};
use crate::net::types::{AuthUser, Identity, SignUpMetadata, UserRole};
use crate::state::session::SessionController;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Shown when the provider or store fails without a message of its own.
pub const SIGN_UP_FALLBACK: &str = "Failed to create account";

/// Raw signup form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    fn metadata(&self) -> SignUpMetadata {
        SignUpMetadata { name: self.name.clone(), surname: self.surname.clone(), phone: self.phone.clone() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RegistrationError {
    /// Inline message for the signup form.
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() { SIGN_UP_FALLBACK.to_owned() } else { message }
    }
}

/// Check password confirmation, then minimum length in UTF-16 code units, as
/// browser `maxlength`/`minlength` count them.
///
/// # Errors
///
/// Returns the first failing check as a local [`RegistrationError`].
pub fn validate_signup(form: &SignupForm) -> Result<(), RegistrationError> {
    if form.password != form.confirm_password {
        return Err(RegistrationError::PasswordMismatch);
    }
    if form.password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(RegistrationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    Ok(())
}

/// Profile row for a freshly created account.
#[must_use]
pub fn new_profile(identity: &Identity, form: &SignupForm) -> AuthUser {
    AuthUser {
        id: identity.id.clone(),
        email: form.email.trim().to_owned(),
        name: form.name.clone(),
        surname: form.surname.clone(),
        phone: form.phone.clone(),
        role: UserRole::Employee,
    }
}

/// Create the account, then its profile row.
///
/// # Errors
///
/// Returns a local error without contacting the provider, an
/// [`RegistrationError::Auth`] if sign-up fails, or a
/// [`RegistrationError::Store`] if the profile insert fails.
pub async fn register(
    auth: &dyn AuthProvider,
    store: &dyn ProfileStore,
    form: &SignupForm,
) -> Result<AuthUser, RegistrationError> {
    validate_signup(form)?;
    let outcome = auth.sign_up(form.email.trim(), &form.password, &form.metadata()).await?;
    if outcome.session.is_none() {
        leptos::logging::log!("account {} created pending email confirmation", outcome.user.id);
    }
    let profile = new_profile(&outcome.user, form);
    if let Err(err) = store.insert_profile(&profile).await {
        leptos::logging::error!(
            "profile insert failed for account {} ({}): {err}; account left without profile",
            profile.id,
            err.error_code()
        );
        return Err(err.into());
    }
    Ok(profile)
}

/// Register and move the controller to the dashboard on success.
///
/// # Errors
///
/// See [`register`].
pub async fn submit_signup(
    auth: &dyn AuthProvider,
    store: &dyn ProfileStore,
    controller: &SessionController,
    form: &SignupForm,
) -> Result<AuthUser, RegistrationError> {
    let profile = register(auth, store, form).await?;
    controller.request_signup_success();
    Ok(profile)
}
