//! Profile fetch run each time the dashboard mounts.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::provider::{AuthProvider, ProfileStore};
use crate::net::types::AuthUser;

/// Look up the signed-in user's profile.
///
/// Returns `None` when there is no identity, no matching row, or any error;
/// errors are logged and never surfaced. No retry.
pub async fn load_profile(auth: &dyn AuthProvider, store: &dyn ProfileStore) -> Option<AuthUser> {
    let identity = match auth.get_current_user().await {
        Ok(Some(identity)) => identity,
        Ok(None) => return None,
        Err(err) => {
            leptos::logging::error!("Error loading user ({}): {err}", err.error_code());
            return None;
        }
    };
    match store.find_profile_by_id(&identity.id).await {
        Ok(Some(profile)) => Some(profile),
        Ok(None) => {
            leptos::logging::warn!("no profile row for account {}", identity.id);
            None
        }
        Err(err) => {
            leptos::logging::error!("Error loading user ({}): {err}", err.error_code());
            None
        }
    }
}
