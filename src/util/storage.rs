//! Persisted auth session in browser `localStorage`.
//!
//! Each Supabase project owns one slot, `sb-{project_ref}-auth-token`, so a
//! session survives page reloads and two projects on the same origin never
//! read each other's tokens. A slot holding anything that does not parse as a
//! [`Session`] is cleared and reads as empty. Host builds persist nothing.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::Session;

/// `localStorage` slot holding one project's session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSlot {
    key: String,
}

impl SessionSlot {
    #[must_use]
    pub fn for_project(project_ref: &str) -> Self {
        Self { key: format!("sb-{project_ref}-auth-token") }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Session left by a previous visit, if any.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            let raw = storage.get_item(&self.key).ok().flatten()?;
            match serde_json::from_str(&raw) {
                Ok(session) => Some(session),
                Err(err) => {
                    leptos::logging::warn!("discarding unreadable session in {}: {err}", self.key);
                    let _ = storage.remove_item(&self.key);
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    pub fn save(&self, session: &Session) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            match serde_json::to_string(session) {
                Ok(raw) => {
                    if storage.set_item(&self.key, &raw).is_err() {
                        leptos::logging::warn!("could not persist session to {}", self.key);
                    }
                }
                Err(err) => leptos::logging::warn!("could not encode session: {err}"),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session;
        }
    }

    pub fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
