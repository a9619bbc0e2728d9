//! Session-change listener registry.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Supabase adapter owns one `SessionListeners` and emits into it whenever
//! it stores, refreshes, or clears a session. Subscribers receive every event
//! until they call [`Subscription::unsubscribe`].

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::{Arc, Mutex, PoisonError};

use super::types::SessionEvent;

/// Callback invoked for every session-change event.
pub type SessionCallback = Arc<dyn Fn(SessionEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, SessionCallback)>,
}

/// Shared set of session-change callbacks.
#[derive(Clone, Default)]
pub struct SessionListeners {
    inner: Arc<Mutex<Registry>>,
}

impl SessionListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` and return the handle that removes it.
    pub fn subscribe(&self, callback: SessionCallback) -> Subscription {
        let mut registry = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        registry.next_id += 1;
        let id = registry.next_id;
        registry.entries.push((id, callback));
        Subscription { id, listeners: Arc::downgrade(&self.inner) }
    }

    /// Deliver `event` to every current subscriber.
    ///
    /// Callbacks are cloned out before dispatch so a callback may subscribe or
    /// unsubscribe without deadlocking.
    pub fn emit(&self, event: SessionEvent) {
        let callbacks: Vec<SessionCallback> = {
            let registry = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            registry.entries.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };
        for callback in callbacks {
            callback(event);
        }
    }

    /// Number of live subscriptions.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle returned by a session-change subscription.
///
/// Dropping the handle does not unsubscribe; call [`Subscription::unsubscribe`].
#[must_use = "dropping a Subscription leaves the callback registered"]
pub struct Subscription {
    id: u64,
    listeners: std::sync::Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Remove the callback from its registry. No-op if the registry is gone.
    pub fn unsubscribe(self) {
        let Some(inner) = self.listeners.upgrade() else {
            return;
        };
        let mut registry = inner.lock().unwrap_or_else(PoisonError::into_inner);
        registry.entries.retain(|(id, _)| *id != self.id);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish_non_exhaustive()
    }
}
