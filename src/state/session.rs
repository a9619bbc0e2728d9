//! Session view controller: decides which screen the user sees.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root `App` owns one controller. It resolves the initial view from the
//! auth provider, then re-resolves on every session-change event for the
//! lifetime of the app. Screens request transitions through the named
//! operations below and read the result through `view()` or the view
//! listener; nothing else writes the current view.
//!
//! TRANSITIONS
//! ===========
//! `Loading -> {Login, Dashboard}` on the initial check, `Login <-> Signup`
//! on switch, `{Login, Signup} -> Dashboard` on success, `Dashboard -> Login`
//! on logout. A session-change event re-evaluates to `Login` or `Dashboard`
//! from provider truth, overriding whatever local transition came before.
//!
//! ORDERING
//! ========
//! The initial check and session-change resolutions run concurrently and all
//! write the same view. There is no sequencing: whichever resolution finishes
//! last wins, even if it started first.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use futures::future::LocalBoxFuture;

use crate::net::events::Subscription;
use crate::net::provider::AuthProvider;
use crate::net::types::SessionEvent;

/// Screen currently presented to the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// Initial session check has not resolved yet. Never re-entered.
    #[default]
    Loading,
    Login,
    Signup,
    Dashboard,
}

/// Called after every write to the current view.
pub type ViewListener = Arc<dyn Fn(View) + Send + Sync>;

/// Runs a session-change resolution on the host event loop.
pub type Spawner = Arc<dyn Fn(LocalBoxFuture<'static, ()>) + Send + Sync>;

/// Owner of the current [`View`].
#[derive(Clone)]
pub struct SessionController {
    auth: Arc<dyn AuthProvider>,
    view: Arc<Mutex<View>>,
    listener: Option<ViewListener>,
    subscription: Arc<Mutex<Option<Subscription>>>,
}

impl SessionController {
    /// Create a controller in [`View::Loading`].
    #[must_use]
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            auth,
            view: Arc::new(Mutex::new(View::Loading)),
            listener: None,
            subscription: Arc::new(Mutex::new(None)),
        }
    }

    /// Attach a listener notified after every view write.
    #[must_use]
    pub fn with_view_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(View) + Send + Sync + 'static,
    {
        self.listener = Some(Arc::new(listener));
        self
    }

    /// Current view.
    pub fn view(&self) -> View {
        *self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a session-change subscription is currently held.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    fn set_view(&self, next: View) {
        {
            let mut current = self.view.lock().unwrap_or_else(PoisonError::into_inner);
            *current = next;
        }
        if let Some(listener) = &self.listener {
            listener(next);
        }
    }

    /// Resolve the initial view from the provider's current session.
    ///
    /// Provider errors are logged and resolve to [`View::Login`]; they are
    /// never returned to the caller.
    pub async fn initialize(&self) {
        self.resolve().await;
    }

    /// Re-resolve the view after a session-change notification.
    pub async fn on_session_change(&self, event: SessionEvent) {
        leptos::logging::log!("session change: {}", event.as_str());
        self.resolve().await;
    }

    async fn resolve(&self) {
        let next = match self.auth.get_current_session().await {
            Ok(Some(_)) => View::Dashboard,
            Ok(None) => View::Login,
            Err(err) => {
                leptos::logging::error!("Error checking session ({}): {err}", err.error_code());
                View::Login
            }
        };
        self.set_view(next);
    }

    /// Subscribe to session-change events, handing each resolution to `spawn`.
    ///
    /// Returns `false` without subscribing again if a subscription is already
    /// held.
    pub fn subscribe(&self, spawn: Spawner) -> bool {
        let mut slot = self.subscription.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return false;
        }
        let controller = self.clone();
        let subscription = self.auth.subscribe_session_changes(Arc::new(move |event| {
            let controller = controller.clone();
            spawn(Box::pin(async move { controller.on_session_change(event).await }));
        }));
        *slot = Some(subscription);
        true
    }

    /// Login screen reported a successful sign-in.
    pub fn request_login_success(&self) {
        self.set_view(View::Dashboard);
    }

    /// Signup screen reported a successful registration.
    pub fn request_signup_success(&self) {
        self.set_view(View::Dashboard);
    }

    /// Sign out, then show the login screen whatever the sign-out outcome.
    pub async fn request_logout(&self) {
        if let Err(err) = self.auth.sign_out().await {
            leptos::logging::warn!("sign-out failed ({}): {err}", err.error_code());
        }
        self.set_view(View::Login);
    }

    pub fn switch_to_signup(&self) {
        self.set_view(View::Signup);
    }

    pub fn switch_to_login(&self) {
        self.set_view(View::Login);
    }

    /// Drop the session-change subscription. Call once when the app root is
    /// destroyed; later calls are logged no-ops.
    pub fn teardown(&self) {
        let taken = self.subscription.lock().unwrap_or_else(PoisonError::into_inner).take();
        match taken {
            Some(subscription) => subscription.unsubscribe(),
            None => leptos::logging::warn!("teardown called without an active session subscription"),
        }
    }
}
