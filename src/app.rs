//! Root application component and shared backend context.

use std::sync::Arc;

use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::loading_screen::LoadingScreen;
use crate::config::{ConfigError, WorkhubConfig};
use crate::net::provider::{AuthProvider, ProfileStore};
use crate::net::supabase::SupabaseClient;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::session::{SessionController, View};

/// Backend handles and the session controller, provided to every page.
#[derive(Clone)]
pub struct AppContext {
    pub controller: SessionController,
    pub auth: Arc<dyn AuthProvider>,
    pub store: Arc<dyn ProfileStore>,
}

impl AppContext {
    /// Wire a Supabase client into both traits and a controller whose view
    /// writes land in `screen`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the build-time backend settings are unusable.
    pub fn from_build_env(screen: RwSignal<View>) -> Result<Self, ConfigError> {
        let client = Arc::new(SupabaseClient::new(WorkhubConfig::from_build_env()?));
        let auth: Arc<dyn AuthProvider> = client.clone();
        let store: Arc<dyn ProfileStore> = client;
        let controller = SessionController::new(Arc::clone(&auth)).with_view_listener(move |next| screen.set(next));
        Ok(Self { controller, auth, store })
    }
}

/// Root application component.
///
/// Resolves the initial session, keeps a session-change subscription for its
/// own lifetime, and renders the screen for the controller's current view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let screen = RwSignal::new(View::Loading);
    let ctx = match AppContext::from_build_env(screen) {
        Ok(ctx) => ctx,
        Err(err) => {
            leptos::logging::error!("backend configuration unusable: {err}");
            return view! {
                <Title text="eStores WorkHub"/>
                <div class="config-error" role="alert">{err.to_string()}</div>
            }
            .into_any();
        }
    };
    provide_context(ctx.clone());

    let controller = ctx.controller.clone();
    controller.subscribe(Arc::new(|fut: LocalBoxFuture<'static, ()>| leptos::task::spawn_local(fut)));
    let startup = controller.clone();
    leptos::task::spawn_local(async move { startup.initialize().await });
    on_cleanup(move || controller.teardown());

    // Session-change resolutions often rewrite the same view; only remount on
    // an actual change.
    let current = Memo::new(move |_| screen.get());

    view! {
        <Title text="eStores WorkHub"/>
        {move || match current.get() {
            View::Loading => view! { <LoadingScreen/> }.into_any(),
            View::Login => view! { <LoginPage/> }.into_any(),
            View::Signup => view! { <SignupPage/> }.into_any(),
            View::Dashboard => view! { <DashboardPage/> }.into_any(),
        }}
    }
    .into_any()
}
