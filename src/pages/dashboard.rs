//! Dashboard screen: profile summary and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only while the controller's view is `Dashboard`. The profile is
//! fetched on every mount; when none is found the shell renders without
//! user details.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::brand_header::BrandHeader;
use crate::components::loading_screen::LoadingScreen;
use crate::components::profile_card::ProfileCard;
use crate::services::profile::load_profile;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let profile = RwSignal::new(AuthState::default());

    let load_ctx = ctx.clone();
    leptos::task::spawn_local(async move {
        let user = load_profile(&*load_ctx.auth, &*load_ctx.store).await;
        profile.set(AuthState::loaded(user));
    });

    let controller = ctx.controller.clone();
    let on_logout = move |_| {
        let controller = controller.clone();
        leptos::task::spawn_local(async move { controller.request_logout().await });
    };

    view! {
        <Show when=move || !profile.get().loading fallback=|| view! { <LoadingScreen/> }>
            <div class="dashboard">
                <header class="dashboard__header">
                    <BrandHeader/>
                    <button class="dashboard__logout" type="button" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </header>
                <main class="dashboard__main">
                    <h2>"Welcome to Your Dashboard"</h2>
                    {move || profile.get().user.map(|user| view! { <ProfileCard user/> })}
                </main>
            </div>
        </Show>
    }
}
