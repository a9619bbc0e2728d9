//! Login screen: email + password sign-in with a role selector.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::brand_header::BrandHeader;
use crate::components::form_error::FormError;
use crate::net::types::UserRole;
use crate::services::login::{LoginForm, submit_login};

pub const GETTING_STARTED_NOTE: &str = "To use the demo credentials, please create an account first using the sign-up form, or contact your administrator to set up demo users.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let submit_ctx = ctx.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        busy.set(true);
        error.set(String::new());
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked(), role: role.get_untracked() };
        let ctx = submit_ctx.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = submit_login(&*ctx.auth, &ctx.controller, &form).await {
                error.set(err.user_message());
                busy.set(false);
            }
        });
    };

    let controller = ctx.controller.clone();
    let on_switch = move |_| controller.switch_to_signup();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <BrandHeader subtitle="Sign in to your employee management portal"/>
                <FormError message=error/>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="email@gmail.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="********"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Select Your Role"
                        <select
                            class="auth-input"
                            prop:value=move || role.get().as_str()
                            on:change=move |ev| {
                                if let Some(selected) = UserRole::parse(&event_target_value(&ev)) {
                                    role.set(selected);
                                }
                            }
                        >
                            {UserRole::ALL
                                .into_iter()
                                .map(|option| view! { <option value=option.as_str()>{option.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <button class="auth-switch" type="button" on:click=on_switch>
                    "Don't have an account? Sign up here"
                </button>
            </div>
            <div class="auth-note">
                <h3>"Getting Started"</h3>
                <p>{GETTING_STARTED_NOTE}</p>
            </div>
        </div>
    }
}
