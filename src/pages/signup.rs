//! Signup screen: profile fields plus password confirmation.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::brand_header::BrandHeader;
use crate::components::form_error::FormError;
use crate::services::registration::{SignupForm, submit_signup};

/// One bound text input.
#[component]
fn SignupField(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="auth-label">
            {label}
            <input
                class="auth-input"
                type=input_type
                placeholder=placeholder
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let name = RwSignal::new(String::new());
    let surname = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let submit_ctx = ctx.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        busy.set(true);
        error.set(String::new());
        let form = SignupForm {
            name: name.get_untracked(),
            surname: surname.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let ctx = submit_ctx.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = submit_signup(&*ctx.auth, &*ctx.store, &ctx.controller, &form).await {
                error.set(err.user_message());
                busy.set(false);
            }
        });
    };

    let controller = ctx.controller.clone();
    let on_switch = move |_| controller.switch_to_login();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <BrandHeader subtitle="Create your employee management account"/>
                <FormError message=error/>
                <form class="auth-form" on:submit=on_submit>
                    <SignupField label="Name" input_type="text" placeholder="Your name" value=name/>
                    <SignupField label="Surname" input_type="text" placeholder="Your surname" value=surname/>
                    <SignupField label="Phone" input_type="tel" placeholder="Your phone" value=phone/>
                    <SignupField label="Email" input_type="email" placeholder="email@gmail.com" value=email/>
                    <SignupField label="Password" input_type="password" placeholder="********" value=password/>
                    <SignupField
                        label="Confirm Password"
                        input_type="password"
                        placeholder="********"
                        value=confirm_password
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Sign Up" }}
                    </button>
                </form>
                <button class="auth-switch" type="button" on:click=on_switch>
                    "Already have an account? Log in here"
                </button>
            </div>
        </div>
    }
}
